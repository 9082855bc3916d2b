//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;
use url::Url;

/// Project path pattern: `namespace/name`, possibly nested subgroups.
const PROJECT_PATTERN: &str = r"^[A-Za-z0-9._-]+(/[A-Za-z0-9._-]+)+$";

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_host(&config.remote.host)?;
    validate_project(&config.remote.project)?;
    validate_branch(&config.remote.branch)?;
    validate_folder("image_folder", &config.remote.image_folder)?;
    validate_folder("audio_folder", &config.remote.audio_folder)?;

    Ok(())
}

/// Validate the GitLab host URL.
pub fn validate_host(host: &str) -> Result<()> {
    let url = Url::parse(host).map_err(|e| Error::ConfigValidation {
        field: "host".to_string(),
        message: format!("'{}' is not a valid URL: {}", host, e),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "host".to_string(),
            message: format!("'{}' must use http or https", host),
        });
    }

    if url.host_str().is_none() {
        return Err(Error::ConfigValidation {
            field: "host".to_string(),
            message: format!("'{}' is missing a host name", host),
        });
    }

    Ok(())
}

/// Validate the project path.
pub fn validate_project(project: &str) -> Result<()> {
    if project.is_empty() {
        return Err(Error::ConfigValidation {
            field: "project".to_string(),
            message: "project path must not be empty".to_string(),
        });
    }

    let project_pattern = Regex::new(PROJECT_PATTERN).unwrap();
    if !project_pattern.is_match(project) {
        return Err(Error::ConfigValidation {
            field: "project".to_string(),
            message: format!(
                "'{}' is not a valid project path. Expected 'namespace/name'.",
                project
            ),
        });
    }

    Ok(())
}

/// Validate the branch name.
pub fn validate_branch(branch: &str) -> Result<()> {
    if branch.is_empty() {
        return Err(Error::ConfigValidation {
            field: "branch".to_string(),
            message: "branch must not be empty".to_string(),
        });
    }

    if branch.chars().any(char::is_whitespace) {
        return Err(Error::ConfigValidation {
            field: "branch".to_string(),
            message: format!("'{}' must not contain whitespace", branch),
        });
    }

    Ok(())
}

/// Validate a repository folder name.
pub fn validate_folder(field: &str, folder: &str) -> Result<()> {
    if folder.is_empty() {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: "folder name must not be empty".to_string(),
        });
    }

    if folder.starts_with('/') || folder.starts_with('\\') {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("'{}' must be a relative path", folder),
        });
    }

    if folder.split('/').any(|component| component == "..") {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("'{}' must not contain '..'", folder),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_host() {
        assert!(validate_host("https://gitlab.com").is_ok());
        assert!(validate_host("http://git.example.org:8080").is_ok());
    }

    #[test]
    fn test_invalid_host() {
        assert!(validate_host("gitlab.com").is_err());
        assert!(validate_host("ftp://gitlab.com").is_err());
        assert!(validate_host("").is_err());
    }

    #[test]
    fn test_valid_project() {
        assert!(validate_project("Datenflix007/alltagslabordata").is_ok());
        assert!(validate_project("group/subgroup/repo").is_ok());
    }

    #[test]
    fn test_invalid_project() {
        assert!(validate_project("").is_err());
        assert!(validate_project("no-namespace").is_err());
        assert!(validate_project("bad name/repo").is_err());
    }

    #[test]
    fn test_valid_branch() {
        assert!(validate_branch("main").is_ok());
        assert!(validate_branch("feature/sync-rework").is_ok());
    }

    #[test]
    fn test_invalid_branch() {
        assert!(validate_branch("").is_err());
        assert!(validate_branch("bad branch").is_err());
    }

    #[test]
    fn test_valid_folder() {
        assert!(validate_folder("image_folder", "img").is_ok());
        assert!(validate_folder("image_folder", "assets/img").is_ok());
    }

    #[test]
    fn test_invalid_folder() {
        assert!(validate_folder("image_folder", "").is_err());
        assert!(validate_folder("image_folder", "/img").is_err());
        assert!(validate_folder("image_folder", "../img").is_err());
        assert!(validate_folder("image_folder", "img/../other").is_err());
    }

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }
}
