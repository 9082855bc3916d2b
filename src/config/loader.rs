//! Configuration structures and loading logic.

use crate::config::modes::RunMode;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Remote repository configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    /// GitLab host URL.
    #[serde(default = "default_host")]
    pub host: String,

    /// Project path in `namespace/name` form.
    #[serde(default = "default_project")]
    pub project: String,

    /// Branch to mirror.
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Repository folder holding the images.
    #[serde(default = "default_image_folder")]
    pub image_folder: String,

    /// Repository folder holding the audio files.
    #[serde(default = "default_audio_folder")]
    pub audio_folder: String,

    /// Access token override; normally the token comes from the
    /// credentials file.
    #[serde(default)]
    pub token: Option<String>,
}

/// Local storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory the remote assets are mirrored into.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// INI file holding the GitLab token.
    #[serde(default = "default_credentials_file")]
    pub credentials_file: PathBuf,
}

/// Runtime options configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionsConfig {
    /// Run mode (sync or search).
    #[serde(default)]
    pub mode: RunMode,

    /// Free-text query for search mode.
    #[serde(default)]
    pub query: Option<String>,

    /// Whether to log each downloaded file.
    #[serde(default = "default_true")]
    pub show_downloads: bool,

    /// Whether to log skipped non-file entries.
    #[serde(default = "default_true")]
    pub show_skipped: bool,

    /// Whether a failed sync pass exits nonzero. When disabled the failure
    /// is logged and the process still reports success.
    #[serde(default)]
    pub strict_exit: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            project: default_project(),
            branch: default_branch(),
            image_folder: default_image_folder(),
            audio_folder: default_audio_folder(),
            token: None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            credentials_file: default_credentials_file(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::default(),
            query: None,
            show_downloads: true,
            show_skipped: true,
            strict_exit: false,
        }
    }
}

fn default_host() -> String {
    "https://gitlab.com".to_string()
}

fn default_project() -> String {
    "Datenflix007/alltagslabordata".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_image_folder() -> String {
    "img".to_string()
}

fn default_audio_folder() -> String {
    "audio".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("dataEditor")
}

fn default_credentials_file() -> PathBuf {
    // The site keeps its cloud.ini two levels above the checkout.
    PathBuf::from("../../cloud.ini")
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.remote.host, "https://gitlab.com");
        assert_eq!(config.remote.project, "Datenflix007/alltagslabordata");
        assert_eq!(config.remote.branch, "main");
        assert_eq!(config.remote.image_folder, "img");
        assert_eq!(config.remote.audio_folder, "audio");
        assert_eq!(config.storage.data_dir, PathBuf::from("dataEditor"));
        assert!(config.options.show_downloads);
        assert!(!config.options.strict_exit);
    }

    #[test]
    fn test_parse_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.remote.branch, "main");
        assert_eq!(config.options.mode, RunMode::Sync);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [remote]
            project = "group/repo"
            branch = "develop"

            [options]
            strict_exit = true
            "#,
        )
        .unwrap();

        assert_eq!(config.remote.project, "group/repo");
        assert_eq!(config.remote.branch, "develop");
        // Untouched sections keep their defaults
        assert_eq!(config.remote.image_folder, "img");
        assert!(config.options.strict_exit);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[storage]\ndata_dir = \"mirror\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.storage.data_dir, PathBuf::from("mirror"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[remote\nbroken").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::TomlParse(_)));
    }
}
