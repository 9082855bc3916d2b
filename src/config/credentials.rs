//! GitLab token loading from the INI credentials file.

use std::path::Path;

use ini::Ini;

/// INI section holding the token.
pub const TOKEN_SECTION: &str = "token";

/// Key of the GitLab token inside the section.
pub const TOKEN_KEY: &str = "GITLAB_TOKEN";

/// Read the GitLab token from an INI credentials file.
///
/// A missing file, an unreadable file, or an absent key all yield an empty
/// token; the sync then runs unauthenticated. Read problems are logged at
/// debug level only.
pub fn load_token(path: &Path) -> String {
    if !path.exists() {
        return String::new();
    }

    let ini = match Ini::load_from_file(path) {
        Ok(ini) => ini,
        Err(e) => {
            tracing::debug!("Ignoring unreadable credentials file {}: {}", path.display(), e);
            return String::new();
        }
    };

    ini.section(Some(TOKEN_SECTION))
        .and_then(|section| section.get(TOKEN_KEY))
        .unwrap_or_default()
        .to_string()
}
