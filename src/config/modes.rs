//! Run mode definitions.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Available run modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Mirror all assets from the remote repository (default).
    #[default]
    Sync,
    /// Search the synced experiment list.
    Search,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Sync => write!(f, "sync"),
            RunMode::Search => write!(f, "search"),
        }
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sync" => Ok(RunMode::Sync),
            "search" => Ok(RunMode::Search),
            _ => Err(format!("Unknown run mode: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        assert_eq!("sync".parse::<RunMode>().unwrap(), RunMode::Sync);
        assert_eq!("Search".parse::<RunMode>().unwrap(), RunMode::Search);
        assert_eq!(RunMode::Sync.to_string(), "sync");
    }

    #[test]
    fn test_unknown_mode() {
        assert!("mirror".parse::<RunMode>().is_err());
    }
}
