//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, RunMode};

/// Alltagslabor asset sync CLI.
#[derive(Parser, Debug)]
#[command(
    name = "alltagslabor-sync",
    version,
    about = "Mirror Alltagslabor experiment assets from GitLab",
    long_about = "Mirrors the experiment metadata, images, audio files, and imprint of the\n\
                  Alltagslabor site from its GitLab repository onto local disk, and searches\n\
                  the synced experiment list."
)]
pub struct Args {
    /// Run mode.
    #[arg(long, value_enum)]
    pub mode: Option<RunModeArg>,

    /// Free-text query for search mode.
    #[arg(long)]
    pub query: Option<String>,

    /// GitLab host URL.
    #[arg(long)]
    pub host: Option<String>,

    /// GitLab project path (namespace/name).
    #[arg(short, long)]
    pub project: Option<String>,

    /// Branch to mirror.
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Local data directory.
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Path to the INI credentials file.
    #[arg(long)]
    pub credentials: Option<PathBuf>,

    /// GitLab access token (overrides the credentials file).
    #[arg(short, long, env = "GITLAB_TOKEN")]
    pub token: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Exit nonzero when the sync pass fails.
    #[arg(long)]
    pub strict_exit: bool,

    /// Hide per-file download output.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI run mode argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RunModeArg {
    /// Mirror all assets from the remote repository.
    Sync,
    /// Search the synced experiment list.
    Search,
}

impl From<RunModeArg> for RunMode {
    fn from(arg: RunModeArg) -> Self {
        match arg {
            RunModeArg::Sync => RunMode::Sync,
            RunModeArg::Search => RunMode::Search,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.options.mode = mode.into();
        }

        if let Some(query) = self.query {
            config.options.query = Some(query);
        }

        if let Some(host) = self.host {
            config.remote.host = host;
        }

        if let Some(project) = self.project {
            config.remote.project = project;
        }

        if let Some(branch) = self.branch {
            config.remote.branch = branch;
        }

        if let Some(token) = self.token {
            config.remote.token = Some(token);
        }

        if let Some(dir) = self.data_dir {
            config.storage.data_dir = dir;
        }

        if let Some(credentials) = self.credentials {
            config.storage.credentials_file = credentials;
        }

        // Boolean flags (only override if set to non-default)
        if self.strict_exit {
            config.options.strict_exit = true;
        }

        if self.quiet {
            config.options.show_downloads = false;
            config.options.show_skipped = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_config() {
        let args = Args::parse_from([
            "alltagslabor-sync",
            "--project",
            "other/repo",
            "--branch",
            "develop",
            "--quiet",
        ]);

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.remote.project, "other/repo");
        assert_eq!(config.remote.branch, "develop");
        assert!(!config.options.show_downloads);
        // Untouched values keep their defaults
        assert_eq!(config.remote.host, "https://gitlab.com");
    }

    #[test]
    fn test_merge_keeps_defaults_without_flags() {
        let args = Args::parse_from(["alltagslabor-sync"]);

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.remote.project, "Datenflix007/alltagslabordata");
        assert!(config.options.show_downloads);
        assert!(!config.options.strict_exit);
    }

    #[test]
    fn test_mode_and_query() {
        let args = Args::parse_from([
            "alltagslabor-sync",
            "--mode",
            "search",
            "--query",
            "vulkan",
        ]);

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.options.mode, RunMode::Search);
        assert_eq!(config.options.query.as_deref(), Some("vulkan"));
    }
}
