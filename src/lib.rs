//! Alltagslabor Sync - mirror experiment assets from GitLab.
//!
//! This library mirrors the assets of the Alltagslabor experiment site from
//! its GitLab repository onto local disk and searches the synced records.
//!
//! # Features
//!
//! - One-pass, strictly sequential sync of metadata, images, audio, and imprint
//! - Unauthenticated or token-authenticated access (INI credentials file)
//! - Free-text search over the synced experiment list
//!
//! # Example
//!
//! ```no_run
//! use alltagslabor_sync::{Config, GitLabApi, SyncState};
//! use alltagslabor_sync::sync::run_sync_pass;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let api = GitLabApi::new(
//!         &config.remote.host,
//!         &config.remote.project,
//!         &config.remote.branch,
//!         String::new(),
//!     )?;
//!
//!     let mut state = SyncState::default();
//!     run_sync_pass(&api, &config, &mut state).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod experiments;
pub mod fs;
pub mod output;
pub mod sync;

// Re-exports for convenience
pub use api::GitLabApi;
pub use config::{Config, RunMode};
pub use error::{Error, Result};
pub use experiments::{Catalog, Experiment};
pub use sync::{run_sync_pass, SyncState};
