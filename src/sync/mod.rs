//! Sync module for the sequential asset pipeline.
//!
//! This module provides:
//! - The five-step sync orchestrator
//! - Per-pass state tracking

pub mod pass;
pub mod state;

pub use pass::{download_file, run_sync_pass};
pub use state::{AssetKind, SyncState};
