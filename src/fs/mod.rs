//! Filesystem module.
//!
//! Provides the local data layout and directory helpers.

pub mod paths;

pub use paths::{dest_for_entry, ensure_dir, remote_basename, DataLayout};
