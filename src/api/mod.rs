//! GitLab repository API module.
//!
//! This module provides:
//! - HTTP client for the tree listing and raw-content endpoints
//! - Listing response types

pub mod client;
pub mod types;

pub use client::{GitLabApi, PAGE_SIZE};
pub use types::{EntryType, TreeEntry};
