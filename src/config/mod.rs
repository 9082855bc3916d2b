//! Configuration module.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Reading the GitLab token from an INI credentials file
//! - Run mode definitions
//! - Configuration validation

pub mod credentials;
pub mod loader;
pub mod modes;
pub mod validation;

pub use credentials::load_token;
pub use loader::{Config, OptionsConfig, RemoteConfig, StorageConfig};
pub use modes::RunMode;
pub use validation::validate_config;
