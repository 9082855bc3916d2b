//! Experiment records and search.
//!
//! Provides:
//! - The experiment record model
//! - An owning catalog with pure free-text filtering

pub mod catalog;
pub mod model;

pub use catalog::Catalog;
pub use model::Experiment;
