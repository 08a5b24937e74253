//! Grantdoc Core: section model, error type and configuration plumbing
//!
//! Shared by the diff, compliance and quality crates so that every
//! analysis resolves a section's text the same way.

pub mod config;
pub mod data_model;
pub mod error;
pub mod text;

pub use config::from_yaml;
pub use data_model::DocumentSection;
pub use error::GrantDocError;

/// Analysis engine version
pub const ENGINE_VERSION: &str = "1.0.0";
