//! YAML configuration loading
//!
//! Catalogs and profiles are static data compiled into the engine, with an
//! optional YAML override supplied by the host application.

use serde::de::DeserializeOwned;

use crate::error::{GrantDocError, Result};

/// Deserialize a configuration value from YAML
pub fn from_yaml<T: DeserializeOwned>(yaml: &str) -> Result<T> {
    if yaml.trim().is_empty() {
        return Err(GrantDocError::Config("empty configuration document".to_string()));
    }
    Ok(serde_yaml::from_str(yaml)?)
}
