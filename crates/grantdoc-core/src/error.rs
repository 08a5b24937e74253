//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrantDocError {
    #[error("CONFIG/{0}")]
    Config(String),

    #[error("YAML/{0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, GrantDocError>;
