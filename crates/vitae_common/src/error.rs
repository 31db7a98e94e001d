//! Error types for vitae.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VitaeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Profile error: {0}")]
    Profile(String),
}
