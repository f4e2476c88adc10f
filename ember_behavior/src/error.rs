//! Errors raised while turning scene definitions into a world and rules.
//!
//! The runtime core itself never fails; only loading can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown entity name `{0}`")]
    UnknownEntity(String),

    #[error("duplicate entity name `{0}`")]
    DuplicateEntity(String),
}

pub type Result<T> = std::result::Result<T, LoadError>;
