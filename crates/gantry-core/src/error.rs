//! Error types for Gantry Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid definition: {0}")]
    InvalidDefinition(String),

    #[error("Duplicate bean definition: {0}")]
    DuplicateBean(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
