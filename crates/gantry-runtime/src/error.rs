//! Runtime error types

use thiserror::Error;

/// Runtime error
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Duplicate bean name at registration
    #[error("Duplicate bean definition: {0}")]
    DuplicateBean(String),

    /// Invalid blueprint or bean shape
    #[error("Core error: {0}")]
    Core(#[from] gantry_core::CoreError),

    /// Manifest loading failure
    #[error("Manifest error: {0}")]
    Manifest(#[from] crate::manifest::ManifestError),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
