//! Core error types shared by the engine's collaborators

use thiserror::Error;

/// Result type alias using [`CoreError`]
pub type Result<T> = std::result::Result<T, CoreError>;

/// Failures reported by injected collaborators.
///
/// The engine logs and swallows these; nothing in the core is fatal to the
/// host process.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Catalog-related errors (play-count notification, lyric resolution)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Durable storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CoreError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
