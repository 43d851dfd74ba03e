//! Error types for Weft
//!
//! Uses `thiserror` for library errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Weft operations
pub type WeftResult<T> = Result<T, WeftError>;

/// Main error type for Weft operations
#[derive(Error, Debug)]
pub enum WeftError {
    /// A domain reaches itself through its own `extends` chain
    #[error("circular dependency detected: {}", .chain.join(" -> "))]
    CircularInheritance {
        /// Every domain on the resolution path, ending with the repeated name
        chain: Vec<String>,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

impl WeftError {
    /// Whether this error is a cycle in the inheritance graph.
    ///
    /// Validation tooling collects these instead of propagating them.
    pub fn is_circular(&self) -> bool {
        matches!(self, WeftError::CircularInheritance { .. })
    }
}
