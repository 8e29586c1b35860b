//! Ports layer: Trait definitions for the two external resources.
//!
//! Following Hexagonal Architecture, these traits define the boundary
//! between the application and the filesystem-backed providers.

use crate::domain::{DatasetTable, ModelCapability};

/// Failure to load one of the two filesystem inputs.
///
/// Cloneable so that a memoized failure can be handed out on every
/// subsequent `load()` call without re-reading the file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("file not found: {path}")]
    Missing { path: String },

    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("malformed content in {path}: {message}")]
    Malformed { path: String, message: String },
}

impl LoadError {
    /// Path of the file the provider expected.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Missing { path }
            | Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::Malformed { path, .. } => path,
        }
    }
}

/// Supplies the opaque classifier capability.
///
/// `load()` is memoized for the process lifetime: repeated calls return the
/// same value (referentially equal on success) without re-reading the file.
pub trait ModelProvider {
    fn load(&self) -> Result<&ModelCapability, LoadError>;
}

/// Supplies the historical patient dataset.
///
/// Memoized the same way as [`ModelProvider`]. Failure of one provider
/// never prevents the other from loading.
pub trait DatasetProvider {
    fn load(&self) -> Result<&DatasetTable, LoadError>;
}
