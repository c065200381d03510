//! Cameraman error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a cameraman profile
#[derive(Error, Debug)]
pub enum CmanError {
    /// Profile file does not exist
    #[error("Cameraman profile not found: {}", .0.display())]
    MissingProfile(PathBuf),

    /// IO error when reading the profile
    #[error("Failed to read cameraman profile {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Smoothing window does not fit the angle buffer
    #[error("Angle buffer length {0} is outside 0..={max}", max = crate::params::ANGLE_BUFFER_CAPACITY)]
    BufferLength(i64),
}

/// Result type for cameraman operations
pub type Result<T> = std::result::Result<T, CmanError>;
