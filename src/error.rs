//! # Error Types
//!
//! Conversion itself is infallible; errors only arise at the target
//! boundary, where rasters meet real devices.

use thiserror::Error;

/// Main error type for punto operations
#[derive(Debug, Error)]
pub enum PuntoError {
    /// Target-level delivery errors (connection, device state)
    #[error("target error: {0}")]
    Target(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
