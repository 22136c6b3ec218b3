//! Error types for the renderer crate.
//!
//! Every failure is raised at the point it occurs (file open, shader
//! compile, mesh parse) and propagates to the caller; there is no
//! retry or partial recovery.

use std::fmt;

/// Result type for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Renderer errors
#[derive(Debug, Clone)]
pub enum Error {
    /// GL-level failure (shader compile, program link, uniform lookup)
    Gl(ember_gl::Error),

    /// File access failure; carries the path and the OS error text
    Io(String),

    /// Mesh file could not be parsed
    MeshParse(String),

    /// Image file could not be decoded
    Image(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Gl(err) => write!(f, "{}", err),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
            Error::MeshParse(msg) => write!(f, "Mesh parse error: {}", msg),
            Error::Image(msg) => write!(f, "Image decode error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<ember_gl::Error> for Error {
    fn from(err: ember_gl::Error) -> Self {
        Error::Gl(err)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
