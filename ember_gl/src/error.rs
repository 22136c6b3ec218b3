//! Error types for the GL veneer.
//!
//! Only shader compilation, program linking, and uniform lookup can
//! fail in a way the driver reports synchronously; everything else is
//! fire-and-forget like the underlying API.

use std::fmt;

/// Result type for GL veneer operations
pub type Result<T> = std::result::Result<T, Error>;

/// GL veneer errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Shader compilation failed; carries the driver info log when available
    ShaderCompile(String),

    /// Program linking failed; carries the driver info log when available
    ProgramLink(String),

    /// A named uniform does not exist in the linked program
    UniformNotFound(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ShaderCompile(log) => write!(f, "Shader compilation failed: {}", log),
            Error::ProgramLink(log) => write!(f, "Program link failed: {}", log),
            Error::UniformNotFound(name) => {
                write!(f, "Unable to find uniform with name '{}'", name)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
