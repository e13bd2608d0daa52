//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
///
/// Rendering itself is pure string composition over already-valid schema data
/// and cannot fail; the only failure path is the terminal file write.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// IO error while writing generated source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
