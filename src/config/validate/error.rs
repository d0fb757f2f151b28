//! Validation error types

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid top_k: {0} (must be > 0)")]
    InvalidTopK(usize),

    #[error("class_dirs cannot be empty")]
    EmptyClassDirs,

    #[error("Invalid class directory: {0} (must start with the class count, e.g. 10_classes)")]
    InvalidClassDir(String),

    #[error("Invalid dpi: {0} (must be > 0 and <= 600)")]
    InvalidDpi(u32),
}
