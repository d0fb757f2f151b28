//! Configuration validation
//!
//! Validates a visualization configuration before any pipeline runs.

mod error;
mod validator;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;

pub use error::ValidationError;
pub use validator::{class_count, validate_config};
