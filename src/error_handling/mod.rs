//! Error handling.
//!
//! This module provides:
//! - Error type definitions and categorization
//! - Classification of transport errors into the lookup error taxonomy
//! - The process exit-code policy for failed runs

mod categorization;
mod types;

// Re-export public API
pub use categorization::{classify_reqwest_error, exit_code_for};
pub use types::{ErrorKind, InitializationError, LookupError};
