//! Custom error types for the common library
//!
//! This module defines the errors raised while turning user-supplied text
//! into typed request fields.

use std::num::ParseIntError;
use thiserror::Error;

/// Error raised when user input cannot be coerced into a required type
#[derive(Error, Debug)]
pub enum InputError {
    /// Text that should have been an integer was not
    #[error("invalid integer for {field}: {value:?} ({source})")]
    InvalidInteger {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Type alias for Result with InputError
pub type InputResult<T> = Result<T, InputError>;
