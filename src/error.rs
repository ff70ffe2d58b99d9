//! Error types
//!
//! [`InputError`] covers user-supplied arrays and is shown inline in the UI.
//! [`AppError`] is what the binary can fail with.

use crate::config::{MAX_ARRAY_SIZE, MAX_VALUE, MIN_ARRAY_SIZE, MIN_VALUE};
use thiserror::Error;

/// Rejections produced while parsing a custom array
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Input cannot be empty.")]
    Empty,

    #[error("Invalid format. Found an empty value between commas.")]
    EmptyValue,

    #[error("Invalid number: \"{token}\". Please use integers.")]
    InvalidNumber { token: String },

    #[error("Value {value} is out of range ({}-{}).", MIN_VALUE, MAX_VALUE)]
    OutOfRange { value: i64 },

    #[error(
        "Array size must be between {} and {}. Current size: {len}.",
        MIN_ARRAY_SIZE,
        MAX_ARRAY_SIZE
    )]
    InvalidSize { len: usize },
}

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid array: {0}")]
    Input(#[from] InputError),

    #[error("failed to set up logging: {message}")]
    Logging { message: String },
}
