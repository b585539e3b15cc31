// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, UtilError>;

#[derive(Error, Debug)]
pub enum UtilError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Wrong input, first argument is float: {0}")]
    InvalidNumber(String),

    #[error("Wrong input, second argument is 'F' or 'C' (got '{0}')")]
    InvalidUnit(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to execute request: {0}")]
    Request(String),

    #[error("GitHub API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}
