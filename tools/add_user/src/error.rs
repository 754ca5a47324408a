//! Custom error types for the add-user client

use common::error::InputError;
use thiserror::Error;

/// Failure talking to the administrative API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure or non-success status
    #[error("{}", error_chain(.source))]
    Request {
        #[source]
        source: reqwest::Error,
        /// Raw response body, when the server sent one
        details: Option<String>,
    },

    /// Success status with a body that is not JSON
    #[error("invalid JSON in response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        details: String,
    },
}

impl ApiError {
    /// Raw response body attached to the error, if any
    pub fn details(&self) -> Option<&str> {
        match self {
            ApiError::Request { details, .. } => details.as_deref(),
            ApiError::Decode { details, .. } => Some(details),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(source: reqwest::Error) -> Self {
        ApiError::Request {
            source,
            details: None,
        }
    }
}

/// Render an error followed by each of its causes
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        cause = inner.source();
    }
    message
}

/// Everything that can stop an enrollment run
#[derive(Error, Debug)]
pub enum EnrollError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// Reading a prompt or writing the transcript failed
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Type alias for enrollment results
pub type EnrollResult<T> = Result<T, EnrollError>;
