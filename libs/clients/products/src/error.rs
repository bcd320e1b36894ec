use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Could not reach the products API: {0}")]
    Connection(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Invalid client configuration: {0}")]
    Config(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Transient failures worth repeating for idempotent requests.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Timeout(_) | ClientError::Connection(_) => true,
            ClientError::Server { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Message suitable for showing to an end user.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Timeout(_) => {
                "The server is taking too long to respond. Please try again.".to_string()
            }
            ClientError::Connection(_) => {
                "Cannot connect to the server. Please check that the API is running.".to_string()
            }
            ClientError::NotFound(_) => "The requested product could not be found.".to_string(),
            ClientError::Validation(errors) => errors.join("\n"),
            ClientError::BadRequest(message) => message.clone(),
            ClientError::Server { .. } => {
                "The server encountered an error. Please try again later.".to_string()
            }
            ClientError::Decode(_) | ClientError::Config(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}
