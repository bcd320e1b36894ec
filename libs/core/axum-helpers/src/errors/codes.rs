//! Error codes carried in every error body.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
//! assert_eq!(ErrorCode::NotFound.code(), 1004);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Payload broke one or more product rules
    ValidationError,
    /// Path or query parameter could not be parsed
    InvalidParameter,
    /// Body was not valid JSON for the target type
    JsonExtraction,
    NotFound,
    InternalError,
}

impl ErrorCode {
    /// (identifier, numeric code, default message)
    const fn parts(self) -> (&'static str, i32, &'static str) {
        match self {
            Self::ValidationError => ("VALIDATION_ERROR", 1001, "Validation error"),
            Self::InvalidParameter => ("INVALID_PARAMETER", 1002, "Invalid request parameter"),
            Self::JsonExtraction => ("JSON_EXTRACTION", 1003, "Failed to parse request body"),
            Self::NotFound => ("NOT_FOUND", 1004, "Resource not found"),
            Self::InternalError => ("INTERNAL_ERROR", 1005, "An internal server error occurred"),
        }
    }

    /// Machine-readable identifier sent to clients
    pub fn as_str(&self) -> &'static str {
        self.parts().0
    }

    /// Numeric code attached to log events
    pub fn code(&self) -> i32 {
        self.parts().1
    }

    pub fn default_message(&self) -> &'static str {
        self.parts().2
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
