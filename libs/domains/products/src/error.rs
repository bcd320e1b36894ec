use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProductError {
    #[error("Product {0} not found")]
    NotFound(u64),

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("{0}")]
    MalformedInput(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::Validation(errors) => AppError::Validation(errors),
            ProductError::MalformedInput(msg) => AppError::InvalidParameter(msg),
        }
    }
}

/// Implement IntoResponse by delegating to AppError
impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ProductError::NotFound(9).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ProductError::Validation(vec!["Brand is required".into()])
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProductError::MalformedInput("Invalid page: 0".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_validation_message_joins_errors() {
        let err = ProductError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "Validation failed: a; b");
    }
}
