use axum::{
    http::{StatusCode, Uri},
    response::Response,
};

use super::{ErrorCode, error_response};

/// Fallback handler for unknown routes.
pub async fn not_found(uri: Uri) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        format!("Route {} not found", uri.path()),
        ErrorCode::NotFound,
    )
}
