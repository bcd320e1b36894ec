//! Custom extractors for Axum handlers.
//!
//! These turn extraction failures into [`AppError`](crate::AppError) responses
//! so every rejection shares the standard error body.

pub mod id_path;
pub mod json_body;
pub mod query_params;

pub use id_path::IdPath;
pub use json_body::JsonBody;
pub use query_params::QueryParams;
