//! # Axum Helpers
//!
//! Server plumbing shared by the catalog services: router assembly with the
//! OpenAPI UIs, the standard error body, extractors that reject with that
//! body, CORS and security headers, health and graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let router = create_router::<ApiDoc>(api_routes, &config.cors_allowed_origins)?
//!     .merge(health_router(app_info!()));
//! create_production_app(router, &config.server, config.shutdown_timeout, async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{create_cors_layer, parse_allowed_origins, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{IdPath, JsonBody, QueryParams};
