//! API routes module

pub mod health;
pub mod info;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create all routes nested under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .merge(info::router())
}
