//! Products Domain
//!
//! Furniture catalog: validation, the listing pipeline (filter, sort,
//! paginate), an in-memory store and catalog statistics.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, query pipeline, stats
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, payloads
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     handlers,
//!     repository::InMemoryProductRepository,
//!     service::ProductService,
//! };
//!
//! let repository = InMemoryProductRepository::seeded();
//! let service = ProductService::new(repository);
//!
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod repository;
pub mod seed;
pub mod service;
pub mod stats;
pub mod validation;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{Product, ProductCategory, ProductInput, ProductPayload};
pub use query::{
    ListParams, PageRequest, PaginationMeta, ProductFilter, ProductPage, ProductQuery,
    ProductSort, SortKey, SortOrder,
};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
pub use stats::{PriceRange, ProductStats};
pub use validation::{validate, ValidationReport};
