//! Typed client for the furniture catalog API.
//!
//! ```rust,no_run
//! use domain_products::ListParams;
//! use products_client::{ClientConfig, ProductsClient};
//!
//! # async fn example() -> Result<(), products_client::ClientError> {
//! let client = ProductsClient::new(ClientConfig::new("http://localhost:5000/api"))?;
//!
//! let params = ListParams {
//!     category: Some("chair".to_string()),
//!     sort_by: Some("price".to_string()),
//!     ..Default::default()
//! };
//! let page = client.list_products(&params).await?;
//! println!("{} chairs", page.pagination.total_products);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::ProductsClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
