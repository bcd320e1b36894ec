//! Application state management

use domain_products::{InMemoryProductRepository, ProductService};

pub type CatalogService = ProductService<InMemoryProductRepository>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub products: CatalogService,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        let repository = if config.seed_catalog {
            InMemoryProductRepository::seeded()
        } else {
            InMemoryProductRepository::new()
        };

        Self {
            config,
            products: ProductService::new(repository),
        }
    }
}
