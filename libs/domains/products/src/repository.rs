use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};
use crate::seed;

/// Repository trait for Product persistence
///
/// Only validated [`ProductInput`] values can be written; listing always
/// returns the whole collection in insertion order and leaves querying to the
/// caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Snapshot of every product, in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Create a new product with the next free id
    async fn create(&self, input: ProductInput) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: u64) -> ProductResult<Option<Product>>;

    /// Replace all mutable fields of an existing product
    async fn update(&self, id: u64, input: ProductInput) -> ProductResult<Product>;

    /// Remove a product and return it
    async fn delete(&self, id: u64) -> ProductResult<Product>;

    /// Number of stored products
    async fn count(&self) -> ProductResult<usize>;
}

#[derive(Debug)]
struct CatalogState {
    products: Vec<Product>,
    next_id: u64,
}

/// In-memory implementation of ProductRepository
///
/// The collection and the id counter share one lock, so concurrent creates
/// never hand out the same id and no write is lost.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    state: Arc<RwLock<CatalogState>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// Start from existing products; new ids continue after the highest one.
    pub fn with_products(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            state: Arc::new(RwLock::new(CatalogState { products, next_id })),
        }
    }

    /// Repository preloaded with the sample catalog
    pub fn seeded() -> Self {
        Self::with_products(seed::catalog())
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let state = self.state.read().await;
        Ok(state.products.clone())
    }

    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let mut state = self.state.write().await;

        let id = state.next_id;
        state.next_id += 1;

        let product = Product::new(id, input, Utc::now());
        state.products.push(product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: u64) -> ProductResult<Option<Product>> {
        let state = self.state.read().await;
        Ok(state.products.iter().find(|p| p.id == id).cloned())
    }

    async fn update(&self, id: u64, input: ProductInput) -> ProductResult<Product> {
        let mut state = self.state.write().await;

        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProductError::NotFound(id))?;
        product.apply_update(input);

        tracing::info!(product_id = id, "Updated product");
        Ok(product.clone())
    }

    async fn delete(&self, id: u64) -> ProductResult<Product> {
        let mut state = self.state.write().await;

        let index = state
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(ProductError::NotFound(id))?;
        let removed = state.products.remove(index);

        tracing::info!(product_id = id, "Deleted product");
        Ok(removed)
    }

    async fn count(&self) -> ProductResult<usize> {
        let state = self.state.read().await;
        Ok(state.products.len())
    }
}
