//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput, ProductPayload};
use crate::query::{ListParams, ProductPage, ProductQuery};
use crate::repository::ProductRepository;
use crate::stats::ProductStats;

/// Product service providing business logic operations
///
/// Payloads are validated here before reaching the repository, and listing
/// runs the query pipeline over a snapshot of the catalog.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List products from raw query-string criteria
    #[instrument(skip(self))]
    pub async fn list_products(&self, params: ListParams) -> ProductResult<ProductPage> {
        let query = ProductQuery::try_from(params)?;
        self.query_products(&query).await
    }

    /// Run an already-parsed query against the current catalog
    #[instrument(skip(self, query))]
    pub async fn query_products(&self, query: &ProductQuery) -> ProductResult<ProductPage> {
        let products = self.repository.list().await?;
        let page = query.run(&products);

        tracing::debug!(
            total = page.pagination.total_products,
            returned = page.products.len(),
            "Listed products"
        );
        Ok(page)
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: u64) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product
    #[instrument(skip(self, payload), fields(product_name = ?payload.name))]
    pub async fn create_product(&self, payload: ProductPayload) -> ProductResult<Product> {
        let input = ProductInput::try_from(payload)?;
        self.repository.create(input).await
    }

    /// Replace a product's fields
    ///
    /// An unknown id is reported before the payload is validated.
    #[instrument(skip(self, payload))]
    pub async fn update_product(&self, id: u64, payload: ProductPayload) -> ProductResult<Product> {
        if self.repository.get_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound(id));
        }

        let input = ProductInput::try_from(payload)?;
        self.repository.update(id, input).await
    }

    /// Delete a product, returning the removed record
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: u64) -> ProductResult<Product> {
        self.repository.delete(id).await
    }

    /// Aggregate statistics over the whole catalog
    #[instrument(skip(self))]
    pub async fn product_stats(&self) -> ProductResult<ProductStats> {
        let products = self.repository.list().await?;
        Ok(ProductStats::from_products(&products))
    }

    /// Number of products currently stored
    #[instrument(skip(self))]
    pub async fn count_products(&self) -> ProductResult<usize> {
        self.repository.count().await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
