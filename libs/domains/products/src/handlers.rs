//! HTTP handlers for Products API

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestParameterResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    IdPath, JsonBody, QueryParams,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{Product, ProductCategory, ProductPayload};
use crate::query::{ListParams, PaginationMeta, ProductPage, SortKey, SortOrder};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::stats::{PriceRange, ProductStats};

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        product_stats,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(
            Product, ProductPayload, ProductCategory, ProductPage, PaginationMeta,
            ProductStats, PriceRange, SortKey, SortOrder
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestParameterResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Furniture catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/stats", get(product_stats))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// List products with filtering, sorting and pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ListParams),
    responses(
        (status = 200, description = "One page of matching products", body = ProductPage),
        (status = 400, response = BadRequestParameterResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryParams(params): QueryParams<ListParams>,
) -> ProductResult<Json<ProductPage>> {
    let page = service.list_products(params).await?;
    Ok(Json(page))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(payload): JsonBody<ProductPayload>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Catalog statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "Products",
    responses(
        (status = 200, description = "Aggregate catalog figures", body = ProductStats),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn product_stats<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ProductStats>> {
    let stats = service.product_stats().await?;
    Ok(Json(stats))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = u64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestParameterResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Replace a product's fields
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = u64, Path, description = "Product ID")
    ),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<ProductPayload>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(id, payload).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = u64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted; the removed record is returned", body = Product),
        (status = 400, response = BadRequestParameterResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<Product>> {
    let product = service.delete_product(id).await?;
    Ok(Json(product))
}
