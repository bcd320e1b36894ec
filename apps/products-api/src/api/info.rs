//! API discovery endpoint

use axum::{routing::get, Json, Router};
use domain_products::{ProductCategory, SortKey, SortOrder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
    pub filters: Vec<String>,
    pub categories: Vec<String>,
    pub sort_keys: Vec<String>,
    pub sort_orders: Vec<String>,
    pub pagination: BTreeMap<String, String>,
}

fn entries(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

async fn api_info() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Furniture Store API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: entries(&[
            (
                "GET /api/products",
                "Get all products (with filtering, sorting, pagination)",
            ),
            ("POST /api/products", "Create a new product"),
            ("GET /api/products/stats", "Get catalog statistics"),
            ("GET /api/products/{id}", "Get a single product"),
            ("PUT /api/products/{id}", "Update a product"),
            ("DELETE /api/products/{id}", "Delete a product"),
        ]),
        filters: ["category", "brand", "minPrice", "maxPrice", "search", "inStock"]
            .map(String::from)
            .to_vec(),
        categories: ProductCategory::ALL
            .iter()
            .map(|c| c.to_string())
            .collect(),
        sort_keys: [
            SortKey::Name,
            SortKey::Price,
            SortKey::CreatedAt,
            SortKey::UpdatedAt,
        ]
        .iter()
        .map(|k| k.to_string())
        .collect(),
        sort_orders: [SortOrder::Asc, SortOrder::Desc]
            .iter()
            .map(|o| o.to_string())
            .collect(),
        pagination: entries(&[
            ("page", "Page number (default: 1)"),
            ("limit", "Items per page (default: 8)"),
        ]),
    })
}

pub fn router() -> Router {
    Router::new().route("/", get(api_info))
}
