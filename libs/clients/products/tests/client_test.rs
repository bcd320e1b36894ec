//! End-to-end client tests against the real products router on an ephemeral port.

use axum::{routing::get, Router};
use domain_products::{
    handlers, InMemoryProductRepository, ListParams, ProductCategory, ProductPayload,
    ProductService,
};
use products_client::{ClientConfig, ClientError, ProductsClient};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api", addr)
}

async fn seeded_client() -> ProductsClient {
    let router = Router::new().nest(
        "/api/products",
        handlers::router(ProductService::new(InMemoryProductRepository::seeded())),
    );
    let base_url = serve(router).await;
    ProductsClient::new(ClientConfig::new(base_url).with_retry_backoff(Duration::ZERO)).unwrap()
}

fn payload() -> ProductPayload {
    ProductPayload {
        name: Some("Dormio".to_string()),
        category: Some("bed".to_string()),
        brand: Some("Ashley".to_string()),
        price: Some(serde_json::json!(4_200_000)),
        description: Some("Queen bed with storage drawers".to_string()),
        image: Some("https://example.com/dormio.jpg".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_list_products_sends_query_params() {
    let client = seeded_client().await;

    let page = client
        .list_products(&ListParams {
            category: Some("chair".to_string()),
            sort_by: Some("price".to_string()),
            sort_order: Some("asc".to_string()),
            limit: Some("2".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.products.len(), 2);
    assert!(page
        .products
        .iter()
        .all(|p| p.category == ProductCategory::Chair));
    assert_eq!(page.pagination.total_products, 3);
    assert!(page.pagination.has_next_page);
}

#[tokio::test]
async fn test_crud_round_trip() {
    let client = seeded_client().await;

    let created = client.create_product(&payload()).await.unwrap();
    assert_eq!(created.id, 11);
    assert_eq!(client.get_product(created.id).await.unwrap(), created);

    let updated = client
        .update_product(
            created.id,
            &ProductPayload {
                price: Some(serde_json::json!(3_900_000)),
                ..payload()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, 3_900_000);
    assert_eq!(updated.created_at, created.created_at);

    let deleted = client.delete_product(created.id).await.unwrap();
    assert_eq!(deleted, updated);

    let err = client.get_product(created.id).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn test_validation_errors_are_surfaced_in_order() {
    let client = seeded_client().await;

    let err = client
        .create_product(&ProductPayload {
            brand: None,
            price: Some(serde_json::json!(0)),
            ..payload()
        })
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ClientError::Validation(vec![
            "Brand is required".to_string(),
            "Valid price is required".to_string(),
        ])
    );
}

#[tokio::test]
async fn test_malformed_query_is_a_bad_request() {
    let client = seeded_client().await;

    let err = client
        .list_products(&ListParams {
            page: Some("0".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert_eq!(err, ClientError::BadRequest("Invalid page: 0".to_string()));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_stats() {
    let client = seeded_client().await;

    let stats = client.stats().await.unwrap();

    assert_eq!(stats.total_products, 10);
    assert_eq!(stats.price_range.max, 7_000_000);
}

#[tokio::test]
async fn test_connection_failure_is_classified() {
    // Grab a free port, then close it so nothing is listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ProductsClient::new(
        ClientConfig::new(format!("http://{}/api", addr))
            .with_max_retries(1)
            .with_retry_backoff(Duration::ZERO),
    )
    .unwrap();

    let err = client.stats().await.unwrap_err();
    assert!(matches!(err, ClientError::Connection(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_timeout_is_classified() {
    let router = Router::new().route(
        "/api/products/stats",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "late"
        }),
    );
    let base_url = serve(router).await;

    let client = ProductsClient::new(
        ClientConfig::new(base_url)
            .with_timeout(Duration::from_millis(100))
            .with_max_retries(0),
    )
    .unwrap();

    let err = client.stats().await.unwrap_err();
    assert_eq!(err, ClientError::Timeout(Duration::from_millis(100)));
}

#[tokio::test]
async fn test_get_retries_server_errors() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let router = Router::new().route(
        "/api/products/stats",
        get(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                (axum::http::StatusCode::SERVICE_UNAVAILABLE, "busy")
            }
        }),
    );
    let base_url = serve(router).await;

    let client = ProductsClient::new(
        ClientConfig::new(base_url)
            .with_max_retries(2)
            .with_retry_backoff(Duration::ZERO),
    )
    .unwrap();

    let err = client.stats().await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Server {
            status: 503,
            message: "busy".to_string()
        }
    );
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_writes_are_not_retried() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let router = Router::new().route(
        "/api/products",
        axum::routing::post(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "boom")
            }
        }),
    );
    let base_url = serve(router).await;

    let client = ProductsClient::new(
        ClientConfig::new(base_url)
            .with_max_retries(3)
            .with_retry_backoff(Duration::ZERO),
    )
    .unwrap();

    let err = client.create_product(&payload()).await.unwrap_err();
    assert!(matches!(err, ClientError::Server { status: 500, .. }));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
