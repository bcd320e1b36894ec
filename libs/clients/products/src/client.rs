//! HTTP client for the products API.

use axum_helpers::{ErrorCode, ErrorResponse};
use core_config::FromEnv;
use domain_products::{ListParams, Product, ProductPage, ProductPayload, ProductStats};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Products API client.
///
/// GET requests are retried on timeouts, connection failures and 5xx
/// responses; writes are sent exactly once.
#[derive(Debug, Clone)]
pub struct ProductsClient {
    config: ClientConfig,
    client: Client,
}

impl ProductsClient {
    /// Create a new client.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Create a client from `PRODUCTS_API_*` environment variables.
    pub fn from_env() -> ClientResult<Self> {
        let config = ClientConfig::from_env().map_err(|e| ClientError::Config(e.to_string()))?;
        Self::new(config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self, params: &ListParams) -> ClientResult<ProductPage> {
        self.execute(Method::GET, "", |request| request.query(params))
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: u64) -> ClientResult<Product> {
        self.execute(Method::GET, &format!("/{}", id), |request| request)
            .await
    }

    #[instrument(skip(self, payload))]
    pub async fn create_product(&self, payload: &ProductPayload) -> ClientResult<Product> {
        self.execute(Method::POST, "", |request| request.json(payload))
            .await
    }

    #[instrument(skip(self, payload))]
    pub async fn update_product(&self, id: u64, payload: &ProductPayload) -> ClientResult<Product> {
        self.execute(Method::PUT, &format!("/{}", id), |request| {
            request.json(payload)
        })
        .await
    }

    /// Delete a product, returning the removed record.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: u64) -> ClientResult<Product> {
        self.execute(Method::DELETE, &format!("/{}", id), |request| request)
            .await
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> ClientResult<ProductStats> {
        self.execute(Method::GET, "/stats", |request| request)
            .await
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/products{}",
            self.config.base_url.trim_end_matches('/'),
            path
        )
    }

    async fn execute<T, F>(&self, method: Method, path: &str, prepare: F) -> ClientResult<T>
    where
        T: DeserializeOwned,
        F: Fn(RequestBuilder) -> RequestBuilder,
    {
        let url = self.endpoint(path);
        let attempts = if method == Method::GET {
            self.config.max_retries.saturating_add(1)
        } else {
            1
        };

        let mut attempt = 1;
        loop {
            debug!(%method, %url, attempt, "Sending products API request");

            let request = prepare(self.client.request(method.clone(), &url));
            let result = match request.send().await {
                Ok(response) => decode(response).await,
                Err(e) => Err(self.transport_error(e)),
            };

            match result {
                Err(err) if err.is_retryable() && attempt < attempts => {
                    warn!(%url, attempt, error = %err, "Products API request failed, retrying");
                    tokio::time::sleep(retry_delay(self.config.retry_backoff, attempt)).await;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.config.timeout)
        } else if err.is_builder() {
            ClientError::Config(err.to_string())
        } else {
            ClientError::Connection(err.to_string())
        }
    }
}

/// Linear backoff, capped at `Duration::MAX`.
fn retry_delay(backoff: Duration, attempt: u32) -> Duration {
    backoff.saturating_mul(attempt)
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()));
    }

    let body = response.text().await.unwrap_or_default();
    Err(classify_status(status, &body))
}

fn classify_status(status: StatusCode, body: &str) -> ClientError {
    let parsed: Option<ErrorResponse> = serde_json::from_str(body).ok();
    let message = parsed
        .as_ref()
        .map(|e| e.message.clone())
        .unwrap_or_else(|| body.to_string());

    match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        s if s.is_client_error() => match parsed {
            Some(error) if error.error == ErrorCode::ValidationError.as_str() => {
                ClientError::Validation(error.detail_messages())
            }
            _ => ClientError::BadRequest(message),
        },
        s => ClientError::Server {
            status: s.as_u16(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_delay_grows_linearly_and_saturates() {
        assert_eq!(
            retry_delay(Duration::from_millis(200), 3),
            Duration::from_millis(600)
        );
        assert_eq!(retry_delay(Duration::MAX, u32::MAX), Duration::MAX);
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = ProductsClient::new(ClientConfig::new("http://localhost:5000/api/")).unwrap();
        assert_eq!(
            client.endpoint("/7"),
            "http://localhost:5000/api/products/7"
        );
        assert_eq!(client.endpoint(""), "http://localhost:5000/api/products");
    }

    #[test]
    fn test_classify_validation_error() {
        let body = r#"{"code":1001,"error":"VALIDATION_ERROR","message":"Validation error","details":["Brand is required"]}"#;
        assert_eq!(
            classify_status(StatusCode::BAD_REQUEST, body),
            ClientError::Validation(vec!["Brand is required".to_string()])
        );
    }

    #[test]
    fn test_classify_parameter_error() {
        let body = r#"{"code":1002,"error":"INVALID_PARAMETER","message":"Invalid page: 0"}"#;
        assert_eq!(
            classify_status(StatusCode::BAD_REQUEST, body),
            ClientError::BadRequest("Invalid page: 0".to_string())
        );
    }

    #[test]
    fn test_classify_not_found_and_server_errors() {
        let body = r#"{"code":1004,"error":"NOT_FOUND","message":"Product 9 not found"}"#;
        assert_eq!(
            classify_status(StatusCode::NOT_FOUND, body),
            ClientError::NotFound("Product 9 not found".to_string())
        );

        assert_eq!(
            classify_status(StatusCode::BAD_GATEWAY, "upstream down"),
            ClientError::Server {
                status: 502,
                message: "upstream down".to_string()
            }
        );
    }
}
