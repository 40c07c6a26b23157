//! HTTP client for GuildHub API communication.
//!
//! This module provides the [`ApiClient`] type for making authenticated
//! requests to the GuildHub API. The client owns the request/response
//! transformation pipeline:
//!
//! - request bodies have their keys rewritten to snake_case before
//!   transmission
//! - response bodies have their keys rewritten to camelCase before being
//!   returned to the caller
//! - response statuses are classified by [`classify_status`], and the
//!   platform's 201/202 "pending" codes are surfaced as errors
//!
//! The client performs no retries, no rate limiting, and no caching; a
//! failure propagates to the caller exactly once.

use std::collections::HashMap;

use crate::casing::{keys_to_camel, keys_to_snake};
use crate::clients::errors::{
    classify_status, ApiError, ErrorPayload, RequestContext, StatusOutcome,
};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::GuildHubConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the GuildHub API.
///
/// The client handles:
/// - Base URI construction from the configured host (sandbox rewrite applied)
/// - Default headers including User-Agent and the bearer Authorization header
/// - Key-casing conversion on request and response bodies
/// - Status classification and error normalization
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync`, making it safe to share across async tasks.
/// Its configuration (host, headers) is read-only after construction, so
/// concurrent requests never contend on shared mutable state.
///
/// # Example
///
/// ```rust,ignore
/// use guildhub_api::{BotToken, GuildHubConfig};
/// use guildhub_api::clients::{ApiClient, HttpMethod, HttpRequest};
///
/// let config = GuildHubConfig::builder()
///     .bot_token(BotToken::new("my-bot-token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = ApiClient::new(&config);
/// let response = client.get("/guilds/G1").await?;
/// ```
#[derive(Debug)]
pub struct ApiClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.guildhub.com`), sandbox rewrite applied.
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &GuildHubConfig) -> Self {
        let base_uri = config.effective_host().as_ref().to_string();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}GuildHub API Library v{SDK_VERSION} | Rust {rust_version}");

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.bot_token().as_ref()),
        );

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the GuildHub API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction
    /// - Header merging
    /// - snake_case conversion of the request body
    /// - camelCase conversion of the response body
    /// - Status classification and error normalization
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - The token is rejected (`Unauthorized`) or lacks permission (`Forbidden`)
    /// - The platform reports the operation as pending via 201/202 (`Pending`)
    /// - Any other non-2xx status is received (`Status`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        // Validate request first
        request.verify()?;

        // Build full URL
        let url = format!("{}{}", self.base_uri, request.path);

        // Convert the body to its wire (snake_case) form
        let wire_body = request.body.as_ref().map(keys_to_snake);

        let context = RequestContext {
            method: request.http_method,
            path: request.path.clone(),
            body: wire_body.clone(),
        };

        tracing::debug!("Sending {} request to {}", request.http_method, request.path);

        // Build the reqwest request
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        // Add headers
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                req_builder = req_builder.header(key, value);
            }
        }

        // Add query params
        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        // Add body
        if let Some(body) = &wire_body {
            req_builder = req_builder.json(body);
        }

        // Send request
        let res = req_builder.send().await.map_err(|source| ApiError::Network {
            context: context.clone(),
            source,
        })?;

        // Parse response
        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let raw_body: serde_json::Value = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| serde_json::json!({}))
        };

        // Convert the body to its caller (camelCase) form
        let body = keys_to_camel(&raw_body);

        match classify_status(code) {
            StatusOutcome::Success => Ok(HttpResponse::new(code, res_headers, body)),
            StatusOutcome::Pending => {
                tracing::warn!(
                    "Request to {} returned status {}: operation accepted but still pending",
                    request.path,
                    code
                );
                Err(ApiError::Pending {
                    code,
                    context,
                    data: ErrorPayload::from_body(&body),
                })
            }
            StatusOutcome::Unauthorized => Err(ApiError::Unauthorized {
                context,
                data: ErrorPayload::from_body(&body),
            }),
            StatusOutcome::Forbidden => Err(ApiError::Forbidden {
                context,
                data: ErrorPayload::from_body(&body),
            }),
            StatusOutcome::Failure => Err(ApiError::Status {
                code,
                context,
                data: ErrorPayload::from_body(&body),
            }),
        }
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request failure; see [`ApiClient::request`].
    pub async fn get(&self, path: &str) -> Result<HttpResponse, ApiError> {
        self.request(HttpRequest::builder(HttpMethod::Get, path).build()?)
            .await
    }

    /// Sends a POST request to the specified path with an optional body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request failure; see [`ApiClient::request`].
    pub async fn post(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, ApiError> {
        let mut builder = HttpRequest::builder(HttpMethod::Post, path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        self.request(builder.build()?).await
    }

    /// Sends a PATCH request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request failure; see [`ApiClient::request`].
    pub async fn patch(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, ApiError> {
        self.request(HttpRequest::builder(HttpMethod::Patch, path).body(body).build()?)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request failure; see [`ApiClient::request`].
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, ApiError> {
        self.request(HttpRequest::builder(HttpMethod::Delete, path).build()?)
            .await
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BotToken, HostUrl};

    fn create_test_config() -> GuildHubConfig {
        GuildHubConfig::builder()
            .bot_token(BotToken::new("test-bot-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_uses_default_host() {
        let client = ApiClient::new(&create_test_config());
        assert_eq!(client.base_uri(), "https://api.guildhub.com");
    }

    #[test]
    fn test_client_construction_applies_sandbox_rewrite() {
        let config = GuildHubConfig::builder()
            .bot_token(BotToken::new("test-bot-token").unwrap())
            .host(HostUrl::new("https://api.example.com").unwrap())
            .sandbox(true)
            .build()
            .unwrap();

        let client = ApiClient::new(&config);
        assert_eq!(client.base_uri(), "https://sandbox.api.example.com");
    }

    #[test]
    fn test_authorization_header_is_bearer_token() {
        let client = ApiClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-bot-token".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = ApiClient::new(&create_test_config());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("GuildHub API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = GuildHubConfig::builder()
            .bot_token(BotToken::new("test-bot-token").unwrap())
            .user_agent_prefix("MyBot/1.0")
            .build()
            .unwrap();

        let client = ApiClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyBot/1.0 | "));
        assert!(user_agent.contains("GuildHub API Library"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = ApiClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiClient>();
    }
}
