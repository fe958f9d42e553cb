//! [`ExplorerClient`]: configuration plus the shared request path every
//! endpoint method goes through.
//!
//! Endpoint methods live in per-resource submodules. All of them follow the
//! same three steps: build the [`Endpoint`], send one request, decode the
//! body according to the endpoint's [`ResponseShape`].

mod addresses;
mod assets;
mod blocks;
mod mempool;
mod transactions;

use reqwest::header;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::endpoint::{Endpoint, ResponseShape};
use crate::error::ExplorerError;
use crate::network::Network;

const USER_AGENT: &str = concat!("explorer-client/", env!("CARGO_PKG_VERSION"));

// ==============================================================================
// ExplorerClient
// ==============================================================================

/// Async client for the explorer REST API.
///
/// Cloning is cheap and clones share the underlying connection pool. Calls
/// are independent of each other; the client holds no per-call state.
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ExplorerClient {
    /// Build a client with its own `reqwest::Client`. No timeout is set;
    /// callers needing one should use [`Self::with_http_client`].
    pub fn new(config: ClientConfig) -> Result<Self, ExplorerError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| ExplorerError::ClientInit(e.to_string()))?;
        Ok(Self::with_http_client(config, http))
    }

    /// Shortcut for the public service of `network`.
    pub fn for_network(network: Network) -> Result<Self, ExplorerError> {
        Self::new(ClientConfig::new(network))
    }

    /// Use a caller-built HTTP client (timeouts, proxies, default headers).
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        debug!(
            network = %config.network,
            base_url = config.base_url(),
            "explorer client configured"
        );
        Self { http, config }
    }

    pub fn network(&self) -> Network {
        self.config.network
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL an endpoint resolves to under this client's base URL.
    pub fn endpoint_url(&self, endpoint: &Endpoint) -> String {
        endpoint.url(self.base_url())
    }

    // ==========================================================================
    // Transport
    // ==========================================================================

    async fn send(
        &self,
        endpoint: &Endpoint,
        text_body: Option<&str>,
    ) -> Result<reqwest::Response, ExplorerError> {
        let url = self.endpoint_url(endpoint);
        let method = endpoint.method();
        debug!(
            http.method = %method,
            http.url = %url,
            shape = ?endpoint.shape(),
            "explorer request"
        );

        let mut builder = self.http.request(method, &url);
        if let Some(body) = text_body {
            builder = builder
                .header(header::CONTENT_TYPE, "text/plain")
                .body(body.to_owned());
        }

        // Status is not inspected; error bodies go through the same decoding.
        let response = builder.send().await?;
        debug!(http.url = %url, status = %response.status(), "explorer response");
        Ok(response)
    }

    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
    ) -> Result<T, ExplorerError> {
        debug_assert_eq!(endpoint.shape(), ResponseShape::Json);
        let body = self.send(&endpoint, None).await?.bytes().await?;
        trace!(
            path = %endpoint.path(),
            body_len = body.len(),
            body = %String::from_utf8_lossy(&body),
            "explorer json body"
        );
        serde_json::from_slice(&body).map_err(|source| ExplorerError::Decode {
            path: endpoint.path(),
            source,
        })
    }

    pub(crate) async fn fetch_text(&self, endpoint: Endpoint) -> Result<String, ExplorerError> {
        debug_assert_eq!(endpoint.shape(), ResponseShape::Text);
        let body = self.send(&endpoint, None).await?.text().await?;
        trace!(path = %endpoint.path(), body_len = body.len(), body = %body, "explorer text body");
        Ok(body)
    }

    pub(crate) async fn fetch_bytes(&self, endpoint: Endpoint) -> Result<Vec<u8>, ExplorerError> {
        debug_assert_eq!(endpoint.shape(), ResponseShape::Binary);
        let body = self.send(&endpoint, None).await?.bytes().await?;
        trace!(path = %endpoint.path(), body_len = body.len(), "explorer binary body");
        Ok(body.to_vec())
    }

    pub(crate) async fn post_text(
        &self,
        endpoint: Endpoint,
        body: &str,
    ) -> Result<String, ExplorerError> {
        let response = self.send(&endpoint, Some(body)).await?.text().await?;
        trace!(path = %endpoint.path(), body = %response, "explorer post response");
        Ok(response)
    }
}
