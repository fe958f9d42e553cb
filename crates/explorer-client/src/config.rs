//! Client configuration: the selected network plus an optional base URL
//! override.

use serde::Deserialize;

use crate::network::Network;

pub const NETWORK_ENV: &str = "EXPLORER_NETWORK";
pub const API_URL_ENV: &str = "EXPLORER_API_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub network: Network,
    /// Replaces the network's base URL entirely when set and non-empty.
    pub api_url: Option<String>,
}

impl ClientConfig {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            api_url: None,
        }
    }

    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Load from `EXPLORER_NETWORK` and `EXPLORER_API_URL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. An unknown or missing
    /// network name selects mainnet.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let network = lookup(NETWORK_ENV)
            .map(|name| Network::from_selector(name.trim()))
            .unwrap_or_default();
        let api_url = lookup(API_URL_ENV).filter(|url| !url.trim().is_empty());
        Self { network, api_url }
    }

    /// The URL every endpoint path is resolved against.
    pub fn base_url(&self) -> &str {
        match self.api_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => self.network.base_url(),
        }
    }
}
