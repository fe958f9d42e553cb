//! Typed async client for an Esplora-style block explorer REST API.
//!
//! One [`ExplorerClient`] method exists per endpoint of the service. Each
//! method resolves its path against the configured base URL, issues a single
//! HTTP request, and decodes the body as JSON, text, or raw bytes.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod network;
pub mod types;

pub use client::ExplorerClient;
pub use config::ClientConfig;
pub use endpoint::{Endpoint, ResponseShape};
pub use error::ExplorerError;
pub use network::Network;
