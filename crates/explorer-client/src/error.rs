#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("decode JSON response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("HTTP client initialisation failed: {0}")]
    ClientInit(String),

    #[error("unknown network: {0}")]
    UnknownNetwork(String),
}
