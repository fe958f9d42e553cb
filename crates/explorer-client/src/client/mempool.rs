use super::ExplorerClient;
use crate::endpoint::Endpoint;
use crate::error::ExplorerError;
use crate::types::{FeeEstimates, MempoolBacklog, MempoolRecentTx};

impl ExplorerClient {
    pub async fn get_mempool_stats(&self) -> Result<MempoolBacklog, ExplorerError> {
        self.fetch_json(Endpoint::Mempool).await
    }

    pub async fn get_mempool_txids(&self) -> Result<Vec<String>, ExplorerError> {
        self.fetch_json(Endpoint::MempoolTxids).await
    }

    /// The last ten transactions to enter the mempool.
    pub async fn get_mempool_recent(&self) -> Result<Vec<MempoolRecentTx>, ExplorerError> {
        self.fetch_json(Endpoint::MempoolRecent).await
    }

    pub async fn get_fee_estimates(&self) -> Result<FeeEstimates, ExplorerError> {
        self.fetch_json(Endpoint::FeeEstimates).await
    }
}
