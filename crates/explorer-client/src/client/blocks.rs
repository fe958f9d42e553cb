use std::fmt::Display;

use super::ExplorerClient;
use crate::endpoint::Endpoint;
use crate::error::ExplorerError;
use crate::types::{Block, BlockStatus, Transaction};

impl ExplorerClient {
    pub async fn get_block(&self, hash: impl Display) -> Result<Block, ExplorerError> {
        self.fetch_json(Endpoint::Block {
            hash: hash.to_string(),
        })
        .await
    }

    /// Block header, hex encoded.
    pub async fn get_block_header(&self, hash: impl Display) -> Result<String, ExplorerError> {
        self.fetch_text(Endpoint::BlockHeader {
            hash: hash.to_string(),
        })
        .await
    }

    pub async fn get_block_status(&self, hash: impl Display) -> Result<BlockStatus, ExplorerError> {
        self.fetch_json(Endpoint::BlockStatus {
            hash: hash.to_string(),
        })
        .await
    }

    /// One page of the block's transactions. `None` starts at the first
    /// transaction; `Some(n)` is always sent as a path segment.
    pub async fn get_block_transactions(
        &self,
        hash: impl Display,
        start_index: Option<u32>,
    ) -> Result<Vec<Transaction>, ExplorerError> {
        self.fetch_json(Endpoint::BlockTransactions {
            hash: hash.to_string(),
            start_index,
        })
        .await
    }

    pub async fn get_block_txids(&self, hash: impl Display) -> Result<Vec<String>, ExplorerError> {
        self.fetch_json(Endpoint::BlockTxids {
            hash: hash.to_string(),
        })
        .await
    }

    pub async fn get_block_txid_at_index(
        &self,
        hash: impl Display,
        index: u32,
    ) -> Result<String, ExplorerError> {
        self.fetch_text(Endpoint::BlockTxidAtIndex {
            hash: hash.to_string(),
            index,
        })
        .await
    }

    pub async fn get_block_raw(&self, hash: impl Display) -> Result<Vec<u8>, ExplorerError> {
        self.fetch_bytes(Endpoint::BlockRaw {
            hash: hash.to_string(),
        })
        .await
    }

    /// Hash of the best-chain block at `height`.
    pub async fn get_block_hash_at_height(&self, height: u32) -> Result<String, ExplorerError> {
        self.fetch_text(Endpoint::BlockHashAtHeight { height }).await
    }

    /// The ten newest blocks, from the tip or from `start_height` down.
    pub async fn get_blocks(&self, start_height: Option<u32>) -> Result<Vec<Block>, ExplorerError> {
        self.fetch_json(Endpoint::Blocks { start_height }).await
    }

    pub async fn get_block_tip_height(&self) -> Result<u32, ExplorerError> {
        self.fetch_json(Endpoint::BlockTipHeight).await
    }

    pub async fn get_block_tip_hash(&self) -> Result<String, ExplorerError> {
        self.fetch_text(Endpoint::BlockTipHash).await
    }
}
