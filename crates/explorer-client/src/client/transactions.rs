use std::fmt::Display;

use super::ExplorerClient;
use crate::endpoint::Endpoint;
use crate::error::ExplorerError;
use crate::types::{MerkleProof, OutputSpending, Transaction, TransactionStatus};

impl ExplorerClient {
    pub async fn get_transaction(&self, txid: impl Display) -> Result<Transaction, ExplorerError> {
        self.fetch_json(Endpoint::Transaction {
            txid: txid.to_string(),
        })
        .await
    }

    pub async fn get_transaction_status(
        &self,
        txid: impl Display,
    ) -> Result<TransactionStatus, ExplorerError> {
        self.fetch_json(Endpoint::TransactionStatus {
            txid: txid.to_string(),
        })
        .await
    }

    /// Raw transaction, hex encoded.
    pub async fn get_transaction_hex(&self, txid: impl Display) -> Result<String, ExplorerError> {
        self.fetch_text(Endpoint::TransactionHex {
            txid: txid.to_string(),
        })
        .await
    }

    /// Raw transaction in consensus encoding, as served.
    pub async fn get_transaction_raw(&self, txid: impl Display) -> Result<Vec<u8>, ExplorerError> {
        self.fetch_bytes(Endpoint::TransactionRaw {
            txid: txid.to_string(),
        })
        .await
    }

    pub async fn get_transaction_merkle_proof(
        &self,
        txid: impl Display,
    ) -> Result<MerkleProof, ExplorerError> {
        self.fetch_json(Endpoint::TransactionMerkleProof {
            txid: txid.to_string(),
        })
        .await
    }

    pub async fn get_transaction_outspend(
        &self,
        txid: impl Display,
        vout: u32,
    ) -> Result<OutputSpending, ExplorerError> {
        self.fetch_json(Endpoint::TransactionOutspend {
            txid: txid.to_string(),
            vout,
        })
        .await
    }

    /// Spend status of every output, in output order.
    pub async fn get_transaction_outspends(
        &self,
        txid: impl Display,
    ) -> Result<Vec<OutputSpending>, ExplorerError> {
        self.fetch_json(Endpoint::TransactionOutspends {
            txid: txid.to_string(),
        })
        .await
    }

    /// Submit a hex-encoded transaction. The body is sent exactly as given
    /// with `Content-Type: text/plain`; the service replies with the txid
    /// (or an error message, returned as-is).
    pub async fn broadcast_transaction(&self, tx_hex: &str) -> Result<String, ExplorerError> {
        self.post_text(Endpoint::BroadcastTransaction, tx_hex).await
    }
}
