use std::fmt::Display;

use super::ExplorerClient;
use crate::endpoint::Endpoint;
use crate::error::ExplorerError;
use crate::types::{Address, Transaction, Utxo};

impl ExplorerClient {
    /// Chain and mempool statistics for an address or script hash.
    pub async fn get_address_info(&self, address: impl Display) -> Result<Address, ExplorerError> {
        self.fetch_json(Endpoint::Address {
            address: address.to_string(),
        })
        .await
    }

    pub async fn get_address_transactions(
        &self,
        address: impl Display,
    ) -> Result<Vec<Transaction>, ExplorerError> {
        self.fetch_json(Endpoint::AddressTransactions {
            address: address.to_string(),
        })
        .await
    }

    pub async fn get_address_mempool_transactions(
        &self,
        address: impl Display,
    ) -> Result<Vec<Transaction>, ExplorerError> {
        self.fetch_json(Endpoint::AddressMempoolTransactions {
            address: address.to_string(),
        })
        .await
    }

    pub async fn get_address_utxos(&self, address: impl Display) -> Result<Vec<Utxo>, ExplorerError> {
        self.fetch_json(Endpoint::AddressUtxos {
            address: address.to_string(),
        })
        .await
    }

    /// Addresses starting with `prefix`.
    pub async fn search_addresses(&self, prefix: impl Display) -> Result<Vec<String>, ExplorerError> {
        self.fetch_json(Endpoint::AddressPrefix {
            prefix: prefix.to_string(),
        })
        .await
    }
}
