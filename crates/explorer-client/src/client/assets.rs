//! Liquid issued-asset endpoints. Bitcoin deployments do not serve these.

use std::fmt::Display;

use super::ExplorerClient;
use crate::endpoint::Endpoint;
use crate::error::ExplorerError;
use crate::types::{Asset, Transaction};

impl ExplorerClient {
    pub async fn get_asset(&self, asset_id: impl Display) -> Result<Asset, ExplorerError> {
        self.fetch_json(Endpoint::Asset {
            asset_id: asset_id.to_string(),
        })
        .await
    }

    pub async fn get_asset_transactions(
        &self,
        asset_id: impl Display,
    ) -> Result<Vec<Transaction>, ExplorerError> {
        self.fetch_json(Endpoint::AssetTransactions {
            asset_id: asset_id.to_string(),
        })
        .await
    }

    /// Circulating supply in base units.
    pub async fn get_asset_supply(&self, asset_id: impl Display) -> Result<u64, ExplorerError> {
        self.fetch_json(Endpoint::AssetSupply {
            asset_id: asset_id.to_string(),
        })
        .await
    }

    /// Circulating supply scaled by the asset's registered precision.
    pub async fn get_asset_supply_decimal(
        &self,
        asset_id: impl Display,
    ) -> Result<f64, ExplorerError> {
        self.fetch_json(Endpoint::AssetSupplyDecimal {
            asset_id: asset_id.to_string(),
        })
        .await
    }

    pub async fn get_assets_registry(&self) -> Result<Vec<Asset>, ExplorerError> {
        self.fetch_json(Endpoint::AssetRegistry).await
    }
}
