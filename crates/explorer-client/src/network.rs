//! Network selection and the fixed base URL table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExplorerError;

pub const MAINNET_URL: &str = "https://blockstream.info/api/";
pub const TESTNET_URL: &str = "https://blockstream.info/testnet/api/";
pub const LIQUID_URL: &str = "https://blockstream.info/liquid/api/";
pub const LIQUID_TESTNET_URL: &str = "https://blockstream.info/liquidtestnet/api/";

/// The four networks served by the public explorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Liquid,
    LiquidTestnet,
}

impl Network {
    pub const ALL: [Network; 4] = [
        Network::Mainnet,
        Network::Testnet,
        Network::Liquid,
        Network::LiquidTestnet,
    ];

    /// Base URL of the public explorer API for this network.
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Mainnet => MAINNET_URL,
            Self::Testnet => TESTNET_URL,
            Self::Liquid => LIQUID_URL,
            Self::LiquidTestnet => LIQUID_TESTNET_URL,
        }
    }

    /// Lenient parse: anything unrecognised selects mainnet.
    pub fn from_selector(selector: &str) -> Self {
        selector.parse().unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Liquid => "liquid",
            Self::LiquidTestnet => "liquidtestnet",
        }
    }

    /// Whether the network is a Liquid sidechain (confidential values,
    /// issued assets, pegouts).
    pub fn is_liquid(self) -> bool {
        matches!(self, Self::Liquid | Self::LiquidTestnet)
    }
}

impl FromStr for Network {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            "liquid" => Ok(Self::Liquid),
            "liquidtestnet" => Ok(Self::LiquidTestnet),
            other => Err(ExplorerError::UnknownNetwork(other.to_owned())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
