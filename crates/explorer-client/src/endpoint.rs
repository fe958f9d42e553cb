//! The endpoint table: every path template the explorer API exposes, with
//! the HTTP method and the body shape the client decodes.
//!
//! Identifiers are substituted verbatim. No escaping or validation happens
//! here; callers pass well-formed txids, hashes, addresses and asset ids.

use reqwest::Method;

/// How a response body is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    Json,
    Text,
    Binary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    // ==========================================================================
    // Transactions
    // ==========================================================================
    Transaction { txid: String },
    TransactionStatus { txid: String },
    TransactionHex { txid: String },
    TransactionRaw { txid: String },
    TransactionMerkleProof { txid: String },
    TransactionOutspend { txid: String, vout: u32 },
    TransactionOutspends { txid: String },
    BroadcastTransaction,

    // ==========================================================================
    // Addresses
    // ==========================================================================
    Address { address: String },
    AddressTransactions { address: String },
    AddressMempoolTransactions { address: String },
    AddressUtxos { address: String },
    AddressPrefix { prefix: String },

    // ==========================================================================
    // Blocks
    // ==========================================================================
    Block { hash: String },
    BlockHeader { hash: String },
    BlockStatus { hash: String },
    BlockTransactions { hash: String, start_index: Option<u32> },
    BlockTxids { hash: String },
    BlockTxidAtIndex { hash: String, index: u32 },
    BlockRaw { hash: String },
    BlockHashAtHeight { height: u32 },
    Blocks { start_height: Option<u32> },
    BlockTipHeight,
    BlockTipHash,

    // ==========================================================================
    // Mempool and fees
    // ==========================================================================
    Mempool,
    MempoolTxids,
    MempoolRecent,
    FeeEstimates,

    // ==========================================================================
    // Assets (Liquid)
    // ==========================================================================
    Asset { asset_id: String },
    AssetTransactions { asset_id: String },
    AssetSupply { asset_id: String },
    AssetSupplyDecimal { asset_id: String },
    AssetRegistry,
}

impl Endpoint {
    /// Path relative to the base URL, without a leading slash.
    pub fn path(&self) -> String {
        match self {
            Self::Transaction { txid } => format!("tx/{txid}"),
            Self::TransactionStatus { txid } => format!("tx/{txid}/status"),
            Self::TransactionHex { txid } => format!("tx/{txid}/hex"),
            Self::TransactionRaw { txid } => format!("tx/{txid}/raw"),
            Self::TransactionMerkleProof { txid } => format!("tx/{txid}/merkle-proof"),
            Self::TransactionOutspend { txid, vout } => format!("tx/{txid}/outspend/{vout}"),
            Self::TransactionOutspends { txid } => format!("tx/{txid}/outspends"),
            Self::BroadcastTransaction => "tx".to_owned(),

            Self::Address { address } => format!("address/{address}"),
            Self::AddressTransactions { address } => format!("address/{address}/txs"),
            Self::AddressMempoolTransactions { address } => {
                format!("address/{address}/txs/mempool")
            }
            Self::AddressUtxos { address } => format!("address/{address}/utxo"),
            Self::AddressPrefix { prefix } => format!("address-prefix/{prefix}"),

            Self::Block { hash } => format!("block/{hash}"),
            Self::BlockHeader { hash } => format!("block/{hash}/header"),
            Self::BlockStatus { hash } => format!("block/{hash}/status"),
            Self::BlockTransactions { hash, start_index } => match start_index {
                Some(start) => format!("block/{hash}/txs/{start}"),
                None => format!("block/{hash}/txs"),
            },
            Self::BlockTxids { hash } => format!("block/{hash}/txids"),
            Self::BlockTxidAtIndex { hash, index } => format!("block/{hash}/txid/{index}"),
            Self::BlockRaw { hash } => format!("block/{hash}/raw"),
            Self::BlockHashAtHeight { height } => format!("block-height/{height}"),
            Self::Blocks { start_height } => match start_height {
                Some(start) => format!("blocks/{start}"),
                None => "blocks".to_owned(),
            },
            Self::BlockTipHeight => "blocks/tip/height".to_owned(),
            Self::BlockTipHash => "blocks/tip/hash".to_owned(),

            Self::Mempool => "mempool".to_owned(),
            Self::MempoolTxids => "mempool/txids".to_owned(),
            Self::MempoolRecent => "mempool/recent".to_owned(),
            Self::FeeEstimates => "fee-estimates".to_owned(),

            Self::Asset { asset_id } => format!("asset/{asset_id}"),
            Self::AssetTransactions { asset_id } => format!("asset/{asset_id}/txs"),
            Self::AssetSupply { asset_id } => format!("asset/{asset_id}/supply"),
            Self::AssetSupplyDecimal { asset_id } => format!("asset/{asset_id}/supply/decimal"),
            Self::AssetRegistry => "assets/registry".to_owned(),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Self::BroadcastTransaction => Method::POST,
            _ => Method::GET,
        }
    }

    pub fn shape(&self) -> ResponseShape {
        match self {
            Self::TransactionHex { .. }
            | Self::BroadcastTransaction
            | Self::BlockHeader { .. }
            | Self::BlockTxidAtIndex { .. }
            | Self::BlockHashAtHeight { .. }
            | Self::BlockTipHash => ResponseShape::Text,
            Self::TransactionRaw { .. } | Self::BlockRaw { .. } => ResponseShape::Binary,
            _ => ResponseShape::Json,
        }
    }

    /// Join this endpoint's path onto `base_url` with exactly one slash
    /// between them.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TXID: &str = "a9c07a4a509607a9f8f5ff8eb597c29b322e59b03152deae01704552cdde7997";
    const HASH: &str = "0000000000000240128b208e5a99b5733dfb1e6126db48175afba5a3b7b9c7bb";
    const ADDR: &str = "tb1pttjr9292tea2nr28ca9zswgdhz0dasnz6n3v58mtg9cyf9wqr49sv8zjep";
    const ASSET: &str = "6f0279e9ed041c3d710a9f57d0c02928416460c4b722ae3457a11eec381c526d";

    #[test]
    fn transaction_paths() {
        let t = TXID.to_owned();
        let cases = [
            (Endpoint::Transaction { txid: t.clone() }, format!("tx/{TXID}")),
            (
                Endpoint::TransactionStatus { txid: t.clone() },
                format!("tx/{TXID}/status"),
            ),
            (
                Endpoint::TransactionHex { txid: t.clone() },
                format!("tx/{TXID}/hex"),
            ),
            (
                Endpoint::TransactionRaw { txid: t.clone() },
                format!("tx/{TXID}/raw"),
            ),
            (
                Endpoint::TransactionMerkleProof { txid: t.clone() },
                format!("tx/{TXID}/merkle-proof"),
            ),
            (
                Endpoint::TransactionOutspend {
                    txid: t.clone(),
                    vout: 3,
                },
                format!("tx/{TXID}/outspend/3"),
            ),
            (
                Endpoint::TransactionOutspends { txid: t },
                format!("tx/{TXID}/outspends"),
            ),
            (Endpoint::BroadcastTransaction, "tx".to_owned()),
        ];
        for (endpoint, expected) in cases {
            assert_eq!(endpoint.path(), expected, "{endpoint:?}");
        }
    }

    #[test]
    fn address_paths() {
        let a = ADDR.to_owned();
        assert_eq!(
            Endpoint::Address { address: a.clone() }.path(),
            format!("address/{ADDR}")
        );
        assert_eq!(
            Endpoint::AddressTransactions { address: a.clone() }.path(),
            format!("address/{ADDR}/txs")
        );
        assert_eq!(
            Endpoint::AddressMempoolTransactions { address: a.clone() }.path(),
            format!("address/{ADDR}/txs/mempool")
        );
        assert_eq!(
            Endpoint::AddressUtxos { address: a }.path(),
            format!("address/{ADDR}/utxo")
        );
        assert_eq!(
            Endpoint::AddressPrefix {
                prefix: "tb1ptt".into()
            }
            .path(),
            "address-prefix/tb1ptt"
        );
    }

    #[test]
    fn block_paths() {
        let h = HASH.to_owned();
        assert_eq!(Endpoint::Block { hash: h.clone() }.path(), format!("block/{HASH}"));
        assert_eq!(
            Endpoint::BlockHeader { hash: h.clone() }.path(),
            format!("block/{HASH}/header")
        );
        assert_eq!(
            Endpoint::BlockStatus { hash: h.clone() }.path(),
            format!("block/{HASH}/status")
        );
        assert_eq!(
            Endpoint::BlockTxids { hash: h.clone() }.path(),
            format!("block/{HASH}/txids")
        );
        assert_eq!(
            Endpoint::BlockTxidAtIndex {
                hash: h.clone(),
                index: 7
            }
            .path(),
            format!("block/{HASH}/txid/7")
        );
        assert_eq!(
            Endpoint::BlockRaw { hash: h }.path(),
            format!("block/{HASH}/raw")
        );
        assert_eq!(
            Endpoint::BlockHashAtHeight { height: 123 }.path(),
            "block-height/123"
        );
        assert_eq!(Endpoint::BlockTipHeight.path(), "blocks/tip/height");
        assert_eq!(Endpoint::BlockTipHash.path(), "blocks/tip/hash");
    }

    #[test]
    fn block_transactions_start_index_is_optional() {
        let without = Endpoint::BlockTransactions {
            hash: HASH.into(),
            start_index: None,
        };
        assert_eq!(without.path(), format!("block/{HASH}/txs"));

        let with = Endpoint::BlockTransactions {
            hash: HASH.into(),
            start_index: Some(5),
        };
        assert_eq!(with.path(), format!("block/{HASH}/txs/5"));

        let zero = Endpoint::BlockTransactions {
            hash: HASH.into(),
            start_index: Some(0),
        };
        assert_eq!(zero.path(), format!("block/{HASH}/txs/0"));
    }

    #[test]
    fn blocks_start_height_is_optional() {
        assert_eq!(Endpoint::Blocks { start_height: None }.path(), "blocks");
        assert_eq!(
            Endpoint::Blocks {
                start_height: Some(100)
            }
            .path(),
            "blocks/100"
        );
    }

    #[test]
    fn mempool_fee_and_asset_paths() {
        assert_eq!(Endpoint::Mempool.path(), "mempool");
        assert_eq!(Endpoint::MempoolTxids.path(), "mempool/txids");
        assert_eq!(Endpoint::MempoolRecent.path(), "mempool/recent");
        assert_eq!(Endpoint::FeeEstimates.path(), "fee-estimates");

        let id = ASSET.to_owned();
        assert_eq!(
            Endpoint::Asset { asset_id: id.clone() }.path(),
            format!("asset/{ASSET}")
        );
        assert_eq!(
            Endpoint::AssetTransactions { asset_id: id.clone() }.path(),
            format!("asset/{ASSET}/txs")
        );
        assert_eq!(
            Endpoint::AssetSupply { asset_id: id.clone() }.path(),
            format!("asset/{ASSET}/supply")
        );
        assert_eq!(
            Endpoint::AssetSupplyDecimal { asset_id: id }.path(),
            format!("asset/{ASSET}/supply/decimal")
        );
        assert_eq!(Endpoint::AssetRegistry.path(), "assets/registry");
    }

    #[test]
    fn identifiers_are_substituted_verbatim() {
        let odd = "not a txid/../?x=1";
        assert_eq!(
            Endpoint::Transaction { txid: odd.into() }.path(),
            "tx/not a txid/../?x=1"
        );
    }

    #[test]
    fn only_broadcast_posts() {
        assert_eq!(Endpoint::BroadcastTransaction.method(), Method::POST);
        assert_eq!(Endpoint::Transaction { txid: TXID.into() }.method(), Method::GET);
        assert_eq!(Endpoint::Mempool.method(), Method::GET);
        assert_eq!(Endpoint::BlockTipHash.method(), Method::GET);
    }

    #[test]
    fn shapes_match_declared_return_types() {
        let h = HASH.to_owned();
        assert_eq!(
            Endpoint::TransactionHex { txid: TXID.into() }.shape(),
            ResponseShape::Text
        );
        assert_eq!(
            Endpoint::BlockHeader { hash: h.clone() }.shape(),
            ResponseShape::Text
        );
        assert_eq!(
            Endpoint::BlockTxidAtIndex {
                hash: h.clone(),
                index: 0
            }
            .shape(),
            ResponseShape::Text
        );
        assert_eq!(
            Endpoint::BlockHashAtHeight { height: 1 }.shape(),
            ResponseShape::Text
        );
        assert_eq!(Endpoint::BlockTipHash.shape(), ResponseShape::Text);
        assert_eq!(Endpoint::BroadcastTransaction.shape(), ResponseShape::Text);

        assert_eq!(
            Endpoint::TransactionRaw { txid: TXID.into() }.shape(),
            ResponseShape::Binary
        );
        assert_eq!(
            Endpoint::BlockRaw { hash: h.clone() }.shape(),
            ResponseShape::Binary
        );

        assert_eq!(Endpoint::Block { hash: h }.shape(), ResponseShape::Json);
        assert_eq!(Endpoint::BlockTipHeight.shape(), ResponseShape::Json);
        assert_eq!(
            Endpoint::AssetSupplyDecimal {
                asset_id: ASSET.into()
            }
            .shape(),
            ResponseShape::Json
        );
    }

    #[test]
    fn url_joins_with_a_single_slash() {
        let endpoint = Endpoint::Transaction { txid: TXID.into() };
        assert_eq!(
            endpoint.url("https://blockstream.info/api/"),
            format!("https://blockstream.info/api/tx/{TXID}")
        );
        assert_eq!(
            endpoint.url("http://127.0.0.1:3000"),
            format!("http://127.0.0.1:3000/tx/{TXID}")
        );
        assert_eq!(
            Endpoint::Mempool.url("http://localhost/esplora//"),
            "http://localhost/esplora/mempool"
        );
    }
}
