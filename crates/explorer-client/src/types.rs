//! Response records returned by the explorer API.
//!
//! Field names follow the service's JSON keys exactly. Fields that only
//! Liquid (or only Bitcoin) returns are `Option`s so both chains decode into
//! the same records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ==============================================================================
// Transactions
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub txid: String,
    pub version: i32,
    pub locktime: u32,
    pub size: u32,
    pub weight: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sigops: Option<u32>,
    pub fee: u64,
    pub vin: Vec<Vin>,
    pub vout: Vec<Vout>,
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vin {
    pub txid: String,
    pub vout: u32,
    pub is_coinbase: bool,
    pub scriptsig: String,
    pub scriptsig_asm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_redeemscript_asm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_witnessscript_asm: Option<String>,
    pub sequence: u32,
    /// Absent for non-segwit spends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub witness: Option<Vec<String>>,
    /// The output being spent; `null` for coinbase inputs.
    pub prevout: Option<Vout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pegin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuance: Option<Issuance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vout {
    pub scriptpubkey: String,
    pub scriptpubkey_asm: String,
    pub scriptpubkey_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scriptpubkey_address: Option<String>,
    /// Missing when the amount is blinded (see `valuecommitment`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valuecommitment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assetcommitment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pegout: Option<Pegout>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuance {
    pub asset_id: String,
    pub is_reissuance: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_blinding_nonce: Option<String>,
    pub asset_entropy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assetamount: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assetamountcommitment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokenamount: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokenamountcommitment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pegout {
    pub genesis_hash: String,
    pub scriptpubkey: String,
    pub scriptpubkey_asm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scriptpubkey_address: Option<String>,
}

/// Confirmation status. Block fields are `None` while unconfirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionStatus {
    pub confirmed: bool,
    pub block_height: Option<u32>,
    pub block_hash: Option<String>,
    pub block_time: Option<u64>,
}

/// Spend status of a single transaction output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpending {
    pub spent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vin: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    pub block_height: u32,
    pub merkle: Vec<String>,
    pub pos: u32,
}

// ==============================================================================
// Addresses
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address: String,
    pub chain_stats: AddressStats,
    pub mempool_stats: AddressStats,
}

/// Shared shape of `chain_stats` and `mempool_stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressStats {
    pub tx_count: u64,
    pub funded_txo_count: u64,
    pub funded_txo_sum: u64,
    pub spent_txo_count: u64,
    pub spent_txo_sum: u64,
}

impl AddressStats {
    /// Funded minus spent. Saturates instead of going negative.
    pub fn balance(&self) -> u64 {
        self.funded_txo_sum.saturating_sub(self.spent_txo_sum)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utxo {
    pub txid: String,
    pub vout: u32,
    pub status: TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valuecommitment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assetcommitment: Option<String>,
}

// ==============================================================================
// Blocks
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub height: u32,
    pub version: u32,
    pub timestamp: u64,
    pub mediantime: u64,
    // Proof-of-work fields are absent on Liquid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bits: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<f64>,
    pub merkle_root: String,
    pub tx_count: u32,
    pub size: u32,
    pub weight: u32,
    /// `None` only for the genesis block.
    pub previousblockhash: Option<String>,
    /// Liquid dynamic federation parameters, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStatus {
    pub in_best_chain: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub next_best: Option<String>,
}

// ==============================================================================
// Mempool and fees
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MempoolBacklog {
    pub count: u64,
    pub vsize: u64,
    pub total_fee: u64,
    pub fee_histogram: Vec<FeeHistogramBucket>,
}

/// One histogram bucket: `vsize` vbytes of transactions paying at least
/// `feerate` sat/vB (and less than the previous bucket's rate).
///
/// The live service encodes buckets as `[feerate, vsize]` pairs; an object
/// form `{"feerate", "vsize"}` is accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "BucketRepr", into = "(f64, u64)")]
pub struct FeeHistogramBucket {
    pub feerate: f64,
    pub vsize: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BucketRepr {
    Pair(f64, u64),
    Object { feerate: f64, vsize: u64 },
}

impl From<BucketRepr> for FeeHistogramBucket {
    fn from(repr: BucketRepr) -> Self {
        match repr {
            BucketRepr::Pair(feerate, vsize) | BucketRepr::Object { feerate, vsize } => {
                Self { feerate, vsize }
            }
        }
    }
}

impl From<FeeHistogramBucket> for (f64, u64) {
    fn from(bucket: FeeHistogramBucket) -> Self {
        (bucket.feerate, bucket.vsize)
    }
}

/// Entry of `mempool/recent`: a summary, not a full transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MempoolRecentTx {
    pub txid: String,
    pub fee: u64,
    pub vsize: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
}

/// Fee rate (sat/vB) keyed by confirmation target in blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeEstimates(pub BTreeMap<u16, f64>);

impl FeeEstimates {
    /// Estimate for exactly `target` blocks.
    pub fn get(&self, target: u16) -> Option<f64> {
        self.0.get(&target).copied()
    }

    /// Estimate of the largest published target that does not exceed
    /// `target`. `None` if every published target is larger.
    pub fn fee_rate_for(&self, target: u16) -> Option<f64> {
        self.0.range(..=target).next_back().map(|(_, rate)| *rate)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, f64)> + '_ {
        self.0.iter().map(|(target, rate)| (*target, *rate))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ==============================================================================
// Assets (Liquid)
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub asset_id: String,
    #[serde(default)]
    pub chain_stats: AssetStats,
    #[serde(default)]
    pub mempool_stats: AssetStats,
    // Issued assets only; the native asset has none of these.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuance_txin: Option<IssuanceTxin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuance_prevout: Option<IssuancePrevout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reissuance_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    // Registry metadata, present once the issuer registered the asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<AssetEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_pubkey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<serde_json::Value>,
}

impl Asset {
    /// The policy asset (L-BTC) reports peg counters instead of issuances.
    pub fn is_native(&self) -> bool {
        self.issuance_txin.is_none() && self.chain_stats.peg_in_count.is_some()
    }
}

/// Asset activity counters. Issued assets and the native asset report
/// different subsets, so every field is defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetStats {
    pub tx_count: u64,
    pub issuance_count: u64,
    pub issued_amount: u64,
    pub burned_amount: u64,
    pub has_blinded_issuances: bool,
    pub reissuance_tokens: Option<u64>,
    pub burned_reissuance_tokens: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peg_in_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peg_in_amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peg_out_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peg_out_amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burn_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceTxin {
    pub txid: String,
    pub vin: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuancePrevout {
    pub txid: String,
    pub vout: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntity {
    pub domain: String,
}
