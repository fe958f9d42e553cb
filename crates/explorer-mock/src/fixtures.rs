//! Response bodies shaped like the live explorer's, for tests.
//!
//! Identifiers are real testnet/Liquid values so the bodies read like
//! captured traffic; none of them are validated by anything here.

use serde_json::{json, Value};

pub const TXID: &str = "a9c07a4a509607a9f8f5ff8eb597c29b322e59b03152deae01704552cdde7997";
pub const COINBASE_TXID: &str = "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";
pub const BLOCK_HASH: &str = "0000000000000240128b208e5a99b5733dfb1e6126db48175afba5a3b7b9c7bb";
pub const PREV_BLOCK_HASH: &str =
    "00000000000000145ff5fd2ac45b0e7fad65fa6b9a9fcd1e9a3e1d8da3fc5a45";
pub const ADDRESS: &str = "tb1pttjr9292tea2nr28ca9zswgdhz0dasnz6n3v58mtg9cyf9wqr49sv8zjep";
pub const ASSET_ID: &str = "ce091c998b83c78bb71a632313ba3760f1763d9cfcffae02258ffa9865a37bd2";
pub const LBTC_ASSET_ID: &str = "6f0279e9ed041c3d710a9f57d0c02928416460c4b722ae3457a11eec381c526d";
pub const RAW_TX_HEX: &str = "0200000000010158e4b1d4f6a2f1e8c0a90e3d6f0f4b6e1c7a5e0b1d2c3f4a5b6c7d8e9f0a1b2c0000000000fdffffff0110270000000000002251205ae432a8aa5e7aa98d47c74a28390db89edec262d4e2ca1f6b41704495c01d4b0140aa";

pub fn confirmed_status() -> Value {
    json!({
        "confirmed": true,
        "block_height": 2_417_325,
        "block_hash": BLOCK_HASH,
        "block_time": 1_681_211_231
    })
}

pub fn unconfirmed_status() -> Value {
    json!({ "confirmed": false })
}

pub fn transaction() -> Value {
    json!({
        "txid": TXID,
        "version": 2,
        "locktime": 2_417_324,
        "vin": [{
            "txid": "2c1b0a9f8e7d6c5b4a3f2c1d0b5e7a1c6e4b0f6f3d0ea9c0e8f1a2f6d4b1e458",
            "vout": 0,
            "prevout": {
                "scriptpubkey": "00143a6ae2a46b5e0d9c05f5b3f0ea4b4e4f8b1a2c3d",
                "scriptpubkey_asm": "OP_0 OP_PUSHBYTES_20 3a6ae2a46b5e0d9c05f5b3f0ea4b4e4f8b1a2c3d",
                "scriptpubkey_type": "v0_p2wpkh",
                "scriptpubkey_address": "tb1q8f4w9frttcxecp04k0cw5j6wfu93gtpa4hk4ms",
                "value": 20_000
            },
            "scriptsig": "",
            "scriptsig_asm": "",
            "witness": [
                "3044022067b8f8d1c2a7e9b0a3f4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f8091a02201a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f80901",
                "02b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6"
            ],
            "is_coinbase": false,
            "sequence": 4_294_967_293u32
        }],
        "vout": [{
            "scriptpubkey": "51205ae432a8aa5e7aa98d47c74a28390db89edec262d4e2ca1f6b41704495c01d4b",
            "scriptpubkey_asm": "OP_PUSHNUM_1 OP_PUSHBYTES_32 5ae432a8aa5e7aa98d47c74a28390db89edec262d4e2ca1f6b41704495c01d4b",
            "scriptpubkey_type": "v1_p2tr",
            "scriptpubkey_address": ADDRESS,
            "value": 10_000
        }, {
            "scriptpubkey": "6a0b68656c6c6f20776f726c64",
            "scriptpubkey_asm": "OP_RETURN OP_PUSHBYTES_11 68656c6c6f20776f726c64",
            "scriptpubkey_type": "op_return",
            "value": 0
        }],
        "size": 205,
        "weight": 616,
        "sigops": 0,
        "fee": 10_000,
        "status": confirmed_status()
    })
}

pub fn coinbase_transaction() -> Value {
    json!({
        "txid": COINBASE_TXID,
        "version": 1,
        "locktime": 0,
        "vin": [{
            "txid": "0000000000000000000000000000000000000000000000000000000000000000",
            "vout": 4_294_967_295u32,
            "prevout": null,
            "scriptsig": "03ade224",
            "scriptsig_asm": "OP_PUSHBYTES_3 ade224",
            "is_coinbase": true,
            "sequence": 4_294_967_295u32
        }],
        "vout": [{
            "scriptpubkey": "76a914c825a1ecf2a6830c4401620c3a16f1995057c2ab88ac",
            "scriptpubkey_asm": "OP_DUP OP_HASH160 OP_PUSHBYTES_20 c825a1ecf2a6830c4401620c3a16f1995057c2ab OP_EQUALVERIFY OP_CHECKSIG",
            "scriptpubkey_type": "p2pkh",
            "scriptpubkey_address": "mytTnKEZhzDP7bAbz6gZTHqHyTbjxm4mq2",
            "value": 2_441_406
        }],
        "size": 110,
        "weight": 440,
        "fee": 0,
        "status": confirmed_status()
    })
}

/// A Liquid transaction with an issuance input, a confidential output, an
/// explicit fee output and a pegout.
pub fn liquid_transaction() -> Value {
    json!({
        "txid": "f1a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f80",
        "version": 2,
        "locktime": 0,
        "vin": [{
            "txid": "9f8e7d6c5b4a39281706f5e4d3c2b1a09f8e7d6c5b4a39281706f5e4d3c2b1a0",
            "vout": 1,
            "prevout": {
                "scriptpubkey": "0014d5b1ea1e2a0f7e0c7b3b4e8c2a6f3d1e0b9c8a7f",
                "scriptpubkey_asm": "OP_0 OP_PUSHBYTES_20 d5b1ea1e2a0f7e0c7b3b4e8c2a6f3d1e0b9c8a7f",
                "scriptpubkey_type": "v0_p2wpkh",
                "scriptpubkey_address": "ex1q6kc758s2palqc7em6wxz5menr6qtn3907usdkz",
                "valuecommitment": "0830e4a55b8b6a2c7b8e5f5d8f5d3f6e0a8c5b2e3d7f1a9b6c4d2e0f8a7b6c5d4e",
                "assetcommitment": "0b9c2e6a5d4f3e2d1c0b9a8f7e6d5c4b3a29180716f5e4d3c2b1a09f8e7d6c5b4a"
            },
            "scriptsig": "",
            "scriptsig_asm": "",
            "witness": ["3045", "02ab"],
            "is_coinbase": false,
            "sequence": 4_294_967_294u32,
            "is_pegin": false,
            "issuance": {
                "asset_id": ASSET_ID,
                "is_reissuance": false,
                "asset_entropy": "77a34c6e7f0b5d4c3b2a19080f1e2d3c4b5a69788796a5b4c3d2e1f00f1e2d3c",
                "contract_hash": "3c7f0a53c2ff5b99590620d7f6604a7a3a7bfbaaa6aa61f7bfc7833ca03cde82",
                "assetamount": 100_000_000_000u64,
                "tokenamount": 1
            }
        }],
        "vout": [{
            "scriptpubkey": "0014a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5",
            "scriptpubkey_asm": "OP_0 OP_PUSHBYTES_20 a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5",
            "scriptpubkey_type": "v0_p2wpkh",
            "scriptpubkey_address": "ex1q52eufdwx7qypj23ufdxhxlsgjx3t83x4q3k0zc",
            "valuecommitment": "09e5a2c4f6b8d0e2a4c6e8f0b2d4f6a8c0e2a4c6e8f0b2d4f6a8c0e2a4c6e8f0b2",
            "assetcommitment": "0a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90a"
        }, {
            "scriptpubkey": "6a2006226e46111a0b59caaf126043eb5bbf28c34f3a5e332a1fc7b2b73cf188910f",
            "scriptpubkey_asm": "OP_RETURN OP_PUSHBYTES_32 06226e46111a0b59caaf126043eb5bbf28c34f3a5e332a1fc7b2b73cf188910f",
            "scriptpubkey_type": "op_return",
            "value": 50_000,
            "asset": LBTC_ASSET_ID,
            "pegout": {
                "genesis_hash": "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f",
                "scriptpubkey": "0014c6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f809",
                "scriptpubkey_asm": "OP_0 OP_PUSHBYTES_20 c6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f809",
                "scriptpubkey_address": "bc1qcmnlszg69v7y6hn0wzqe9ga5chtw07qfgq2sxg"
            }
        }, {
            "scriptpubkey": "",
            "scriptpubkey_asm": "",
            "scriptpubkey_type": "fee",
            "value": 262,
            "asset": LBTC_ASSET_ID
        }],
        "size": 1_234,
        "weight": 2_818,
        "fee": 262,
        "status": unconfirmed_status()
    })
}

pub fn merkle_proof() -> Value {
    json!({
        "block_height": 2_417_325,
        "merkle": [
            "2e6e0b1f4b5c7d8a9e0f1a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f",
            "3f7f1c2a5c6d8e9b0f1a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f70"
        ],
        "pos": 5
    })
}

pub fn outspend_spent() -> Value {
    json!({
        "spent": true,
        "txid": COINBASE_TXID,
        "vin": 0,
        "status": confirmed_status()
    })
}

pub fn outspend_unspent() -> Value {
    json!({ "spent": false })
}

pub fn address() -> Value {
    json!({
        "address": ADDRESS,
        "chain_stats": {
            "funded_txo_count": 3,
            "funded_txo_sum": 40_000,
            "spent_txo_count": 1,
            "spent_txo_sum": 10_000,
            "tx_count": 4
        },
        "mempool_stats": {
            "funded_txo_count": 0,
            "funded_txo_sum": 0,
            "spent_txo_count": 0,
            "spent_txo_sum": 0,
            "tx_count": 0
        }
    })
}

pub fn utxo() -> Value {
    json!({
        "txid": TXID,
        "vout": 0,
        "status": confirmed_status(),
        "value": 10_000
    })
}

pub fn block() -> Value {
    json!({
        "id": BLOCK_HASH,
        "height": 2_417_325,
        "version": 536_870_912,
        "timestamp": 1_681_211_231,
        "tx_count": 12,
        "size": 4_321,
        "weight": 14_760,
        "merkle_root": "b9d8f3e1a0c5d7f2e4b6a8c0d2e4f6a8b0c2d4e6f8a0b2c4d6e8f0a2b4c6d8e0",
        "previousblockhash": PREV_BLOCK_HASH,
        "mediantime": 1_681_208_442,
        "nonce": 2_938_745_123u32,
        "bits": 486_604_799,
        "difficulty": 1.0
    })
}

/// Liquid blocks carry no proof-of-work fields, only the dynafed `ext` blob.
pub fn liquid_block() -> Value {
    json!({
        "id": "a3b1d9e6f2c8b4a7d5e3f1c9b7a5d3e1f9c7b5a3d1e9f7c5b3a1d9e7f5c3b1a9",
        "height": 2_345_678,
        "version": 570_425_344,
        "timestamp": 1_700_000_000,
        "tx_count": 2,
        "size": 9_876,
        "weight": 12_345,
        "merkle_root": "c4d2e0f8a6b4c2d0e8f6a4b2c0d8e6f4a2b0c8d6e4f2a0b8c6d4e2f0a8b6c4d2",
        "previousblockhash": "b2c0d8e6f4a2b0c8d6e4f2a0b8c6d4e2f0a8b6c4d2e0f8a6b4c2d0e8f6a4b2c0",
        "mediantime": 1_699_999_700,
        "ext": { "current": { "signblockscript": "5b21", "fedpeg_program": "0020" } }
    })
}

pub fn block_status() -> Value {
    json!({
        "in_best_chain": true,
        "height": 2_417_325,
        "next_best": "000000000000001e4f5a6b7c8d9e0f1a2b3c4d5e6f708192a3b4c5d6e7f80912"
    })
}

pub fn tip_block_status() -> Value {
    json!({ "in_best_chain": true, "height": 2_417_330, "next_best": null })
}

pub fn mempool() -> Value {
    json!({
        "count": 4_131,
        "vsize": 2_162_845,
        "total_fee": 5_217_481,
        "fee_histogram": [[53.2, 102_131], [20.01, 100_794], [12.1, 500_000], [1.0, 1_459_920]]
    })
}

pub fn mempool_recent() -> Value {
    json!([
        { "txid": TXID, "fee": 10_000, "vsize": 154, "value": 10_000 },
        { "txid": COINBASE_TXID, "fee": 2_310, "vsize": 141, "value": 1_250_000 }
    ])
}

pub fn fee_estimates() -> Value {
    json!({
        "1": 87.882, "2": 87.882, "3": 87.882, "4": 87.882, "5": 81.129,
        "6": 68.285, "10": 1.027, "20": 1.027, "144": 1.0, "504": 1.0, "1008": 1.0
    })
}

pub fn asset() -> Value {
    json!({
        "asset_id": ASSET_ID,
        "issuance_txin": {
            "txid": "f1a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f80",
            "vin": 0
        },
        "issuance_prevout": {
            "txid": "9f8e7d6c5b4a39281706f5e4d3c2b1a09f8e7d6c5b4a39281706f5e4d3c2b1a0",
            "vout": 1
        },
        "reissuance_token": "5b8a7c9e1d3f2b4a6c8e0d2f4b6a8c0e2d4f6b8a0c2e4d6f8b0a2c4e6d8f0b2a",
        "contract_hash": "3c7f0a53c2ff5b99590620d7f6604a7a3a7bfbaaa6aa61f7bfc7833ca03cde82",
        "status": confirmed_status(),
        "chain_stats": {
            "tx_count": 3,
            "issuance_count": 1,
            "issued_amount": 100_000_000_000u64,
            "burned_amount": 0,
            "has_blinded_issuances": false,
            "reissuance_tokens": 1,
            "burned_reissuance_tokens": 0
        },
        "mempool_stats": {
            "tx_count": 0,
            "issuance_count": 0,
            "issued_amount": 0,
            "burned_amount": 0,
            "has_blinded_issuances": false,
            "reissuance_tokens": null,
            "burned_reissuance_tokens": 0
        },
        "contract": { "entity": { "domain": "example.com" }, "name": "Example Coin", "precision": 8, "ticker": "EXC", "version": 0 },
        "entity": { "domain": "example.com" },
        "precision": 8,
        "name": "Example Coin",
        "ticker": "EXC",
        "issuer_pubkey": "02a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90"
    })
}

/// The native policy asset: no issuance, peg counters instead.
pub fn native_asset() -> Value {
    json!({
        "asset_id": LBTC_ASSET_ID,
        "chain_stats": {
            "tx_count": 1_000,
            "peg_in_count": 120,
            "peg_in_amount": 500_000_000u64,
            "peg_out_count": 30,
            "peg_out_amount": 100_000_000u64,
            "burn_count": 2,
            "burned_amount": 1_000
        },
        "mempool_stats": {
            "tx_count": 0,
            "peg_in_count": 0,
            "peg_in_amount": 0,
            "peg_out_count": 0,
            "peg_out_amount": 0,
            "burn_count": 0,
            "burned_amount": 0
        }
    })
}
