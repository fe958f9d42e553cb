//! Smoke tests against the public testnet explorer. Ignored by default;
//! run with `cargo test -p explorer-client --test live_api -- --ignored`.

use std::sync::Once;

use explorer_client::{ExplorerClient, Network};

static TRACING_INIT: Once = Once::new();

const TXID: &str = "a9c07a4a509607a9f8f5ff8eb597c29b322e59b03152deae01704552cdde7997";
const ADDRESS: &str = "tb1pttjr9292tea2nr28ca9zswgdhz0dasnz6n3v58mtg9cyf9wqr49sv8zjep";
const BLOCK_HASH: &str = "0000000000000240128b208e5a99b5733dfb1e6126db48175afba5a3b7b9c7bb";

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("explorer_client=debug")),
            )
            .with_target(true)
            .try_init();
    });
}

fn testnet() -> ExplorerClient {
    init_tracing();
    ExplorerClient::for_network(Network::Testnet).expect("client must build")
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires network access to blockstream.info"]
async fn live_transaction_endpoints() {
    let client = testnet();

    let tx = client.get_transaction(TXID).await.expect("tx lookup");
    assert_eq!(tx.txid, TXID);

    let status = client.get_transaction_status(TXID).await.expect("tx status");
    assert!(status.confirmed);

    let hex = client.get_transaction_hex(TXID).await.expect("tx hex");
    let raw = client.get_transaction_raw(TXID).await.expect("tx raw");
    assert_eq!(hex.len(), raw.len() * 2, "hex and raw must describe the same bytes");

    let outspends = client
        .get_transaction_outspends(TXID)
        .await
        .expect("outspends");
    assert_eq!(outspends.len(), tx.vout.len());
    let first = client
        .get_transaction_outspend(TXID, 0)
        .await
        .expect("outspend 0");
    assert_eq!(first.spent, outspends[0].spent);

    let proof = client
        .get_transaction_merkle_proof(TXID)
        .await
        .expect("merkle proof");
    assert_eq!(Some(proof.block_height), status.block_height);
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires network access to blockstream.info"]
async fn live_address_endpoints() {
    let client = testnet();

    let info = client.get_address_info(ADDRESS).await.expect("address info");
    assert_eq!(info.address, ADDRESS);

    let txs = client
        .get_address_transactions(ADDRESS)
        .await
        .expect("address txs");
    assert!(!txs.is_empty());

    client
        .get_address_mempool_transactions(ADDRESS)
        .await
        .expect("address mempool txs");
    client.get_address_utxos(ADDRESS).await.expect("address utxos");

    let found = client.search_addresses("tb1ptt").await.expect("prefix search");
    assert!(found.iter().all(|a| a.starts_with("tb1ptt")));
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires network access to blockstream.info"]
async fn live_block_endpoints() {
    let client = testnet();

    let block = client.get_block(BLOCK_HASH).await.expect("block");
    assert_eq!(block.id, BLOCK_HASH);

    let header = client.get_block_header(BLOCK_HASH).await.expect("header");
    assert_eq!(header.len(), 160);

    let status = client.get_block_status(BLOCK_HASH).await.expect("status");
    assert!(status.in_best_chain);

    let txids = client.get_block_txids(BLOCK_HASH).await.expect("txids");
    assert_eq!(txids.len() as u32, block.tx_count);
    let first = client
        .get_block_txid_at_index(BLOCK_HASH, 0)
        .await
        .expect("txid at index");
    assert_eq!(first, txids[0]);

    let page = client
        .get_block_transactions(BLOCK_HASH, None)
        .await
        .expect("block txs");
    assert_eq!(page[0].txid, txids[0]);

    let raw = client.get_block_raw(BLOCK_HASH).await.expect("raw block");
    assert_eq!(raw.len() as u32, block.size);

    let hash = client
        .get_block_hash_at_height(block.height)
        .await
        .expect("hash at height");
    assert_eq!(hash, BLOCK_HASH);

    let tip_height = client.get_block_tip_height().await.expect("tip height");
    assert!(tip_height > block.height);
    let tip_hash = client.get_block_tip_hash().await.expect("tip hash");
    assert_eq!(tip_hash.len(), 64);

    let recent = client.get_blocks(None).await.expect("recent blocks");
    assert!(!recent.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires network access to blockstream.info"]
async fn live_mempool_and_fee_endpoints() {
    let client = testnet();

    client.get_mempool_stats().await.expect("mempool stats");
    client.get_mempool_txids().await.expect("mempool txids");
    client.get_mempool_recent().await.expect("mempool recent");

    let fees = client.get_fee_estimates().await.expect("fee estimates");
    assert!(!fees.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires network access to blockstream.info"]
async fn live_liquid_native_asset() {
    init_tracing();
    let client = ExplorerClient::for_network(Network::Liquid).expect("client must build");
    let lbtc = "6f0279e9ed041c3d710a9f57d0c02928416460c4b722ae3457a11eec381c526d";

    let asset = client.get_asset(lbtc).await.expect("asset");
    assert_eq!(asset.asset_id, lbtc);
    assert!(asset.is_native());
}
