//! Example: Coin Module Client
//!
//! This example demonstrates how to:
//! 1. Build a client for `0x1::coin` from its on-chain ABI
//! 2. List the generated members
//! 3. Read a resource and an event handle through the generated getters
//! 4. See what an entry function reports without a signer
//!
//! Run with: `RUST_LOG=debug cargo run --example coin_client`

use aptos_module_client::api::FullnodeClient;
use aptos_module_client::types::{EntryFunctionArgs, EventGetterParams, EventQuery};
use aptos_module_client::{AptosConfig, AptosModuleClient};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const APTOS_COIN: &str = "0x1::aptos_coin::AptosCoin";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Coin Module Client Example ===\n");

    let fullnode = Arc::new(FullnodeClient::new(AptosConfig::testnet())?);
    println!("Connected to {}", fullnode.base_url());

    // 1. Build the client from the module ABI
    let coin = AptosModuleClient::from_chain(&fullnode, "0x1", "coin", fullnode.clone()).await?;
    println!("\n--- 1. Module {} ---", coin.module_id());
    println!("{:?}", coin.capabilities());

    // 2. Members
    println!("\n--- 2. Members ({} total) ---", coin.len());
    for member in coin.members() {
        println!("  {:<32} {:?}", member.name(), member.kind());
    }

    // 3. Reads
    println!("\n--- 3. Reads ---");
    let account = "0x1";
    match coin.get_resource("getCoinInfo", account, Some(APTOS_COIN))?.await {
        Ok(info) => println!("CoinInfo: {}", info.data),
        Err(e) => println!("CoinInfo unavailable: {e}"),
    }

    let params = EventGetterParams::new()
        .with_type_parameter(APTOS_COIN)
        .with_query(EventQuery::new().with_limit(5));
    match coin.get_events("getDepositEvents", account, params)?.await {
        Ok(events) => {
            println!("{} deposit events", events.len());
            for event in &events {
                println!("  #{} {}", event.sequence_number, event.data);
            }
        }
        Err(e) => println!("Deposit events unavailable: {e}"),
    }

    // 4. Entry functions need a signer
    println!("\n--- 4. Entry Function Without Signer ---");
    let args = EntryFunctionArgs::new()
        .with_type_argument(APTOS_COIN)
        .with_argument("0x2")
        .with_argument("100");
    if let Err(e) = coin.call_entry_function("transfer", args, None) {
        println!("transfer: {e}");
    }

    println!("\n=== Done ===");
    Ok(())
}
