//! # Aptos Module Client
//!
//! Dynamic clients for Aptos Move modules, built at runtime from a module ABI.
//!
//! Given the ABI of a module such as `0x1::coin`, [`AptosModuleClient`] exposes
//! one member per entry function (`transfer`), one getter per resource
//! (`getCoinStore`) and one getter per event handle (`getDepositEvents`). Each
//! member delegates to a collaborator handed in at construction, usually a
//! wallet that signs or a [`FullnodeClient`](api::FullnodeClient) that reads.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use aptos_module_client::api::FullnodeClient;
//! use aptos_module_client::{AptosConfig, AptosModuleClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let fullnode = Arc::new(FullnodeClient::new(AptosConfig::testnet())?);
//!     let coin = AptosModuleClient::from_chain(&fullnode, "0x1", "coin", fullnode.clone()).await?;
//!
//!     for name in coin.names() {
//!         println!("{name}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`client`] - The module client and its members
//! - [`capability`] - Collaborator capability traits
//! - [`codegen`] - ABI parsing and member naming
//! - [`api`] - Fullnode REST API reader
//! - [`types`] - Payloads, resources and events

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod api;
pub mod capability;
pub mod client;
pub mod codegen;
pub mod config;
pub mod error;
pub mod types;

// Re-export main entry points
pub use client::AptosModuleClient;
pub use config::AptosConfig;
pub use error::{AptosError, AptosResult, Capability};
