//! Fullnode REST API access.
//!
//! - [`FullnodeClient`] - read-only client that can back resource and event getters
//! - [`response`] - response wrapper and Move module ABI types

pub mod fullnode;
pub mod response;

pub use fullnode::FullnodeClient;
pub use response::{AptosResponse, MoveModule, MoveModuleABI};
