//! Member derivation from Move module ABIs.
//!
//! [`parse_move_module`] extracts what a generated client exposes: the module
//! id, the entry functions, the resources (structs with `key`) and the event
//! handles declared on those resources. Naming helpers turn those into member
//! names (`transfer`, `getCoinStore`, `getDepositEvents`).
//!
//! # Example
//!
//! ```rust
//! use aptos_module_client::api::response::MoveModuleABI;
//! use aptos_module_client::codegen::parse_move_module;
//!
//! let abi: MoveModuleABI = serde_json::from_str(r#"{
//!     "address": "0x1",
//!     "name": "coin",
//!     "exposed_functions": [{"name": "transfer", "is_entry": true}],
//!     "structs": [{
//!         "name": "CoinStore",
//!         "abilities": ["key"],
//!         "fields": [{"name": "deposit_events", "type": "0x1::event::EventHandle<0x1::coin::DepositEvent>"}]
//!     }]
//! }"#).unwrap();
//!
//! let parsed = parse_move_module(&abi);
//! assert_eq!(parsed.module_id, "0x1::coin");
//! assert_eq!(parsed.entry_function_names, vec!["transfer"]);
//! assert_eq!(parsed.key_struct_names, vec!["CoinStore"]);
//! assert_eq!(parsed.event_handles[0].field_name, "deposit_events");
//! ```

mod naming;
mod parser;

pub use naming::{getter_name, to_pascal_case, GETTER_PREFIX};
pub use parser::{
    is_event_handle, is_resource, parse_move_module, EventHandleRef, ParsedModule,
    EVENT_HANDLE_PREFIX, KEY_ABILITY,
};
