//! Extraction of generated members from a Move module ABI.

use crate::api::response::{MoveModuleABI, MoveStructDef, MoveStructField};

/// Type tag prefix of event handle fields.
pub const EVENT_HANDLE_PREFIX: &str = "0x1::event::EventHandle";

/// Ability that makes a struct a resource.
pub const KEY_ABILITY: &str = "key";

/// An event handle field declared on a resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventHandleRef {
    /// The struct holding the handle, `address::module::Struct`.
    pub event_handle: String,
    /// The handle field name.
    pub field_name: String,
}

/// The parts of a module ABI that generated clients expose.
///
/// Order follows the ABI; duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedModule {
    /// `address::name`.
    pub module_id: String,
    /// Names of the entry functions.
    pub entry_function_names: Vec<String>,
    /// Names of the structs with the `key` ability.
    pub key_struct_names: Vec<String>,
    /// Event handle fields of those structs, struct order then field order.
    pub event_handles: Vec<EventHandleRef>,
}

/// Parses a module ABI.
pub fn parse_move_module(abi: &MoveModuleABI) -> ParsedModule {
    let module_id = abi.module_id();
    let key_structs: Vec<&MoveStructDef> =
        abi.structs.iter().filter(|s| is_resource(s)).collect();

    let entry_function_names = abi
        .exposed_functions
        .iter()
        .filter(|f| f.is_entry)
        .map(|f| f.name.clone())
        .collect();

    let key_struct_names = key_structs.iter().map(|s| s.name.clone()).collect();

    let event_handles = key_structs
        .iter()
        .flat_map(|s| {
            let event_handle = format!("{module_id}::{}", s.name);
            s.fields
                .iter()
                .filter(|f| is_event_handle(f))
                .map(move |f| EventHandleRef {
                    event_handle: event_handle.clone(),
                    field_name: f.name.clone(),
                })
        })
        .collect();

    ParsedModule {
        module_id,
        entry_function_names,
        key_struct_names,
        event_handles,
    }
}

/// Returns true if the struct is stored under accounts.
pub fn is_resource(s: &MoveStructDef) -> bool {
    s.has_ability(KEY_ABILITY)
}

/// Returns true if the field holds an event handle.
pub fn is_event_handle(field: &MoveStructField) -> bool {
    field
        .typ
        .as_deref()
        .is_some_and(|typ| typ.starts_with(EVENT_HANDLE_PREFIX))
}
