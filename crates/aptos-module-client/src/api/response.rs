//! API response types.
//!
//! The ABI types accept both the full fullnode JSON and the minified form
//! (only names, `is_entry`, abilities and field types). Everything the
//! parser does not look at is optional.

use serde::{Deserialize, Serialize};

/// A response from the Aptos API with headers metadata.
#[derive(Debug, Clone)]
pub struct AptosResponse<T> {
    /// The response body.
    pub data: T,
    /// The ledger version at the time of the request.
    pub ledger_version: Option<u64>,
    /// The ledger timestamp in microseconds.
    pub ledger_timestamp: Option<u64>,
    /// The epoch number.
    pub epoch: Option<u64>,
    /// The block height.
    pub block_height: Option<u64>,
    /// The oldest ledger version available.
    pub oldest_ledger_version: Option<u64>,
    /// The cursor for pagination.
    pub cursor: Option<String>,
}

impl<T> AptosResponse<T> {
    /// Creates a new response with data only.
    pub fn new(data: T) -> Self {
        Self {
            data,
            ledger_version: None,
            ledger_timestamp: None,
            epoch: None,
            block_height: None,
            oldest_ledger_version: None,
            cursor: None,
        }
    }

    /// Returns the inner data.
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// A Move module stored on chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveModule {
    /// The module bytecode as hex.
    pub bytecode: String,
    /// The module ABI.
    pub abi: Option<MoveModuleABI>,
}

/// Move module ABI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveModuleABI {
    /// The module address.
    pub address: String,
    /// The module name.
    pub name: String,
    /// Friend modules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub friends: Vec<String>,
    /// Exposed functions.
    pub exposed_functions: Vec<MoveFunction>,
    /// Structs defined in the module.
    pub structs: Vec<MoveStructDef>,
}

impl MoveModuleABI {
    /// Returns a copy of this ABI published under a different address.
    ///
    /// Used when the same module is deployed at several addresses and the
    /// checked-in ABI only names one of them.
    #[must_use]
    pub fn with_address(&self, address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..self.clone()
        }
    }

    /// Returns the `address::name` module id.
    pub fn module_id(&self) -> String {
        format!("{}::{}", self.address, self.name)
    }
}

/// A function defined in a Move module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveFunction {
    /// Function name.
    pub name: String,
    /// Visibility (`private`, `public` or `friend`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// Whether this is an entry function.
    pub is_entry: bool,
    /// Whether this is a view function.
    #[serde(default)]
    pub is_view: bool,
    /// Generic type parameters.
    #[serde(default)]
    pub generic_type_params: Vec<MoveGenericTypeParam>,
    /// Function parameters.
    #[serde(default)]
    pub params: Vec<String>,
    /// Return types.
    #[serde(default, rename = "return")]
    pub returns: Vec<String>,
}

/// Generic type parameter of a function or struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveGenericTypeParam {
    /// Constraints on the type parameter.
    #[serde(default)]
    pub constraints: Vec<String>,
}

/// A struct defined in a Move module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStructDef {
    /// Struct name.
    pub name: String,
    /// Whether this is a native struct.
    #[serde(default)]
    pub is_native: bool,
    /// Abilities of the struct.
    pub abilities: Vec<String>,
    /// Generic type parameters.
    #[serde(default)]
    pub generic_type_params: Vec<MoveGenericTypeParam>,
    /// Fields of the struct.
    pub fields: Vec<MoveStructField>,
}

impl MoveStructDef {
    /// Returns true if the struct has the given ability.
    pub fn has_ability(&self, ability: &str) -> bool {
        self.abilities.iter().any(|a| a == ability)
    }
}

/// A field in a Move struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStructField {
    /// Field name.
    pub name: String,
    /// Field type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
}
