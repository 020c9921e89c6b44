//! Transaction payloads handed to a signer, and what a signer hands back.

use serde::{Deserialize, Serialize};

/// The JSON payload of a transaction.
///
/// Serializes in the fullnode's JSON form, tagged by `type`:
///
/// ```rust
/// use aptos_module_client::types::{EntryFunctionPayload, TransactionPayload};
///
/// let payload = TransactionPayload::EntryFunction(EntryFunctionPayload {
///     function: "0x1::coin::transfer".to_string(),
///     type_arguments: vec![],
///     arguments: vec![],
/// });
/// let json = serde_json::to_value(&payload).unwrap();
/// assert_eq!(json["type"], "entry_function_payload");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransactionPayload {
    /// Call an entry function on a module.
    #[serde(rename = "entry_function_payload")]
    EntryFunction(EntryFunctionPayload),
}

impl TransactionPayload {
    /// Returns the entry function payload, if this is one.
    pub fn as_entry_function(&self) -> Option<&EntryFunctionPayload> {
        match self {
            TransactionPayload::EntryFunction(payload) => Some(payload),
        }
    }
}

/// An entry function call in JSON form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFunctionPayload {
    /// Fully qualified function id, `address::module::function`.
    pub function: String,
    /// Type arguments as type tag strings.
    pub type_arguments: Vec<String>,
    /// Arguments as JSON values.
    pub arguments: Vec<serde_json::Value>,
}

/// The caller-supplied part of an entry function payload.
///
/// Both lists default to empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFunctionArgs {
    /// Type arguments as type tag strings.
    #[serde(default)]
    pub type_arguments: Vec<String>,
    /// Arguments as JSON values.
    #[serde(default)]
    pub arguments: Vec<serde_json::Value>,
}

impl EntryFunctionArgs {
    /// Creates empty arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a type argument.
    #[must_use]
    pub fn with_type_argument(mut self, type_argument: impl Into<String>) -> Self {
        self.type_arguments.push(type_argument.into());
        self
    }

    /// Appends an argument.
    #[must_use]
    pub fn with_argument(mut self, argument: impl Into<serde_json::Value>) -> Self {
        self.arguments.push(argument.into());
        self
    }
}

/// Partial submit request: fields a signer should use instead of its own
/// defaults. Unset fields are omitted when serialized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOptions {
    /// Sender address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    /// Sequence number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,
    /// Maximum gas amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_gas_amount: Option<String>,
    /// Gas unit price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_unit_price: Option<String>,
    /// Expiration timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_timestamp_secs: Option<String>,
}

impl SubmitOptions {
    /// Sets the maximum gas amount.
    #[must_use]
    pub fn with_max_gas_amount(mut self, max_gas_amount: u64) -> Self {
        self.max_gas_amount = Some(max_gas_amount.to_string());
        self
    }

    /// Sets the gas unit price.
    #[must_use]
    pub fn with_gas_unit_price(mut self, gas_unit_price: u64) -> Self {
        self.gas_unit_price = Some(gas_unit_price.to_string());
        self
    }

    /// Sets the expiration timestamp.
    #[must_use]
    pub fn with_expiration_timestamp_secs(mut self, expiration_timestamp_secs: u64) -> Self {
        self.expiration_timestamp_secs = Some(expiration_timestamp_secs.to_string());
        self
    }
}

/// Response when submitting a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTransaction {
    /// The transaction hash.
    pub hash: String,
    /// The sender address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    /// The sequence number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,
    /// Maximum gas amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_gas_amount: Option<String>,
    /// Gas unit price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_unit_price: Option<String>,
    /// Expiration timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_timestamp_secs: Option<String>,
}

impl PendingTransaction {
    /// Creates a pending transaction carrying only a hash.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            sender: None,
            sequence_number: None,
            max_gas_amount: None,
            gas_unit_price: None,
            expiration_timestamp_secs: None,
        }
    }
}

/// What a signer returns after submitting: wallets differ between a bare
/// hash and a pending transaction object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmitResponse {
    /// A bare transaction hash.
    Hash(String),
    /// A pending transaction carrying a `hash` field.
    Pending(PendingTransaction),
}

impl SubmitResponse {
    /// Returns the transaction hash.
    pub fn hash(&self) -> &str {
        match self {
            SubmitResponse::Hash(hash) => hash,
            SubmitResponse::Pending(pending) => &pending.hash,
        }
    }

    /// Consumes the response, returning the transaction hash.
    pub fn into_hash(self) -> String {
        match self {
            SubmitResponse::Hash(hash) => hash,
            SubmitResponse::Pending(pending) => pending.hash,
        }
    }
}

impl From<PendingTransaction> for SubmitResponse {
    fn from(pending: PendingTransaction) -> Self {
        SubmitResponse::Pending(pending)
    }
}

impl From<String> for SubmitResponse {
    fn from(hash: String) -> Self {
        SubmitResponse::Hash(hash)
    }
}
