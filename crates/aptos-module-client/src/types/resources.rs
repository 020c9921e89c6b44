//! Account resources.

use serde::{Deserialize, Serialize};

/// A resource stored on chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// The resource type.
    #[serde(rename = "type")]
    pub typ: String,
    /// The resource data as JSON.
    pub data: serde_json::Value,
}

impl Resource {
    /// Tries to deserialize the resource data into a specific type.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be deserialized into the requested type.
    pub fn data_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.clone())
    }
}

/// Options for a resource read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceQuery {
    /// Read the resource as of this ledger version instead of the latest.
    pub ledger_version: Option<u64>,
}

impl ResourceQuery {
    /// Reads as of the given ledger version.
    pub fn at_version(ledger_version: u64) -> Self {
        Self {
            ledger_version: Some(ledger_version),
        }
    }
}
