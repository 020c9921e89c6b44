//! Event types.
//!
//! Events are emitted by Move modules into event handles stored on
//! resources, and are read back by `account`, handle struct and field name.

use serde::{Deserialize, Serialize};

/// A globally unique identifier for an event stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventGuid {
    /// The creation number.
    pub creation_number: String,
    /// The account address.
    pub account_address: String,
}

/// An event as returned by the fullnode REST API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// The transaction version that emitted this event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// The globally unique identifier for this event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<EventGuid>,
    /// The sequence number of this event within its stream.
    pub sequence_number: String,
    /// The type of the event data.
    #[serde(rename = "type")]
    pub typ: String,
    /// The event data as JSON.
    pub data: serde_json::Value,
}

impl Event {
    /// Returns the event type as a string.
    pub fn event_type(&self) -> &str {
        &self.typ
    }

    /// Returns the sequence number.
    ///
    /// # Errors
    /// Returns an error if the sequence number string cannot be parsed as u64.
    pub fn sequence_number(&self) -> Result<u64, std::num::ParseIntError> {
        self.sequence_number.parse()
    }

    /// Tries to deserialize the event data into a specific type.
    ///
    /// # Errors
    ///
    /// Returns an error if the event data cannot be deserialized into the requested type.
    pub fn data_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.clone())
    }
}

/// Pagination for an event query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventQuery {
    /// Sequence number to start from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    /// Maximum number of events to return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u16>,
}

impl EventQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the starting sequence number.
    #[must_use]
    pub fn with_start(mut self, start: u64) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_limit(mut self, limit: u16) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Optional arguments of a generated event getter.
///
/// The type parameter is appended to the handle struct as `<T>`; it is not
/// checked against the struct's generic parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventGetterParams {
    /// Type parameter of the handle struct, e.g. `0x1::aptos_coin::AptosCoin`.
    pub type_parameter: Option<String>,
    /// Pagination, forwarded unchanged.
    pub query: Option<EventQuery>,
}

impl EventGetterParams {
    /// Creates empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the type parameter.
    #[must_use]
    pub fn with_type_parameter(mut self, type_parameter: impl Into<String>) -> Self {
        self.type_parameter = Some(type_parameter.into());
        self
    }

    /// Sets the query.
    #[must_use]
    pub fn with_query(mut self, query: EventQuery) -> Self {
        self.query = Some(query);
        self
    }
}
