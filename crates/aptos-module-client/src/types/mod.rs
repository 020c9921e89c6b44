//! Values exchanged with collaborators.
//!
//! - [`events`] - events and event queries
//! - [`resources`] - account resources and resource queries
//! - [`payload`] - entry function payloads, submit options and responses

pub mod events;
pub mod payload;
pub mod resources;

pub use events::{Event, EventGetterParams, EventGuid, EventQuery};
pub use payload::{
    EntryFunctionArgs, EntryFunctionPayload, PendingTransaction, SubmitOptions, SubmitResponse,
    TransactionPayload,
};
pub use resources::{Resource, ResourceQuery};
