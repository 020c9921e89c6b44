//! Collaborator capabilities.
//!
//! A generated client never talks to the network itself. It delegates to a
//! collaborator that may be able to sign and submit transactions
//! ([`TransactionSigner`]), read account resources ([`AccountResourceReader`])
//! and read events ([`EventReader`]). A wallet usually offers the first, a
//! fullnode client the other two.
//!
//! [`SignerOrClient`] is how a client discovers which of these a collaborator
//! has. Each accessor defaults to `None`, so an implementation only opts in to
//! what it supports:
//!
//! ```rust
//! use std::sync::Arc;
//! use aptos_module_client::capability::{SignerOrClient, TransactionSigner};
//! use aptos_module_client::types::{SubmitOptions, SubmitResponse, TransactionPayload};
//! use aptos_module_client::AptosResult;
//!
//! struct Wallet;
//!
//! #[async_trait::async_trait]
//! impl TransactionSigner for Wallet {
//!     async fn sign_and_submit_transaction(
//!         &self,
//!         _payload: TransactionPayload,
//!         _options: Option<SubmitOptions>,
//!     ) -> AptosResult<Option<SubmitResponse>> {
//!         Ok(Some(SubmitResponse::Hash("0xabc".to_string())))
//!     }
//! }
//!
//! impl SignerOrClient for Wallet {
//!     fn signer(self: Arc<Self>) -> Option<Arc<dyn TransactionSigner>> {
//!         Some(self)
//!     }
//! }
//! ```

use crate::error::AptosResult;
use crate::types::{
    Event, EventQuery, Resource, ResourceQuery, SubmitOptions, SubmitResponse, TransactionPayload,
};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Signs and submits transactions.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    /// Signs and submits a transaction, returning what the wallet reports.
    ///
    /// `None` means the wallet accepted the request without reporting a hash.
    async fn sign_and_submit_transaction(
        &self,
        payload: TransactionPayload,
        options: Option<SubmitOptions>,
    ) -> AptosResult<Option<SubmitResponse>>;
}

/// Reads resources stored under accounts.
#[async_trait]
pub trait AccountResourceReader: Send + Sync {
    /// Gets the resource of the given fully qualified type.
    async fn get_account_resource(
        &self,
        account: &str,
        resource_type: &str,
        query: Option<ResourceQuery>,
    ) -> AptosResult<Resource>;
}

/// Reads events from event handles.
#[async_trait]
pub trait EventReader: Send + Sync {
    /// Gets events from the handle stored in `field_name` of the
    /// `event_handle_struct` resource under `account`.
    async fn get_events_by_event_handle(
        &self,
        account: &str,
        event_handle_struct: &str,
        field_name: &str,
        query: Option<EventQuery>,
    ) -> AptosResult<Vec<Event>>;
}

/// A collaborator handed to a module client.
///
/// Accessors are called once, when the client is built.
pub trait SignerOrClient: Send + Sync + 'static {
    /// Returns this collaborator as a signer, if it can sign.
    fn signer(self: Arc<Self>) -> Option<Arc<dyn TransactionSigner>> {
        None
    }

    /// Returns this collaborator as a resource reader, if it can read resources.
    fn resource_reader(self: Arc<Self>) -> Option<Arc<dyn AccountResourceReader>> {
        None
    }

    /// Returns this collaborator as an event reader, if it can read events.
    fn event_reader(self: Arc<Self>) -> Option<Arc<dyn EventReader>> {
        None
    }
}

/// The capabilities detected on a collaborator.
#[derive(Clone, Default)]
pub struct Capabilities {
    pub(crate) signer: Option<Arc<dyn TransactionSigner>>,
    pub(crate) resource_reader: Option<Arc<dyn AccountResourceReader>>,
    pub(crate) event_reader: Option<Arc<dyn EventReader>>,
}

impl Capabilities {
    /// Detects the capabilities of a collaborator.
    pub fn detect<C: SignerOrClient + ?Sized>(collaborator: &Arc<C>) -> Self {
        Self {
            signer: Arc::clone(collaborator).signer(),
            resource_reader: Arc::clone(collaborator).resource_reader(),
            event_reader: Arc::clone(collaborator).event_reader(),
        }
    }

    /// Returns true if transactions can be signed.
    pub fn can_sign(&self) -> bool {
        self.signer.is_some()
    }

    /// Returns true if resources can be read.
    pub fn can_read_resources(&self) -> bool {
        self.resource_reader.is_some()
    }

    /// Returns true if events can be read.
    pub fn can_read_events(&self) -> bool {
        self.event_reader.is_some()
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("signer", &self.can_sign())
            .field("resource_reader", &self.can_read_resources())
            .field("event_reader", &self.can_read_events())
            .finish()
    }
}

/// A collaborator assembled from separately supplied capabilities, e.g. a
/// wallet for signing and a fullnode client for reads.
///
/// # Example
///
/// ```rust,ignore
/// let collaborator = CompositeCollaborator::new()
///     .with_signer(Arc::new(wallet))
///     .with_resource_reader(fullnode.clone())
///     .with_event_reader(fullnode);
/// ```
#[derive(Clone, Default)]
pub struct CompositeCollaborator {
    capabilities: Capabilities,
}

impl CompositeCollaborator {
    /// Creates a collaborator with no capabilities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a signer.
    #[must_use]
    pub fn with_signer(mut self, signer: Arc<dyn TransactionSigner>) -> Self {
        self.capabilities.signer = Some(signer);
        self
    }

    /// Adds a resource reader.
    #[must_use]
    pub fn with_resource_reader(mut self, reader: Arc<dyn AccountResourceReader>) -> Self {
        self.capabilities.resource_reader = Some(reader);
        self
    }

    /// Adds an event reader.
    #[must_use]
    pub fn with_event_reader(mut self, reader: Arc<dyn EventReader>) -> Self {
        self.capabilities.event_reader = Some(reader);
        self
    }
}

impl fmt::Debug for CompositeCollaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompositeCollaborator")
            .field(&self.capabilities)
            .finish()
    }
}

impl SignerOrClient for CompositeCollaborator {
    fn signer(self: Arc<Self>) -> Option<Arc<dyn TransactionSigner>> {
        self.capabilities.signer.clone()
    }

    fn resource_reader(self: Arc<Self>) -> Option<Arc<dyn AccountResourceReader>> {
        self.capabilities.resource_reader.clone()
    }

    fn event_reader(self: Arc<Self>) -> Option<Arc<dyn EventReader>> {
        self.capabilities.event_reader.clone()
    }
}
