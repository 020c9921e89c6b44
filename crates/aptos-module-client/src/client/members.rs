//! Generated members.
//!
//! Each member is bound, when the client is built, to the capability it
//! delegates to, or to nothing. Invoking an unbound member fails before any
//! future is created, so `call(..)?` reports a missing capability
//! synchronously and only a bound member is ever awaited.

use crate::capability::{AccountResourceReader, EventReader, TransactionSigner};
use crate::error::{AptosError, AptosResult, Capability};
use crate::types::{
    EntryFunctionArgs, EntryFunctionPayload, Event, EventGetterParams, Resource, SubmitOptions,
    SubmitResponse, TransactionPayload,
};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

/// Appends `<type_parameter>` to a type tag when a non-empty one is given.
fn with_type_parameter(base: &str, type_parameter: Option<&str>) -> String {
    match type_parameter {
        Some(type_parameter) if !type_parameter.is_empty() => {
            format!("{base}<{type_parameter}>")
        }
        _ => base.to_string(),
    }
}

/// The kind of a generated member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// Entry function invoker.
    EntryFunction,
    /// Resource getter.
    Resource,
    /// Event getter.
    Events,
}

impl MemberKind {
    /// The collaborator capability members of this kind delegate to.
    pub fn capability(&self) -> Capability {
        match self {
            MemberKind::EntryFunction => Capability::Signer,
            MemberKind::Resource => Capability::AccountResource,
            MemberKind::Events => Capability::Events,
        }
    }
}

/// A generated member of a module client.
#[derive(Clone, Debug)]
pub enum Member {
    /// Submits an entry function transaction.
    EntryFunction(EntryFunction),
    /// Reads a resource.
    Resource(ResourceGetter),
    /// Reads events from an event handle.
    Events(EventGetter),
}

impl Member {
    /// The member name.
    pub fn name(&self) -> &str {
        match self {
            Member::EntryFunction(m) => m.name(),
            Member::Resource(m) => m.name(),
            Member::Events(m) => m.name(),
        }
    }

    /// The member kind.
    pub fn kind(&self) -> MemberKind {
        match self {
            Member::EntryFunction(_) => MemberKind::EntryFunction,
            Member::Resource(_) => MemberKind::Resource,
            Member::Events(_) => MemberKind::Events,
        }
    }

    /// Returns true if the member is bound to a capability.
    pub fn is_bound(&self) -> bool {
        match self {
            Member::EntryFunction(m) => m.is_bound(),
            Member::Resource(m) => m.is_bound(),
            Member::Events(m) => m.is_bound(),
        }
    }
}

/// Invokes one entry function through the signer.
#[derive(Clone)]
pub struct EntryFunction {
    name: String,
    function: String,
    signer: Option<Arc<dyn TransactionSigner>>,
}

impl EntryFunction {
    pub(crate) fn new(
        module_id: &str,
        name: &str,
        signer: Option<Arc<dyn TransactionSigner>>,
    ) -> Self {
        Self {
            name: name.to_string(),
            function: format!("{module_id}::{name}"),
            signer,
        }
    }

    /// The member name, which is the function name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fully qualified function id.
    pub fn function_id(&self) -> &str {
        &self.function
    }

    /// Returns true if a signer is bound.
    pub fn is_bound(&self) -> bool {
        self.signer.is_some()
    }

    /// Builds the payload this member submits for `args`.
    pub fn payload(&self, args: EntryFunctionArgs) -> TransactionPayload {
        TransactionPayload::EntryFunction(EntryFunctionPayload {
            function: self.function.clone(),
            type_arguments: args.type_arguments,
            arguments: args.arguments,
        })
    }

    /// Submits the entry function.
    ///
    /// Resolves to the transaction hash, or `None` if the signer reported
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AptosError::MissingCapability`] immediately if no signer is
    /// bound. The returned future yields the signer's own error unchanged.
    pub fn call(
        &self,
        args: EntryFunctionArgs,
        options: Option<SubmitOptions>,
    ) -> AptosResult<impl Future<Output = AptosResult<Option<String>>> + Send + '_> {
        let signer = self
            .signer
            .as_ref()
            .ok_or(AptosError::MissingCapability(Capability::Signer))?;
        let payload = self.payload(args);

        Ok(async move {
            debug!(function = %self.function, "Submitting entry function");
            let response = signer.sign_and_submit_transaction(payload, options).await?;
            Ok(response.map(SubmitResponse::into_hash))
        })
    }
}

impl fmt::Debug for EntryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryFunction")
            .field("name", &self.name)
            .field("function", &self.function)
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// Reads one resource type through the resource reader.
#[derive(Clone)]
pub struct ResourceGetter {
    name: String,
    resource_type: String,
    reader: Option<Arc<dyn AccountResourceReader>>,
}

impl ResourceGetter {
    pub(crate) fn new(
        name: String,
        module_id: &str,
        struct_name: &str,
        reader: Option<Arc<dyn AccountResourceReader>>,
    ) -> Self {
        Self {
            name,
            resource_type: format!("{module_id}::{struct_name}"),
            reader,
        }
    }

    /// The member name, `get<StructName>`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resource type without type parameters.
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Returns true if a resource reader is bound.
    pub fn is_bound(&self) -> bool {
        self.reader.is_some()
    }

    /// The resource type requested for `type_parameter`.
    pub fn type_tag(&self, type_parameter: Option<&str>) -> String {
        with_type_parameter(&self.resource_type, type_parameter)
    }

    /// Gets the resource stored under `account`.
    ///
    /// # Errors
    ///
    /// Returns [`AptosError::MissingCapability`] immediately if no reader is
    /// bound. The returned future yields the reader's own error unchanged.
    pub fn call<'a>(
        &'a self,
        account: &'a str,
        type_parameter: Option<&str>,
    ) -> AptosResult<impl Future<Output = AptosResult<Resource>> + Send + 'a> {
        let reader = self
            .reader
            .as_ref()
            .ok_or(AptosError::MissingCapability(Capability::AccountResource))?;
        let resource_type = self.type_tag(type_parameter);

        Ok(async move {
            debug!(account, resource_type = %resource_type, "Getting account resource");
            reader
                .get_account_resource(account, &resource_type, None)
                .await
        })
    }
}

impl fmt::Debug for ResourceGetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceGetter")
            .field("name", &self.name)
            .field("resource_type", &self.resource_type)
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// Reads one event handle through the event reader.
#[derive(Clone)]
pub struct EventGetter {
    name: String,
    event_handle: String,
    field_name: String,
    reader: Option<Arc<dyn EventReader>>,
}

impl EventGetter {
    pub(crate) fn new(
        name: String,
        event_handle: &str,
        field_name: &str,
        reader: Option<Arc<dyn EventReader>>,
    ) -> Self {
        Self {
            name,
            event_handle: event_handle.to_string(),
            field_name: field_name.to_string(),
            reader,
        }
    }

    /// The member name, `get<PascalCaseFieldName>`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The struct holding the handle, without type parameters.
    pub fn event_handle(&self) -> &str {
        &self.event_handle
    }

    /// The handle field name.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Returns true if an event reader is bound.
    pub fn is_bound(&self) -> bool {
        self.reader.is_some()
    }

    /// Gets events from the handle under `account`.
    ///
    /// # Errors
    ///
    /// Returns [`AptosError::MissingCapability`] immediately if no reader is
    /// bound. The returned future yields the reader's own error unchanged.
    pub fn call<'a>(
        &'a self,
        account: &'a str,
        params: EventGetterParams,
    ) -> AptosResult<impl Future<Output = AptosResult<Vec<Event>>> + Send + 'a> {
        let reader = self
            .reader
            .as_ref()
            .ok_or(AptosError::MissingCapability(Capability::Events))?;
        let event_handle =
            with_type_parameter(&self.event_handle, params.type_parameter.as_deref());
        let query = params.query;

        Ok(async move {
            debug!(
                account,
                event_handle = %event_handle,
                field_name = %self.field_name,
                "Getting events by event handle"
            );
            reader
                .get_events_by_event_handle(account, &event_handle, &self.field_name, query)
                .await
        })
    }
}

impl fmt::Debug for EventGetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventGetter")
            .field("name", &self.name)
            .field("event_handle", &self.event_handle)
            .field("field_name", &self.field_name)
            .field("bound", &self.is_bound())
            .finish()
    }
}
