//! Module clients generated from ABIs.
//!
//! [`AptosModuleClient`] exposes, for one Move module:
//!
//! | Member | Generated for | Delegates to |
//! |--------|---------------|--------------|
//! | `transfer` | each entry function, name unchanged | [`TransactionSigner`](crate::capability::TransactionSigner) |
//! | `getCoinStore` | each struct with `key` | [`AccountResourceReader`](crate::capability::AccountResourceReader) |
//! | `getDepositEvents` | each event handle field of those structs | [`EventReader`](crate::capability::EventReader) |
//!
//! Every member exists whatever the collaborator supports; members whose
//! capability is missing fail with [`AptosError::MissingCapability`] when
//! invoked.

mod members;

pub use members::{EntryFunction, EventGetter, Member, MemberKind, ResourceGetter};

use crate::api::response::MoveModuleABI;
use crate::api::FullnodeClient;
use crate::capability::{Capabilities, SignerOrClient};
use crate::codegen::{getter_name, parse_move_module, to_pascal_case};
use crate::error::{AptosError, AptosResult};
use crate::types::{EntryFunctionArgs, Event, EventGetterParams, Resource, SubmitOptions};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

/// A client for one Move module, with members generated from its ABI.
///
/// The member set is fixed at construction. When two members derive the same
/// name, the later one replaces the earlier one in its position.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use aptos_module_client::api::FullnodeClient;
/// use aptos_module_client::types::EventGetterParams;
/// use aptos_module_client::{AptosConfig, AptosModuleClient};
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let fullnode = Arc::new(FullnodeClient::new(AptosConfig::testnet())?);
///     let abi = fullnode.get_module_abi("0x1", "coin").await?;
///     let coin = AptosModuleClient::new(&abi, fullnode, None);
///
///     let store = coin
///         .get_resource("getCoinStore", "0x1", Some("0x1::aptos_coin::AptosCoin"))?
///         .await?;
///     println!("{}", store.data);
///
///     let deposits = coin
///         .get_events("getDepositEvents", "0x1", EventGetterParams::new())?
///         .await?;
///     println!("{} deposits", deposits.len());
///     Ok(())
/// }
/// ```
pub struct AptosModuleClient {
    signer_or_client: Arc<dyn SignerOrClient>,
    capabilities: Capabilities,
    module_id: String,
    members: Vec<Member>,
    index: HashMap<String, usize>,
}

impl AptosModuleClient {
    /// Builds a client for `abi`.
    ///
    /// `module_address` replaces the ABI's address when given and non-empty.
    pub fn new(
        abi: &MoveModuleABI,
        signer_or_client: Arc<dyn SignerOrClient>,
        module_address: Option<&str>,
    ) -> Self {
        let parsed = match module_address {
            Some(address) if !address.is_empty() => parse_move_module(&abi.with_address(address)),
            _ => parse_move_module(abi),
        };
        let capabilities = Capabilities::detect(&signer_or_client);

        let module_id = parsed.module_id.clone();
        let mut client = Self {
            signer_or_client,
            capabilities,
            module_id: parsed.module_id,
            members: Vec::new(),
            index: HashMap::new(),
        };

        for name in &parsed.entry_function_names {
            let signer = client.capabilities.signer.clone();
            client.define(Member::EntryFunction(EntryFunction::new(
                &module_id, name, signer,
            )));
        }

        for name in &parsed.key_struct_names {
            let reader = client.capabilities.resource_reader.clone();
            client.define(Member::Resource(ResourceGetter::new(
                getter_name(name),
                &module_id,
                name,
                reader,
            )));
        }

        for handle in &parsed.event_handles {
            let reader = client.capabilities.event_reader.clone();
            client.define(Member::Events(EventGetter::new(
                getter_name(&to_pascal_case(&handle.field_name)),
                &handle.event_handle,
                &handle.field_name,
                reader,
            )));
        }

        debug!(
            module_id = %module_id,
            entry_functions = parsed.entry_function_names.len(),
            resources = parsed.key_struct_names.len(),
            event_handles = parsed.event_handles.len(),
            members = client.members.len(),
            can_sign = client.capabilities.can_sign(),
            can_read_resources = client.capabilities.can_read_resources(),
            can_read_events = client.capabilities.can_read_events(),
            "Built module client"
        );

        client
    }

    /// Fetches the ABI of `address::module_name` and builds a client for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the module cannot be fetched or has no ABI.
    pub async fn from_chain(
        fullnode: &FullnodeClient,
        address: &str,
        module_name: &str,
        signer_or_client: Arc<dyn SignerOrClient>,
    ) -> AptosResult<Self> {
        let abi = fullnode.get_module_abi(address, module_name).await?;
        Ok(Self::new(&abi, signer_or_client, None))
    }

    fn define(&mut self, member: Member) {
        if let Some(&position) = self.index.get(member.name()) {
            self.members[position] = member;
            return;
        }
        self.index
            .insert(member.name().to_string(), self.members.len());
        self.members.push(member);
    }

    /// The `address::name` id of the module.
    pub fn module_id(&self) -> &str {
        &self.module_id
    }

    /// The collaborator this client delegates to.
    pub fn signer_or_client(&self) -> &Arc<dyn SignerOrClient> {
        &self.signer_or_client
    }

    /// The capabilities detected on the collaborator.
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Members in definition order.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    /// Member names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(Member::name)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the module generated no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns true if a member with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Looks up a member by name.
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.index.get(name).map(|&position| &self.members[position])
    }

    /// Looks up an entry function invoker by name.
    pub fn entry_function(&self, name: &str) -> Option<&EntryFunction> {
        match self.member(name)? {
            Member::EntryFunction(m) => Some(m),
            _ => None,
        }
    }

    /// Looks up a resource getter by member name, e.g. `getCoinStore`.
    pub fn resource_getter(&self, name: &str) -> Option<&ResourceGetter> {
        match self.member(name)? {
            Member::Resource(m) => Some(m),
            _ => None,
        }
    }

    /// Looks up an event getter by member name, e.g. `getDepositEvents`.
    pub fn event_getter(&self, name: &str) -> Option<&EventGetter> {
        match self.member(name)? {
            Member::Events(m) => Some(m),
            _ => None,
        }
    }

    fn not_found(&self, kind: &str, name: &str) -> AptosError {
        AptosError::NotFound(format!("{kind} `{name}` on {}", self.module_id))
    }

    /// Invokes the entry function member `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AptosError::NotFound`] if there is no such entry function, or
    /// the errors of [`EntryFunction::call`].
    pub fn call_entry_function(
        &self,
        name: &str,
        args: EntryFunctionArgs,
        options: Option<SubmitOptions>,
    ) -> AptosResult<impl Future<Output = AptosResult<Option<String>>> + Send + '_> {
        self.entry_function(name)
            .ok_or_else(|| self.not_found("entry function", name))?
            .call(args, options)
    }

    /// Invokes the resource getter member `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AptosError::NotFound`] if there is no such getter, or the
    /// errors of [`ResourceGetter::call`].
    pub fn get_resource<'a>(
        &'a self,
        name: &str,
        account: &'a str,
        type_parameter: Option<&str>,
    ) -> AptosResult<impl Future<Output = AptosResult<Resource>> + Send + 'a> {
        self.resource_getter(name)
            .ok_or_else(|| self.not_found("resource getter", name))?
            .call(account, type_parameter)
    }

    /// Invokes the event getter member `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AptosError::NotFound`] if there is no such getter, or the
    /// errors of [`EventGetter::call`].
    pub fn get_events<'a>(
        &'a self,
        name: &str,
        account: &'a str,
        params: EventGetterParams,
    ) -> AptosResult<impl Future<Output = AptosResult<Vec<Event>>> + Send + 'a> {
        self.event_getter(name)
            .ok_or_else(|| self.not_found("event getter", name))?
            .call(account, params)
    }
}

impl fmt::Debug for AptosModuleClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AptosModuleClient")
            .field("module_id", &self.module_id)
            .field("capabilities", &self.capabilities)
            .field("members", &self.members)
            .finish()
    }
}
