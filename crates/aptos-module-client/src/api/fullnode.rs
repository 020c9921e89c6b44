//! Fullnode REST API reader.

use crate::api::response::{AptosResponse, MoveModule, MoveModuleABI};
use crate::capability::{AccountResourceReader, EventReader, SignerOrClient};
use crate::config::{read_response_bounded, AptosConfig};
use crate::error::{AptosError, AptosResult};
use crate::types::{Event, EventQuery, Resource, ResourceQuery};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;
use url::Url;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Read-only client for the Aptos fullnode REST API.
///
/// Implements [`AccountResourceReader`] and [`EventReader`], so it can back
/// the getters of a module client on its own. It cannot sign: entry function
/// members of a client built on it alone report a missing signer.
///
/// # Example
///
/// ```rust,no_run
/// use aptos_module_client::api::FullnodeClient;
/// use aptos_module_client::AptosConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let client = FullnodeClient::new(AptosConfig::testnet())?;
///     let resource = client
///         .get_account_resource("0x1", "0x1::account::Account", None)
///         .await?;
///     println!("{}", resource.data.data);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FullnodeClient {
    config: AptosConfig,
    client: Client,
}

impl FullnodeClient {
    /// Creates a new fullnode client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build (e.g., invalid TLS configuration).
    pub fn new(config: AptosConfig) -> AptosResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(AptosError::Http)?;

        Ok(Self { config, client })
    }

    /// Creates a fullnode client around an existing HTTP client.
    pub fn from_client(config: AptosConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Returns the base URL for the fullnode.
    pub fn base_url(&self) -> &Url {
        self.config.fullnode_url()
    }

    /// Gets a specific module for an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API returns an error status code,
    /// the response cannot be parsed as JSON, or the module is not found (404).
    pub async fn get_account_module(
        &self,
        address: &str,
        module_name: &str,
    ) -> AptosResult<AptosResponse<MoveModule>> {
        let url = self.build_url(&format!("accounts/{address}/module/{module_name}"));
        self.get_json(url).await
    }

    /// Gets the ABI of a module.
    ///
    /// # Errors
    ///
    /// Returns [`AptosError::NotFound`] if the module carries no ABI, and the
    /// errors of [`get_account_module`](Self::get_account_module) otherwise.
    pub async fn get_module_abi(
        &self,
        address: &str,
        module_name: &str,
    ) -> AptosResult<MoveModuleABI> {
        self.get_account_module(address, module_name)
            .await?
            .into_inner()
            .abi
            .ok_or_else(|| {
                AptosError::NotFound(format!("ABI of module {address}::{module_name}"))
            })
    }

    /// Gets a specific resource for an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API returns an error status code,
    /// the response cannot be parsed as JSON, or the resource is not found (404).
    pub async fn get_account_resource(
        &self,
        address: &str,
        resource_type: &str,
        ledger_version: Option<u64>,
    ) -> AptosResult<AptosResponse<Resource>> {
        let mut url = self.build_url(&format!(
            "accounts/{}/resource/{}",
            address,
            urlencoding::encode(resource_type)
        ));
        if let Some(version) = ledger_version {
            url.query_pairs_mut()
                .append_pair("ledger_version", &version.to_string());
        }
        self.get_json(url).await
    }

    /// Gets events by event handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API returns an error status code,
    /// or the response cannot be parsed as JSON.
    pub async fn get_events_by_event_handle(
        &self,
        address: &str,
        event_handle_struct: &str,
        field_name: &str,
        start: Option<u64>,
        limit: Option<u16>,
    ) -> AptosResult<AptosResponse<Vec<Event>>> {
        let mut url = self.build_url(&format!(
            "accounts/{}/events/{}/{}",
            address,
            urlencoding::encode(event_handle_struct),
            field_name
        ));

        {
            let mut query = url.query_pairs_mut();
            if let Some(start) = start {
                query.append_pair("start", &start.to_string());
            }
            if let Some(limit) = limit {
                query.append_pair("limit", &limit.to_string());
            }
        }

        self.get_json(url).await
    }

    // === Helper Methods ===

    fn build_url(&self, path: &str) -> Url {
        let mut url = self.config.fullnode_url().clone();
        if !path.is_empty() {
            // Ensure base path ends with /
            if !url.path().ends_with('/') {
                url.set_path(&format!("{}/", url.path()));
            }
            // `path` is already percent-encoded where needed
            url.set_path(&format!("{}{}", url.path(), path));
        }
        url
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(
        &self,
        url: Url,
    ) -> AptosResult<AptosResponse<T>> {
        debug!(url = %url, "GET");
        let mut request = self.client.get(url).header(ACCEPT, JSON_CONTENT_TYPE);
        if let Some(api_key) = self.config.api_key() {
            request = request.bearer_auth(api_key);
        }
        let response = request.send().await?;
        Self::handle_response(response, self.config.max_response_size()).await
    }

    async fn handle_response<T: for<'de> serde::Deserialize<'de>>(
        response: reqwest::Response,
        max_response_size: usize,
    ) -> AptosResult<AptosResponse<T>> {
        let status = response.status();

        let header_u64 = |name: &str| -> Option<u64> {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
        };
        let ledger_version = header_u64("x-aptos-ledger-version");
        let ledger_timestamp = header_u64("x-aptos-ledger-timestamp");
        let epoch = header_u64("x-aptos-epoch");
        let block_height = header_u64("x-aptos-block-height");
        let oldest_ledger_version = header_u64("x-aptos-oldest-ledger-version");
        let cursor = response
            .headers()
            .get("x-aptos-cursor")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        if status.is_success() {
            let bytes = read_response_bounded(response, max_response_size).await?;
            let data: T = serde_json::from_slice(&bytes)?;
            Ok(AptosResponse {
                data,
                ledger_version,
                ledger_timestamp,
                epoch,
                block_height,
                oldest_ledger_version,
                cursor,
            })
        } else {
            let bytes = read_response_bounded(response, max_response_size)
                .await
                .unwrap_or_default();
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap_or_default();
            let message = body
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            let error_code = body
                .get("error_code")
                .and_then(|v| v.as_str())
                .map(ToString::to_string);
            let vm_error_code = body
                .get("vm_error_code")
                .and_then(serde_json::Value::as_u64);

            debug!(status = status.as_u16(), message = %message, "API error");
            Err(AptosError::api_with_details(
                status.as_u16(),
                message,
                error_code,
                vm_error_code,
            ))
        }
    }
}

#[async_trait]
impl AccountResourceReader for FullnodeClient {
    async fn get_account_resource(
        &self,
        account: &str,
        resource_type: &str,
        query: Option<ResourceQuery>,
    ) -> AptosResult<Resource> {
        let ledger_version = query.and_then(|q| q.ledger_version);
        FullnodeClient::get_account_resource(self, account, resource_type, ledger_version)
            .await
            .map(AptosResponse::into_inner)
    }
}

#[async_trait]
impl EventReader for FullnodeClient {
    async fn get_events_by_event_handle(
        &self,
        account: &str,
        event_handle_struct: &str,
        field_name: &str,
        query: Option<EventQuery>,
    ) -> AptosResult<Vec<Event>> {
        let query = query.unwrap_or_default();
        FullnodeClient::get_events_by_event_handle(
            self,
            account,
            event_handle_struct,
            field_name,
            query.start,
            query.limit,
        )
        .await
        .map(AptosResponse::into_inner)
    }
}

impl SignerOrClient for FullnodeClient {
    fn resource_reader(self: Arc<Self>) -> Option<Arc<dyn AccountResourceReader>> {
        Some(self)
    }

    fn event_reader(self: Arc<Self>) -> Option<Arc<dyn EventReader>> {
        Some(self)
    }
}
