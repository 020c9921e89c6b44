//! Network configuration for the bundled fullnode reader.
//!
//! Generated module clients do not need any configuration of their own; this
//! only describes how [`FullnodeClient`](crate::api::FullnodeClient) reaches
//! a network.

use crate::error::{AptosError, AptosResult};
use std::time::Duration;
use url::Url;

/// Default limit on response bodies read by the fullnode reader (10 MiB).
pub const DEFAULT_MAX_RESPONSE_SIZE: usize = 10 * 1024 * 1024;

/// Reads a response body, aborting once it exceeds `max_size` bytes.
///
/// A `Content-Length` above the limit is rejected before any body is read.
/// Otherwise the body is read chunk by chunk, so chunked responses without a
/// length are bounded too.
///
/// # Errors
///
/// Returns [`AptosError::Api`] with error code `RESPONSE_TOO_LARGE` if the
/// body exceeds `max_size` bytes, or [`AptosError::Http`] if reading fails.
pub async fn read_response_bounded(
    mut response: reqwest::Response,
    max_size: usize,
) -> AptosResult<Vec<u8>> {
    let status_code = response.status().as_u16();
    let too_large = |message: String| AptosError::Api {
        status_code,
        message,
        error_code: Some("RESPONSE_TOO_LARGE".into()),
        vm_error_code: None,
    };

    if let Some(content_length) = response.content_length() {
        if content_length > max_size as u64 {
            return Err(too_large(format!(
                "response too large: Content-Length {content_length} bytes exceeds limit of {max_size} bytes"
            )));
        }
    }

    let mut body = Vec::with_capacity(std::cmp::min(max_size, 1024 * 1024));
    while let Some(chunk) = response.chunk().await? {
        if body.len() + chunk.len() > max_size {
            return Err(too_large(format!(
                "response too large: exceeded limit of {max_size} bytes during streaming"
            )));
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

/// Configuration for the fullnode reader.
///
/// # Example
///
/// ```rust
/// use aptos_module_client::AptosConfig;
///
/// let config = AptosConfig::testnet()
///     .with_timeout(std::time::Duration::from_secs(30))
///     .with_api_key("my-key");
/// ```
#[derive(Debug, Clone)]
pub struct AptosConfig {
    /// The network to connect to
    pub(crate) network: Network,
    /// REST API URL (fullnode)
    pub(crate) fullnode_url: Url,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Optional API key for authenticated access
    pub(crate) api_key: Option<String>,
    /// Largest response body accepted, in bytes
    pub(crate) max_response_size: usize,
}

/// Known Aptos networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Aptos mainnet
    Mainnet,
    /// Aptos testnet
    Testnet,
    /// Aptos devnet
    Devnet,
    /// Local development network
    Local,
    /// Custom network
    Custom,
}

impl Network {
    /// Returns the network name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
            Network::Local => "local",
            Network::Custom => "custom",
        }
    }
}

impl Default for AptosConfig {
    fn default() -> Self {
        Self::devnet()
    }
}

impl AptosConfig {
    /// Creates a configuration for Aptos mainnet.
    pub fn mainnet() -> Self {
        Self::preset(
            Network::Mainnet,
            Url::parse("https://fullnode.mainnet.aptoslabs.com/v1").expect("valid mainnet URL"),
            Duration::from_secs(30),
        )
    }

    /// Creates a configuration for Aptos testnet.
    pub fn testnet() -> Self {
        Self::preset(
            Network::Testnet,
            Url::parse("https://fullnode.testnet.aptoslabs.com/v1").expect("valid testnet URL"),
            Duration::from_secs(30),
        )
    }

    /// Creates a configuration for Aptos devnet.
    pub fn devnet() -> Self {
        Self::preset(
            Network::Devnet,
            Url::parse("https://fullnode.devnet.aptoslabs.com/v1").expect("valid devnet URL"),
            Duration::from_secs(30),
        )
    }

    /// Creates a configuration for a local development network.
    ///
    /// This assumes the REST API runs on the default port 8080.
    pub fn local() -> Self {
        Self::preset(
            Network::Local,
            Url::parse("http://127.0.0.1:8080/v1").expect("valid local URL"),
            Duration::from_secs(10),
        )
    }

    /// Creates a custom configuration with the specified fullnode URL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aptos_module_client::AptosConfig;
    ///
    /// let config = AptosConfig::custom("https://my-node.example.com/v1").unwrap();
    /// ```
    pub fn custom(fullnode_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::preset(
            Network::Custom,
            Url::parse(fullnode_url)?,
            Duration::from_secs(30),
        ))
    }

    fn preset(network: Network, fullnode_url: Url, timeout: Duration) -> Self {
        Self {
            network,
            fullnode_url,
            timeout,
            api_key: None,
            max_response_size: DEFAULT_MAX_RESPONSE_SIZE,
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets an API key, sent as a bearer token.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the largest response body accepted, in bytes.
    pub fn with_max_response_size(mut self, max_response_size: usize) -> Self {
        self.max_response_size = max_response_size;
        self
    }

    /// Returns the network.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Returns the fullnode URL.
    pub fn fullnode_url(&self) -> &Url {
        &self.fullnode_url
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the API key, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Returns the response body size limit, in bytes.
    pub fn max_response_size(&self) -> usize {
        self.max_response_size
    }
}
