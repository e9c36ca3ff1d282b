//! DeepLX HTTP backend
//!
//! Posts [`BackendRequest`] JSON to a DeepLX endpoint such as
//! `http://127.0.0.1:1188/translate` and decodes the reply.
//!
//! DeepLX reports translation failures inside the body (`{"code":503,"msg":...}`),
//! often with a matching HTTP status, so the body is decoded whatever the status
//! line says. Only an unreachable endpoint or an undecodable body is an error.
//!
//! # Example
//!
//! ```ignore
//! use hcfy_deeplx::{BackendRequest, DeepLxClient, TranslationBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DeepLxClient::new("http://127.0.0.1:1188/translate", None)?;
//!     let reply = client
//!         .translate(&BackendRequest {
//!             text: "Hello".to_string(),
//!             source_lang: "auto".to_string(),
//!             target_lang: "ZH".to_string(),
//!         })
//!         .await?;
//!     println!("{}", reply.data);
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::Config;
use crate::data::{BackendRequest, BackendResponse};
use crate::error::{HcfyError, HcfyResult};
use crate::translator::{TranslationBackend, redact_url};

/// DeepLX client over `reqwest`
#[derive(Clone)]
pub struct DeepLxClient {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl DeepLxClient {
    /// Create a client for `endpoint`
    ///
    /// `endpoint` must be an absolute `http` or `https` URL. `timeout` bounds
    /// each call end to end; `None` waits for the backend indefinitely.
    pub fn new(endpoint: impl AsRef<str>, timeout: Option<Duration>) -> HcfyResult<Self> {
        let endpoint = endpoint.as_ref().trim();
        if endpoint.is_empty() {
            return Err(HcfyError::Config("DeepLX endpoint cannot be empty".to_string()));
        }
        let endpoint = reqwest::Url::parse(endpoint)
            .map_err(|e| HcfyError::Config(format!("DeepLX endpoint is not a valid URL: {}", e)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(HcfyError::Config(format!(
                "DeepLX endpoint must use http or https, got {:?}",
                endpoint.scheme()
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| HcfyError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &Config) -> HcfyResult<Self> {
        Self::new(&config.endpoint, config.timeout)
    }

    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }
}

impl std::fmt::Debug for DeepLxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepLxClient")
            .field("endpoint", &redact_url(&self.endpoint))
            .finish()
    }
}

#[async_trait]
impl TranslationBackend for DeepLxClient {
    async fn translate(&self, request: &BackendRequest) -> HcfyResult<BackendResponse> {
        debug!(target_lang = %request.target_lang, bytes = request.text.len(), "calling DeepLX");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| {
                HcfyError::BackendTransport(format!("Failed to read body: {}", e.without_url()))
            })?;

        let reply: BackendResponse = serde_json::from_slice(&body).map_err(|e| {
            HcfyError::BackendDecode(format!(
                "HTTP {} with undecodable body ({}): {}",
                status,
                e,
                String::from_utf8_lossy(&body).chars().take(200).collect::<String>()
            ))
        })?;

        if !status.is_success() {
            warn!(%status, code = reply.code, "DeepLX answered with an error status");
        }
        debug!(code = reply.code, "DeepLX replied");

        Ok(reply)
    }

    fn provider_name(&self) -> &str {
        "DeepLX"
    }
}
