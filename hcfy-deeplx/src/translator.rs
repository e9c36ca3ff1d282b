//! Backend abstraction
//!
//! The relay only needs one operation from a backend: send a [`BackendRequest`]
//! and get a [`BackendResponse`] back. Keeping it behind a trait lets the web
//! crate run against [`crate::DeepLxClient`] in production and
//! [`crate::MockBackend`] in tests.

use async_trait::async_trait;

use crate::data::{BackendRequest, BackendResponse};
use crate::error::HcfyResult;

/// A DeepLX-compatible translation backend
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Perform one translation call
    ///
    /// A reply with a non-200 `code` is still `Ok`; only transport and decode
    /// problems are errors.
    async fn translate(&self, request: &BackendRequest) -> HcfyResult<BackendResponse>;

    /// Name used in logs
    fn provider_name(&self) -> &str;
}

/// Strip the query string, fragment and credentials from a URL before logging it
///
/// Anything that does not parse as a URL is not printed at all.
pub fn redact_endpoint(endpoint: &str) -> String {
    reqwest::Url::parse(endpoint)
        .map(|url| redact_url(&url))
        .unwrap_or_default()
}

pub fn redact_url(url: &reqwest::Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.set_fragment(None);
    // Both fail only for URLs without a host, which carry no credentials
    let _ = url.set_username("");
    let _ = url.set_password(None);
    url.to_string()
}
