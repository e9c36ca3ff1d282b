//! Mock backend for testing
//!
//! A deterministic, network-free [`TranslationBackend`] that also counts how
//! many times it was called, so relay tests can assert that rejected requests
//! never reach the backend.
//!
//! # Example
//!
//! ```ignore
//! use hcfy_deeplx::{MockBackend, MockMode, TranslationBackend};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockBackend::new(MockMode::Suffix);
//!     let reply = mock.translate(&request).await.unwrap();
//!     assert_eq!(reply.data, "hello_ZH");
//!     assert_eq!(mock.calls(), 1);
//! }
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::data::{BackendRequest, BackendResponse};
use crate::error::{HcfyError, HcfyResult};
use crate::translator::TranslationBackend;

/// Behaviours the mock can simulate
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Successful reply with the target code appended: "hello" → "hello_ZH"
    Suffix,

    /// Always answer with this reply
    Reply(BackendResponse),

    /// Fail as if the endpoint were unreachable
    TransportFailure(String),

    /// Fail as if the endpoint answered with something that is not DeepLX JSON
    DecodeFailure(String),
}

#[derive(Debug)]
pub struct MockBackend {
    mode: MockMode,
    delay_ms: u64,
    calls: AtomicUsize,
}

impl MockBackend {
    pub fn new(mode: MockMode) -> Self {
        Self::with_delay(mode, 0)
    }

    /// Create a mock that sleeps `delay_ms` before answering
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            mode,
            delay_ms,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `translate` calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    async fn translate(&self, request: &BackendRequest) -> HcfyResult<BackendResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        match &self.mode {
            MockMode::Suffix => Ok(BackendResponse {
                source_lang: Some("auto".to_string()),
                target_lang: Some(request.target_lang.clone()),
                ..BackendResponse::success(format!("{}_{}", request.text, request.target_lang))
            }),
            MockMode::Reply(reply) => Ok(reply.clone()),
            MockMode::TransportFailure(msg) => Err(HcfyError::BackendTransport(msg.clone())),
            MockMode::DecodeFailure(msg) => Err(HcfyError::BackendDecode(msg.clone())),
        }
    }

    fn provider_name(&self) -> &str {
        "Mock Backend"
    }
}
