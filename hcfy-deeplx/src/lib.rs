//! Adapter between the Hcfy translation client dialect and DeepLX
//!
//! Hcfy browser extensions post `{name, text, destination, source}` and expect
//! `{text, from, to, result}` back; DeepLX takes `{text, source_lang, target_lang}`
//! and answers `{code, msg, data}`. This crate holds the pieces needed to sit
//! between them without either side changing:
//!
//! 1. **Language registry** - Chinese display names ⇄ DeepLX codes
//! 2. **Adapter** - pure request/response reshaping
//! 3. **Backends** - the `TranslationBackend` trait, a DeepLX HTTP client and a mock
//! 4. **Config** - environment-sourced settings for the relay
//!
//! # Workflow Example
//!
//! ```ignore
//! use hcfy_deeplx::{DeepLxClient, LanguageRegistry, TranslationBackend, adapter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = LanguageRegistry::new();
//!     let request = adapter::decode_client_request(
//!         br#"{"name":"deeplx","text":"Hello","destination":["中文(简体)"],"source":"auto"}"#,
//!     )?;
//!
//!     let backend = DeepLxClient::new("http://127.0.0.1:1188/translate", None)?;
//!     let reply = backend
//!         .translate(&adapter::to_backend_request(&registry, &request))
//!         .await?;
//!
//!     let response = adapter::to_client_response(reply, &request);
//!     println!("{}", serde_json::to_string(&response)?);
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod config;
pub mod data;
pub mod deeplx;
pub mod error;
pub mod language;
pub mod mock;
pub mod translator;

pub use adapter::{decode_client_request, to_backend_request, to_client_response};
pub use config::Config;
pub use data::{BackendRequest, BackendResponse, ClientRequest, ClientResponse};
pub use deeplx::DeepLxClient;
pub use error::{HcfyError, HcfyResult};
pub use language::{LanguageCode, LanguageRegistry, ParseLanguageCodeError, SIMPLIFIED_CHINESE};
pub use mock::{MockBackend, MockMode};
pub use translator::TranslationBackend;
