//! Wire types for both sides of the relay
//!
//! The Hcfy browser extension posts a [`ClientRequest`] and expects a
//! [`ClientResponse`]; DeepLX takes a [`BackendRequest`] and answers with a
//! [`BackendResponse`]. Field names follow each dialect's JSON exactly.

use serde::{Deserialize, Serialize};

/// Source language value DeepLX treats as "detect it yourself"
pub const AUTO_DETECT: &str = "auto";

/// DeepLX `code` value for a successful translation
pub const BACKEND_SUCCESS: i32 = 200;

/// Request body sent by an Hcfy client
///
/// ```json
/// { "name": "deeplx", "text": "Hello", "destination": ["中文(简体)", "英语"], "source": "auto" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRequest {
    /// Caller identity token, compared against the configured name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
    /// One or two display names; see [`crate::adapter`] for how they are read
    pub destination: Vec<String>,
    /// Display name of the source language, or "auto"; echoed back only
    #[serde(default)]
    pub source: String,
}

/// Response body returned to an Hcfy client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientResponse {
    pub text: String,
    pub from: String,
    pub to: String,
    /// Translated text, one entry per line
    pub result: Vec<String>,
}

/// Request body posted to DeepLX
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendRequest {
    pub text: String,
    pub source_lang: String,
    /// Empty when the client's display name is unknown
    pub target_lang: String,
}

/// Reply from DeepLX
///
/// Every field is optional on the wire. A missing `code` decodes as 0, which is
/// treated like any other failure code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendResponse {
    pub code: i32,
    pub msg: String,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_lang: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<String>,
}

impl BackendResponse {
    pub fn is_success(&self) -> bool {
        self.code == BACKEND_SUCCESS
    }

    /// A successful reply carrying `data`
    pub fn success(data: impl Into<String>) -> Self {
        Self {
            code: BACKEND_SUCCESS,
            data: data.into(),
            ..Self::default()
        }
    }

    /// A failure reply carrying `msg`
    pub fn failure(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            ..Self::default()
        }
    }
}
