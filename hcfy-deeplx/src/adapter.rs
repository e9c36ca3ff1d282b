//! Conversion between the Hcfy and DeepLX dialects
//!
//! Both conversions are pure. The only subtle part is which `destination` entry
//! is treated as the target language:
//!
//! - outbound, the target code always comes from `destination[0]`;
//! - inbound, the `to` field comes from `destination[1]` when two entries are
//!   present and the first is not Simplified Chinese, otherwise `destination[0]`.
//!
//! Hcfy sends `[detected source, target]` when it already knows the source
//! language, so the two rules disagree for requests like `["英语", "俄语"]`.
//! Clients depend on the current behaviour; keep the rules as they are.

use tracing::debug;

use crate::data::{AUTO_DETECT, BackendRequest, BackendResponse, ClientRequest, ClientResponse};
use crate::error::{HcfyError, HcfyResult};
use crate::language::{LanguageRegistry, SIMPLIFIED_CHINESE};

/// Decode an inbound body into a [`ClientRequest`]
///
/// Rejects bodies that are not JSON, lack `destination`, or carry an empty
/// `destination` list.
pub fn decode_client_request(body: &[u8]) -> HcfyResult<ClientRequest> {
    let request: ClientRequest = serde_json::from_slice(body)
        .map_err(|e| HcfyError::MalformedRequestBody(e.to_string()))?;

    if request.destination.is_empty() {
        return Err(HcfyError::MalformedRequestBody(
            "destination must contain at least one language".to_string(),
        ));
    }

    Ok(request)
}

/// Display name whose code is sent to the backend as `target_lang`
pub fn request_target(destination: &[String]) -> &str {
    // The two-entry case and the single-entry case both pick index 0.
    destination.first().map(String::as_str).unwrap_or_default()
}

/// Display name echoed back to the client as `to`
pub fn response_target(destination: &[String]) -> &str {
    match destination {
        [first, second, ..] if first != SIMPLIFIED_CHINESE => second.as_str(),
        [first, ..] => first.as_str(),
        [] => "",
    }
}

/// Build the DeepLX request for a client request
///
/// `source_lang` is always [`AUTO_DETECT`]; the client's `source` is never
/// forwarded. An unknown display name produces an empty `target_lang`.
pub fn to_backend_request(registry: &LanguageRegistry, request: &ClientRequest) -> BackendRequest {
    let display_name = request_target(&request.destination);
    let target_lang = registry
        .code_for(display_name)
        .map(|code| code.as_str().to_string())
        .unwrap_or_default();

    debug!(display_name, target_lang = %target_lang, "resolved outbound target");

    BackendRequest {
        text: request.text.clone(),
        source_lang: AUTO_DETECT.to_string(),
        target_lang,
    }
}

/// Build the client response for a DeepLX reply
///
/// A failure reply is not an error here: its `msg` becomes the single result
/// line so the extension shows it in place of a translation.
pub fn to_client_response(response: BackendResponse, request: &ClientRequest) -> ClientResponse {
    let result = if response.is_success() {
        response.data.split('\n').map(str::to_owned).collect()
    } else {
        vec![response.msg]
    };

    ClientResponse {
        text: request.text.clone(),
        from: request.source.clone(),
        to: response_target(&request.destination).to_string(),
        result,
    }
}
