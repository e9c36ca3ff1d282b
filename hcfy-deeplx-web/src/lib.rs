//! HTTP relay between Hcfy clients and a DeepLX backend
//!
//! One pass per request: check the method, decode the body, check the shared
//! name token, convert, call the backend, convert back, answer. Any step can
//! end the request early with a short plain-text error (see [`RelayError`]).

use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::any,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use hcfy_deeplx::{
    HcfyError, LanguageRegistry, TranslationBackend, decode_client_request, to_backend_request,
    to_client_response,
};

#[cfg(test)]
mod integration_tests;

/// Liveness route, answered with `Hello World`
pub const HELLO_ROUTE: &str = "/hello";

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<LanguageRegistry>,
    pub backend: Arc<dyn TranslationBackend>,
    /// Token clients must send as `name`; `None` accepts anyone
    pub name: Option<Arc<str>>,
}

impl AppState {
    pub fn new(
        registry: Arc<LanguageRegistry>,
        backend: Arc<dyn TranslationBackend>,
        name: Option<String>,
    ) -> Self {
        Self {
            registry,
            backend,
            name: name.map(Arc::from),
        }
    }
}

/// Request-scoped failure, rendered as a status code plus a short message
#[derive(Debug)]
pub struct RelayError(pub HcfyError);

impl From<HcfyError> for RelayError {
    fn from(err: HcfyError) -> Self {
        RelayError(err)
    }
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            HcfyError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            HcfyError::MalformedRequestBody(_) | HcfyError::AuthenticationMismatch(_) => {
                StatusCode::BAD_REQUEST
            }
            HcfyError::BackendTransport(_) | HcfyError::BackendDecode(_) => StatusCode::BAD_GATEWAY,
            HcfyError::ResponseEncode(_) | HcfyError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(&self) -> &'static str {
        match &self.0 {
            HcfyError::MethodNotAllowed(_) => "Method not allowed",
            HcfyError::MalformedRequestBody(_) => "Error decoding request",
            HcfyError::AuthenticationMismatch(_) => "Wrong name",
            HcfyError::BackendTransport(_) => "Error calling translation service",
            HcfyError::BackendDecode(_) => "Error decoding response",
            HcfyError::ResponseEncode(_) | HcfyError::Config(_) => "Error processing response",
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(%status, error = %self.0, "request failed");
        } else {
            warn!(%status, error = %self.0, "request rejected");
        }
        (status, self.message()).into_response()
    }
}

/// Build the relay router with the relay mounted on `route`
pub fn router(state: AppState, route: &str) -> Router {
    let mut app = Router::new().route(route, any(relay));
    if route != HELLO_ROUTE {
        app = app.route(HELLO_ROUTE, any(hello));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn hello(method: Method) -> Result<&'static str, RelayError> {
    if method != Method::GET {
        return Err(HcfyError::MethodNotAllowed(method.to_string()).into());
    }
    Ok("Hello World")
}

async fn relay(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Response, RelayError> {
    if method != Method::POST {
        return Err(HcfyError::MethodNotAllowed(method.to_string()).into());
    }

    let request = decode_client_request(&body)?;

    if let Some(expected) = &state.name {
        if request.name != **expected {
            return Err(HcfyError::AuthenticationMismatch(request.name).into());
        }
    }

    let backend_request = to_backend_request(&state.registry, &request);
    if backend_request.target_lang.is_empty() {
        warn!(destination = ?request.destination, "no backend code for destination");
    }
    info!(
        target_lang = %backend_request.target_lang,
        bytes = request.text.len(),
        provider = state.backend.provider_name(),
        "relaying translation"
    );

    let reply = state.backend.translate(&backend_request).await?;
    if !reply.is_success() {
        warn!(code = reply.code, msg = %reply.msg, "backend reported a failure");
    }

    let response = to_client_response(reply, &request);
    let body = serde_json::to_vec(&response)
        .map_err(|e| HcfyError::ResponseEncode(e.to_string()))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
