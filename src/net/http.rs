//! HTTP pipeline: the single point of egress for all backend calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every outgoing request passes through here so credential injection,
//! the JSON content type, and the response envelope handling stay in
//! one place. The backend wraps most replies in a `{code, msg, data}`
//! envelope, paginated queries in a bare `{total, list}` object, and
//! the Excel export in a raw byte stream; callers only ever see the
//! unwrapped business payload or an [`ApiError`].
//!
//! A `401` means the session expired server-side: the persisted
//! session is cleared and the browser is sent to the login route
//! before the rejection reaches the caller, so error-handling code
//! never observes a half-valid session.
//!
//! Browser-side (csr): real HTTP calls via `gloo-net`. Native builds
//! get stubs returning a local error, keeping the pure classification
//! logic testable off-browser.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde_json::Value;

#[cfg(feature = "csr")]
use crate::state::session;
#[cfg(feature = "csr")]
use crate::util::notify;

#[cfg(any(test, feature = "csr"))]
const DEFAULT_BASE_URL: &str = "/api";
#[cfg(feature = "csr")]
const REQUEST_TIMEOUT_MS: u64 = 10_000;
#[cfg(feature = "csr")]
const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// Success value of the coded envelope's `code` field.
#[cfg(any(test, feature = "csr"))]
const SUCCESS_CODE: i64 = 200;

/// Paths that must never carry a credential header, stale or not.
#[cfg(any(test, feature = "csr"))]
const AUTH_FREE_PATHS: &[&str] =
    &["/auth/login", "/auth/register/student", "/auth/register/teacher"];

/// Fallback message for a coded envelope without a usable `msg`. The
/// notification sink suppresses exactly this generic text.
pub(crate) const BUSINESS_FALLBACK_MSG: &str = "operation failed";

#[cfg(any(test, feature = "csr"))]
const SESSION_EXPIRED_MSG: &str = "session expired, please sign in again";
#[cfg(any(test, feature = "csr"))]
const FORBIDDEN_MSG: &str = "you do not have permission to access this resource";
#[cfg(any(test, feature = "csr"))]
const NOT_FOUND_MSG: &str = "requested resource was not found";
#[cfg(any(test, feature = "csr"))]
const TIMEOUT_MSG: &str = "request timed out, please retry";
#[cfg(any(test, feature = "csr"))]
const SERVER_ERROR_MSG: &str = "server error, please try again later";
#[cfg(not(feature = "csr"))]
const OFF_BROWSER_MSG: &str = "not available outside the browser";

/// Everything a backend call can fail with.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never left the process (bad parameters or config).
    #[error("{0}")]
    RequestConstruction(String),
    /// `401`: the session is expired or missing; it has already been
    /// cleared by the time the caller sees this.
    #[error("{0}")]
    Unauthorized(String),
    /// `403`: authenticated but not allowed to touch this resource.
    #[error("{0}")]
    Forbidden(String),
    /// `404`: the resource does not exist.
    #[error("{0}")]
    NotFound(String),
    /// No response within the configured deadline.
    #[error("{0}")]
    Timeout(String),
    /// Transport failure or any unclassified HTTP status.
    #[error("{message}")]
    Server { message: String, status: Option<u16> },
    /// Coded envelope carrying a non-success business code.
    #[error("{0}")]
    Business(String),
}

impl ApiError {
    /// Human-readable message for the notification sink and callers.
    pub fn message(&self) -> &str {
        match self {
            Self::RequestConstruction(msg)
            | Self::Unauthorized(msg)
            | Self::Forbidden(msg)
            | Self::NotFound(msg)
            | Self::Timeout(msg)
            | Self::Business(msg) => msg,
            Self::Server { message, .. } => message,
        }
    }

    /// HTTP status behind this error, where one applies.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Server { status, .. } => *status,
            Self::RequestConstruction(_) | Self::Timeout(_) | Self::Business(_) => None,
        }
    }
}

/// Backend root path, resolved once from the build environment with a
/// fixed fallback.
#[cfg(any(test, feature = "csr"))]
fn base_url() -> &'static str {
    base_url_from(option_env!("SCOREHUB_API_BASE_URL"))
}

#[cfg(any(test, feature = "csr"))]
fn base_url_from(configured: Option<&'static str>) -> &'static str {
    match configured {
        Some(value) if !value.trim().is_empty() => value.trim(),
        _ => DEFAULT_BASE_URL,
    }
}

#[cfg(any(test, feature = "csr"))]
fn join_url(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

#[cfg(any(test, feature = "csr"))]
fn is_auth_free(path: &str) -> bool {
    AUTH_FREE_PATHS.contains(&path)
}

/// Value of the `Authorization` header for `path`, or `None` when the
/// path is auth-free or no usable token is stored.
#[cfg(any(test, feature = "csr"))]
fn auth_header_for(path: &str, token: &str) -> Option<String> {
    if is_auth_free(path) {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(format!("Bearer {token}"))
    }
}

/// Classify a 2xx JSON body into one of the three envelope variants.
///
/// Priority order: bare list envelope (returned verbatim), coded
/// envelope (unwrapped or rejected), anything else opaque.
#[cfg(any(test, feature = "csr"))]
fn classify_body(body: Value) -> Result<Value, ApiError> {
    match body {
        Value::Object(mut map) => {
            if map.contains_key("total") || map.contains_key("list") {
                return Ok(Value::Object(map));
            }
            match map.get("code").and_then(Value::as_i64) {
                Some(code) if code == SUCCESS_CODE => {
                    if map.contains_key("data") {
                        Ok(map.remove("data").unwrap_or(Value::Null))
                    } else {
                        Ok(Value::Object(map))
                    }
                }
                Some(_) => {
                    let message = map
                        .get("msg")
                        .and_then(Value::as_str)
                        .unwrap_or(BUSINESS_FALLBACK_MSG)
                        .to_owned();
                    Err(ApiError::Business(message))
                }
                None => Ok(Value::Object(map)),
            }
        }
        other => Ok(other),
    }
}

/// Map a non-2xx status to the error taxonomy, preferring the server's
/// own message when one was recoverable from the body.
#[cfg(any(test, feature = "csr"))]
fn error_for_status(status: u16, server_msg: Option<String>) -> ApiError {
    match status {
        401 => ApiError::Unauthorized(server_msg.unwrap_or_else(|| SESSION_EXPIRED_MSG.to_owned())),
        403 => ApiError::Forbidden(server_msg.unwrap_or_else(|| FORBIDDEN_MSG.to_owned())),
        404 => ApiError::NotFound(server_msg.unwrap_or_else(|| NOT_FOUND_MSG.to_owned())),
        _ => ApiError::Server {
            message: server_msg.unwrap_or_else(|| SERVER_ERROR_MSG.to_owned()),
            status: Some(status),
        },
    }
}

/// Pull the `msg` field out of an error body, if it is JSON at all.
#[cfg(any(test, feature = "csr"))]
fn extract_msg(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("msg").and_then(Value::as_str).map(str::to_owned))
}

/// GET `path` with query pairs; JSON outcome.
pub async fn get(path: &str, query: &[(String, String)]) -> Result<Value, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = join_url(base_url(), path);
        log::debug!("GET {url}");
        let builder = apply_common(gloo_net::http::Request::get(&url), path)
            .query(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        let response = dispatch(builder.send()).await?;
        read_json_outcome(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, query);
        Err(ApiError::RequestConstruction(OFF_BROWSER_MSG.to_owned()))
    }
}

/// POST `path` with a JSON body; JSON outcome.
pub async fn post(path: &str, body: &Value) -> Result<Value, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = join_url(base_url(), path);
        log::debug!("POST {url}");
        let payload =
            serde_json::to_string(body).map_err(|e| construction_error(e.to_string()))?;
        let request = apply_common(gloo_net::http::Request::post(&url), path)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .body(payload)
            .map_err(|e| construction_error(e.to_string()))?;
        let response = dispatch(request.send()).await?;
        read_json_outcome(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, body);
        Err(ApiError::RequestConstruction(OFF_BROWSER_MSG.to_owned()))
    }
}

/// DELETE `path`; JSON outcome.
pub async fn delete(path: &str) -> Result<Value, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = join_url(base_url(), path);
        log::debug!("DELETE {url}");
        let builder = apply_common(gloo_net::http::Request::delete(&url), path);
        let response = dispatch(builder.send()).await?;
        read_json_outcome(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(ApiError::RequestConstruction(OFF_BROWSER_MSG.to_owned()))
    }
}

/// GET `path` returning the raw response bytes (Excel export). The
/// body is never JSON-parsed.
pub async fn get_bytes(path: &str, query: &[(String, String)]) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = join_url(base_url(), path);
        log::debug!("GET {url} (binary)");
        let builder = apply_common(gloo_net::http::Request::get(&url), path)
            .query(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        let response = dispatch(builder.send()).await?;
        if response.ok() {
            response.binary().await.map_err(|e| transport_error(&e))
        } else {
            let status = response.status();
            Err(fail(status, response.text().await.ok()))
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, query);
        Err(ApiError::RequestConstruction(OFF_BROWSER_MSG.to_owned()))
    }
}

/// POST a multipart form (file upload). The browser supplies the
/// boundary-aware content type, so none is forced here.
#[cfg(feature = "csr")]
pub async fn post_multipart(path: &str, form: web_sys::FormData) -> Result<Value, ApiError> {
    let url = join_url(base_url(), path);
    log::debug!("POST {url} (multipart)");
    let request = apply_common(gloo_net::http::Request::post(&url), path)
        .body(form)
        .map_err(|e| construction_error(e.to_string()))?;
    let response = dispatch(request.send()).await?;
    read_json_outcome(response).await
}

/// Shared request-phase setup: credentials mode and, outside the
/// auth-free list, the bearer header from a fresh session read.
#[cfg(feature = "csr")]
fn apply_common(
    builder: gloo_net::http::RequestBuilder,
    path: &str,
) -> gloo_net::http::RequestBuilder {
    let mut builder = builder.credentials(web_sys::RequestCredentials::Include);
    if let Some(header) = auth_header_for(path, &session::load().token) {
        builder = builder.header("Authorization", &header);
    }
    builder
}

/// Race the send against the fixed deadline.
#[cfg(feature = "csr")]
async fn dispatch<F>(send: F) -> Result<gloo_net::http::Response, ApiError>
where
    F: std::future::Future<Output = Result<gloo_net::http::Response, gloo_net::Error>>,
{
    use futures::future::{Either, select};

    let deadline =
        gloo_timers::future::sleep(std::time::Duration::from_millis(REQUEST_TIMEOUT_MS));
    match select(Box::pin(send), Box::pin(deadline)).await {
        Either::Left((Ok(response), _)) => Ok(response),
        Either::Left((Err(err), _)) => Err(transport_error(&err)),
        Either::Right(((), _)) => Err(timeout_error()),
    }
}

/// Classify a settled response into the caller-visible outcome.
#[cfg(feature = "csr")]
async fn read_json_outcome(response: gloo_net::http::Response) -> Result<Value, ApiError> {
    if response.ok() {
        let text = response.text().await.map_err(|e| transport_error(&e))?;
        log::debug!("response {} ({} bytes)", response.status(), text.len());
        let outcome = match serde_json::from_str::<Value>(&text) {
            Ok(value) => classify_body(value),
            Err(_) => Ok(Value::String(text)),
        };
        if let Err(err) = &outcome {
            notify::error(err.message());
        }
        outcome
    } else {
        let status = response.status();
        Err(fail(status, response.text().await.ok()))
    }
}

/// Build, announce, and act on a non-2xx failure. For `401` the
/// session purge and the forced navigation to the login route happen
/// before the error value is handed back.
#[cfg(feature = "csr")]
fn fail(status: u16, body: Option<String>) -> ApiError {
    let err = error_for_status(status, body.as_deref().and_then(extract_msg));
    notify::error(err.message());
    if matches!(err, ApiError::Unauthorized(_)) {
        expire_session();
    }
    err
}

/// Clear the whole persisted session, then force the browser to the
/// login route.
#[cfg(feature = "csr")]
fn expire_session() {
    session::clear();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(crate::routes::LOGIN_PATH);
    }
}

#[cfg(feature = "csr")]
fn construction_error(detail: String) -> ApiError {
    leptos::logging::error!("request construction failed: {detail}");
    notify::error("request could not be constructed, please check the parameters");
    ApiError::RequestConstruction(detail)
}

#[cfg(feature = "csr")]
fn transport_error(err: &gloo_net::Error) -> ApiError {
    let raw = err.to_string();
    let message = if raw.trim().is_empty() { SERVER_ERROR_MSG.to_owned() } else { raw };
    notify::error(&message);
    ApiError::Server { message, status: None }
}

#[cfg(feature = "csr")]
fn timeout_error() -> ApiError {
    notify::error(TIMEOUT_MSG);
    ApiError::Timeout(TIMEOUT_MSG.to_owned())
}
