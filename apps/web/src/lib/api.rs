//! HTTP helpers for the licensing API with consistent timeouts and error
//! handling. Feature clients use these to avoid duplicating request setup and
//! to enforce a predictable timeout policy.
//!
//! A process-wide default bearer header mirrors the stored credential so
//! management calls carry it without threading the token through every call
//! site. The helpers never persist token material themselves.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::to_string;
use std::cell::RefCell;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

thread_local! {
    // wasm is single-threaded, so a thread-local is effectively process-wide.
    static DEFAULT_BEARER: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Envelope the management endpoints wrap their payloads in.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Install or clear the default bearer credential attached to outbound
/// requests.
pub fn set_bearer(credential: Option<&str>) {
    DEFAULT_BEARER.with(|bearer| {
        *bearer.borrow_mut() = credential.map(str::to_string);
    });
}

fn bearer_header() -> Option<String> {
    DEFAULT_BEARER.with(|bearer| {
        bearer
            .borrow()
            .as_ref()
            .map(|token| format!("Bearer {token}"))
    })
}

/// Fetches JSON from the API, attaching the default bearer header when one is
/// installed.
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, AppError> {
    let url = build_url(path);
    let query: Vec<(String, String)> = query
        .iter()
        .map(|(name, value)| ((*name).to_string(), value.clone()))
        .collect();
    let response = send_with_timeout(move |signal| {
        let mut builder = Request::get(&url)
            .query(query.iter().map(|(name, value)| (name.as_str(), value.as_str())))
            .abort_signal(Some(signal));
        if let Some(authorization) = bearer_header() {
            builder = builder.header("Authorization", &authorization);
        }
        builder
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts JSON and parses a JSON response, attaching the default bearer header
/// when one is installed.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        let mut builder = Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal));
        if let Some(authorization) = bearer_header() {
            builder = builder.header("Authorization", &authorization);
        }
        builder
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts JSON under an explicit bearer token and expects only an
/// acknowledgement. Used while a flow holds an intermediate token that is not
/// the session credential.
pub async fn post_json_with_bearer<B: Serialize>(
    path: &str,
    body: &B,
    bearer: &str,
) -> Result<(), AppError> {
    let url = build_url(path);
    let authorization = format!("Bearer {bearer}");
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", &authorization)
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    let base = config.api_base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout
/// detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Network("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: sanitize_body(body),
        })
    }
}

/// Handles acknowledgement responses and returns sanitized HTTP errors when
/// needed.
async fn handle_empty_response(response: gloo_net::http::Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: sanitize_body(body),
        })
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and
/// truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
