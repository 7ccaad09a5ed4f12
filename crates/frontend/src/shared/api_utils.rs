//! API utilities for talking to the remote SmartShop backend.
//!
//! All data operations are delegated to the HTTP API under `/api`; the
//! dev server proxies that prefix to the backend. Auth is session-cookie
//! based, so every request is sent with credentials included.
//!
//! Helpers return `Result<T, String>` with a message ready for the
//! notification queue; a 4xx/5xx body with a `message` field wins over
//! the bare status code so server-side validation errors surface as-is.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use web_sys::RequestCredentials;

/// Build a full API URL from a path, e.g. `api_url("/products/3")`.
pub fn api_url(path: &str) -> String {
    format!("/api{}", path)
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    if let Ok(body) = response.text().await {
        if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(&body) {
            if let Some(message) = parsed.message {
                return message;
            }
        }
    }
    format!("HTTP {}", status)
}

async fn into_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

async fn expect_ok(response: Response) -> Result<(), String> {
    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    into_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    into_json(response).await
}

/// POST without a payload or a useful response body (e.g. logout).
pub async fn post_empty(path: &str) -> Result<(), String> {
    let response = Request::post(&api_url(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    expect_ok(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = Request::put(&api_url(path))
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    into_json(response).await
}

/// PATCH without a payload (state transitions: confirm, cancel,
/// deactivate).
pub async fn patch_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::patch(&api_url(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    into_json(response).await
}

pub async fn patch_json_with<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = Request::patch(&api_url(path))
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    into_json(response).await
}

pub async fn delete_json(path: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    expect_ok(response).await
}
