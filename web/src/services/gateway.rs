//! Single chokepoint between server functions and the data source. With
//! `ALUMNET_API_URL` set every call proxies to the remote REST backend;
//! without it the seeded mock store answers, which is the local dev default.

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::ApiResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request to backend failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),
}

static HTTP: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

pub fn backend_url() -> Option<String> {
    std::env::var("ALUMNET_API_URL")
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// Human-readable description of the active data source, for startup logs.
pub fn describe_backend() -> String {
    match backend_url() {
        Some(url) => format!("remote backend at {url}"),
        None => "built-in mock dataset".to_string(),
    }
}

pub async fn get<T, F>(path: &str, fallback: F) -> ApiResponse<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> ApiResponse<T>,
{
    match backend_url() {
        Some(base) => remote_get(&base, path).await.unwrap_or_else(|e| {
            tracing::warn!(path, error = %e, "backend GET failed");
            ApiResponse::fail(format!("Backend unavailable: {e}"))
        }),
        None => fallback(),
    }
}

pub async fn post<T, B, F>(path: &str, body: &B, fallback: F) -> ApiResponse<T>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
    F: FnOnce() -> ApiResponse<T>,
{
    match backend_url() {
        Some(base) => remote_post(&base, path, body).await.unwrap_or_else(|e| {
            tracing::warn!(path, error = %e, "backend POST failed");
            ApiResponse::fail(format!("Backend unavailable: {e}"))
        }),
        None => fallback(),
    }
}

async fn remote_get<T: DeserializeOwned>(
    base: &str,
    path: &str,
) -> Result<ApiResponse<T>, GatewayError> {
    let response = HTTP.get(format!("{base}/{path}")).send().await?;
    if !response.status().is_success() {
        return Err(GatewayError::Status(response.status()));
    }
    Ok(response.json().await?)
}

async fn remote_post<T, B>(base: &str, path: &str, body: &B) -> Result<ApiResponse<T>, GatewayError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let response = HTTP.post(format!("{base}/{path}")).json(body).send().await?;
    if !response.status().is_success() {
        return Err(GatewayError::Status(response.status()));
    }
    Ok(response.json().await?)
}
