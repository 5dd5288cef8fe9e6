pub mod account;
pub mod admin;
pub mod jobs;
pub mod knowledge;
pub mod mentorship;

#[cfg(feature = "ssr")]
pub mod gateway;
#[cfg(feature = "ssr")]
pub mod mock;

use leptos::prelude::ServerFnError;
use shared_types::ApiResponse;

/// Flattens a server-function transport error into the standard envelope so
/// callers deal with exactly one failure shape.
pub fn envelope_or_error<T>(result: Result<ApiResponse<T>, ServerFnError>) -> ApiResponse<T> {
    result.unwrap_or_else(|e| ApiResponse::fail(format!("Request failed: {e}")))
}
