//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>`; callers translate transport
//! failures into the generic per-operation user messages and keep the
//! detailed string for diagnostic logging only. Semantic failures (e.g. a
//! rejected registration) travel in-band inside the response body.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ClientRecord, RegisterRequest, RegisterResponse, StatsResponse, VerifyRequest, VerifyResponse};

/// Backend base address, fixed per deployment at compile time.
#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("CONSOLE_API_URL").unwrap_or("http://localhost:5000")
}

#[cfg(any(test, feature = "hydrate"))]
fn clients_endpoint() -> String {
    format!("{}/clients", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn stats_endpoint() -> String {
    format!("{}/stats", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint() -> String {
    format!("{}/register", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn verify_endpoint() -> String {
    format!("{}/verify", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_endpoint(client_id: &str) -> String {
    format!("{}/delete/{client_id}", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(operation: &str, status: u16) -> String {
    format!("{operation} request failed: {status}")
}

/// Fetch every client record from `GET /clients`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_clients() -> Result<Vec<ClientRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&clients_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("clients", resp.status()));
        }
        resp.json::<Vec<ClientRecord>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch aggregate counters from `GET /stats`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_stats() -> Result<StatsResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&stats_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("stats", resp.status()));
        }
        resp.json::<StatsResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Submit a registration via `POST /register`.
///
/// A `success: false` body is not an `Err`: the backend reports rejected
/// registrations in-band and the caller surfaces `error` verbatim.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn register_client(request: &RegisterRequest) -> Result<RegisterResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&register_endpoint())
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("register", resp.status()));
        }
        resp.json::<RegisterResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Check a bot identifier against `POST /verify`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn verify_bot(request: &VerifyRequest) -> Result<VerifyResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&verify_endpoint())
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("verify", resp.status()));
        }
        resp.json::<VerifyResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Delete a client (and its bot) via `DELETE /delete/{client_id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn delete_client(client_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&delete_endpoint(client_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("delete", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = client_id;
        Err("not available on server".to_owned())
    }
}
