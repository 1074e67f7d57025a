//! HTTP plumbing for frontend-backend communication.
//!
//! Builds API URLs from the current window location and wraps `gloo-net`
//! requests into small typed helpers. Every helper returns `Result<_, String>`
//! so callers can surface the message in a toast without further mapping.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests.
///
/// Constructs the API base URL from the current window location, using
/// port 3001 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3001" or "https://example.com:3001"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3001", protocol, hostname)
}

/// Build a full API URL from a path (should start with "/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn check_status(resp: &Response) -> Result<(), String> {
    if resp.ok() {
        Ok(())
    } else {
        log::warn!("API request failed: {} {}", resp.status(), resp.url());
        Err(format!("HTTP {}", resp.status()))
    }
}

/// GET `path` and decode the JSON response.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let resp = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(&resp)?;
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// POST `body` as JSON to `path` and decode the JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let resp = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(&resp)?;
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// PATCH `body` as JSON to `path` and decode the JSON response.
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let resp = Request::patch(&api_url(path))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(&resp)?;
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// POST multipart form data to `path` and decode the JSON response.
///
/// The browser sets the multipart boundary header itself.
pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    form: web_sys::FormData,
) -> Result<T, String> {
    let resp = Request::post(&api_url(path))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(&resp)?;
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// DELETE `path`, ignoring the response body.
pub async fn delete(path: &str) -> Result<(), String> {
    let resp = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(&resp)
}
