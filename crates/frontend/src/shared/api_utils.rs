//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use contracts::shared::list::{ListQuery, ListResponse};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
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
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET с разбором JSON-ответа
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST JSON, ответ тоже JSON. Текст ошибки сервера попадает в сообщение.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let details = response.text().await.unwrap_or_default();
        return Err(if details.is_empty() {
            format!("HTTP error: {}", response.status())
        } else {
            format!("HTTP error: {} - {}", response.status(), details)
        });
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Страница коллекции: `<path>/list?limit=&offset=`
pub async fn get_list_page<T: DeserializeOwned>(
    path: &str,
    query: ListQuery,
) -> Result<ListResponse<T>, String> {
    let mut url = format!("{}/list?", path);
    if let Some(limit) = query.limit {
        url.push_str(&format!("limit={}&", limit));
    }
    if let Some(offset) = query.offset {
        url.push_str(&format!("offset={}&", offset));
    }
    get_json(url.trim_end_matches(['?', '&'])).await
}
