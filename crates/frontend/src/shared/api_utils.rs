//! API utilities for frontend-backend communication.
//!
//! Всё общение с бэкендом проходит через две функции: `get_json` и
//! `post_json`. Обе различают транспортную ошибку (сеть/HTTP-статус) и
//! бизнес-ошибку (HTTP 200 с `error: true` в теле) — вторая несёт текст
//! для пользователя.

use contracts::shared::envelope::business_error;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// Get the base URL for API requests.
///
/// Constructs the API base URL from the current window location.
/// Returns an empty string if window is not available (SSR/tests).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path (the path should start with `/api/`).
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Сеть, не-2xx статус, битый JSON.
    Transport(String),
    /// HTTP 200, но сервер сообщил об ошибке бизнес-логики.
    Business(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "ошибка запроса: {}", msg),
            ApiError::Business(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

async fn decode<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Transport(format!("HTTP {}", response.status())));
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if let Some(message) = business_error(&body) {
        return Err(ApiError::Business(message));
    }

    serde_json::from_value(body).map_err(|e| ApiError::Transport(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_error_display_is_verbatim() {
        let err = ApiError::Business("Склад не найден".to_string());
        assert_eq!(err.to_string(), "Склад не найден");
    }

    #[test]
    fn test_transport_error_display_is_prefixed() {
        let err = ApiError::Transport("HTTP 502".to_string());
        assert_eq!(err.to_string(), "ошибка запроса: HTTP 502");
    }
}
