//! Business-error envelope.
//!
//! Бэкенд может вернуть HTTP 200 с флагом `error: true` и сообщением в
//! `data.message`. Такой ответ — ошибка бизнес-логики, её текст показывается
//! пользователю как есть.

use serde_json::Value;

const FALLBACK_MESSAGE: &str = "Операция завершилась ошибкой";

/// Returns the user-facing message when the body carries `error: true`.
pub fn business_error(body: &Value) -> Option<String> {
    let is_error = body
        .get("error")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !is_error {
        return None;
    }

    let message = body
        .pointer("/data/message")
        .or_else(|| body.get("message"))
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(FALLBACK_MESSAGE);

    Some(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_body_is_not_an_error() {
        assert_eq!(business_error(&json!({ "data": [] })), None);
        assert_eq!(business_error(&json!({ "error": false, "data": [] })), None);
    }

    #[test]
    fn test_message_extracted_from_data() {
        let body = json!({ "error": true, "data": { "message": "Склад не найден" } });
        assert_eq!(business_error(&body), Some("Склад не найден".to_string()));
    }

    #[test]
    fn test_top_level_message_fallback() {
        let body = json!({ "error": true, "message": "Доступ запрещён" });
        assert_eq!(business_error(&body), Some("Доступ запрещён".to_string()));
    }

    #[test]
    fn test_error_without_message_gets_generic_text() {
        let body = json!({ "error": true });
        assert_eq!(business_error(&body), Some(FALLBACK_MESSAGE.to_string()));
    }
}
