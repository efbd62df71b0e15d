//! Server-side export job contract.
//!
//! Клиент запрашивает экспорт, сервер формирует файл и возвращает ссылку
//! `download_url`; скачивание — обычный GET по этой ссылке.

use crate::shared::filter::FilterMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Подпись кнопки экспорта.
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Xlsx => "XLSX",
            ExportFormat::Pdf => "PDF",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    pub format: ExportFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterMap>,
}

/// Missing `download_url` in a 200 body is a failed export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResponse {
    #[serde(default)]
    pub download_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ExportFormat::Xlsx).unwrap(), "\"xlsx\"");
    }

    #[test]
    fn test_request_omits_empty_filter() {
        let request = ExportRequest {
            format: ExportFormat::Csv,
            filter: None,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"format":"csv"}"#
        );
    }

    #[test]
    fn test_response_tolerates_missing_url() {
        let response: ExportResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.download_url, None);
    }
}
