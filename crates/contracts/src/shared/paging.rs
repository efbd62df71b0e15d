//! Paginated list contracts.
//!
//! Endpoint-ы исторически расходятся в именах полей пагинации
//! (`page`/`current_page`, `limit`/`per_page`, `last_page`/`total_pages`),
//! а endpoint расширенного фильтра может вкладывать пагинацию на уровень
//! глубже. Нормализация происходит здесь, один раз, — страницы фронтенда
//! видят только [`PageResult`].

use crate::shared::filter::{query_pairs, FilterMap};
use serde::{Deserialize, Serialize};

/// Transient request of one page. Rebuilt before every fetch, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
    pub filters: FilterMap,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32, filters: FilterMap) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
            filters,
        }
    }

    /// Flat query pairs: `page`, `per_page`, then the filters in key order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
        ];
        pairs.extend(query_pairs(&self.filters));
        pairs
    }
}

/// Wire shape of the pagination block, tolerant to both naming schemes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPagination {
    #[serde(default, alias = "page")]
    pub current_page: Option<u32>,
    #[serde(default, alias = "total_pages", alias = "totalPages")]
    pub last_page: Option<u32>,
    #[serde(default, alias = "total_records", alias = "totalRecords")]
    pub total: Option<u64>,
    #[serde(default, alias = "limit")]
    pub per_page: Option<u32>,
}

/// Endpoint расширенного фильтра иногда отдаёт `pagination.pagination`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PaginationNode {
    Nested { pagination: RawPagination },
    Flat(RawPagination),
}

impl PaginationNode {
    pub fn into_raw(self) -> RawPagination {
        match self {
            PaginationNode::Nested { pagination } => pagination,
            PaginationNode::Flat(raw) => raw,
        }
    }
}

/// Raw body of a list / filter call.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<PaginationNode>,
}

/// Normalized result of a list / filter call.
///
/// Invariants after normalization: `current_page >= 1`,
/// `current_page <= total_pages` when `total_pages > 0`,
/// `rows.len() <= page_size as usize`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub rows: Vec<T>,
    pub total_pages: u32,
    pub total_records: u64,
    pub current_page: u32,
    pub page_size: u32,
}

impl<T> PageResult<T> {
    /// Fallback published when a fetch fails: page 1 of an empty listing.
    pub fn empty(page_size: u32) -> Self {
        Self {
            rows: Vec::new(),
            total_pages: 1,
            total_records: 0,
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Normalize a raw response against the request that produced it.
    pub fn from_response(response: ListResponse<T>, request_page: u32, request_per_page: u32) -> Self {
        let raw = response
            .pagination
            .map(PaginationNode::into_raw)
            .unwrap_or_default();

        let mut rows = response.data;
        let page_size = raw.per_page.unwrap_or(request_per_page).max(1);
        if rows.len() > page_size as usize {
            rows.truncate(page_size as usize);
        }

        let total_records = raw.total.unwrap_or(rows.len() as u64);
        let total_pages = raw
            .last_page
            .unwrap_or_else(|| (total_records.div_ceil(page_size as u64)) as u32)
            .max(1);
        let current_page = raw
            .current_page
            .unwrap_or(request_page)
            .clamp(1, total_pages);

        Self {
            rows,
            total_pages,
            total_records,
            current_page,
            page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::FilterValue;

    fn result_from(json: &str) -> PageResult<serde_json::Value> {
        let response: ListResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        PageResult::from_response(response, 1, 50)
    }

    #[test]
    fn test_both_naming_schemes_normalize_identically() {
        let legacy = result_from(
            r#"{"data":[{"a":1}],"pagination":{"page":2,"totalPages":5,"totalRecords":230,"limit":50}}"#,
        );
        let modern = result_from(
            r#"{"data":[{"a":1}],"pagination":{"current_page":2,"last_page":5,"total":230,"per_page":50}}"#,
        );
        assert_eq!(legacy, modern);
        assert_eq!(legacy.current_page, 2);
        assert_eq!(legacy.total_pages, 5);
        assert_eq!(legacy.total_records, 230);
    }

    #[test]
    fn test_double_nested_pagination() {
        let nested = result_from(
            r#"{"data":[],"pagination":{"pagination":{"current_page":3,"last_page":4,"total":200,"per_page":50}}}"#,
        );
        assert_eq!(nested.current_page, 3);
        assert_eq!(nested.total_pages, 4);
        assert_eq!(nested.total_records, 200);
    }

    #[test]
    fn test_round_trip_single_page() {
        // 12 строк при per_page=50 — одна страница, totalRecords=12.
        let rows: Vec<serde_json::Value> = (0..12).map(|i| serde_json::json!({ "i": i })).collect();
        let response = ListResponse {
            data: rows,
            pagination: Some(PaginationNode::Flat(RawPagination {
                current_page: Some(1),
                last_page: Some(1),
                total: Some(12),
                per_page: Some(50),
            })),
        };
        let result = PageResult::from_response(response, 1, 50);
        assert_eq!(result.rows.len(), 12);
        assert_eq!(result.total_records, 12);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.current_page, 1);
    }

    #[test]
    fn test_missing_pagination_falls_back_to_request() {
        let result = result_from(r#"{"data":[{"a":1},{"a":2}]}"#);
        assert_eq!(result.current_page, 1);
        assert_eq!(result.page_size, 50);
        assert_eq!(result.total_records, 2);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn test_current_page_clamped_to_total() {
        let result = result_from(
            r#"{"data":[],"pagination":{"current_page":9,"last_page":3,"total":120,"per_page":50}}"#,
        );
        assert_eq!(result.current_page, 3);
    }

    #[test]
    fn test_rows_truncated_to_page_size() {
        let rows: Vec<serde_json::Value> = (0..5).map(|i| serde_json::json!(i)).collect();
        let response = ListResponse {
            data: rows,
            pagination: Some(PaginationNode::Flat(RawPagination {
                per_page: Some(3),
                ..Default::default()
            })),
        };
        let result = PageResult::from_response(response, 1, 3);
        assert_eq!(result.rows.len(), 3);
    }

    #[test]
    fn test_empty_fallback_shape() {
        let empty: PageResult<serde_json::Value> = PageResult::empty(25);
        assert!(empty.rows.is_empty());
        assert_eq!(empty.total_pages, 1);
        assert_eq!(empty.current_page, 1);
        assert_eq!(empty.page_size, 25);
    }

    #[test]
    fn test_request_query_pairs() {
        let mut filters = FilterMap::new();
        filters.insert("warehouse_id".to_string(), FilterValue::one("WH-7"));
        let request = PageRequest::new(2, 25, filters);
        assert_eq!(
            request.query_pairs(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("per_page".to_string(), "25".to_string()),
                ("warehouse_id".to_string(), "WH-7".to_string()),
            ]
        );
    }
}
