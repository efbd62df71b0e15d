//! Сборка параметров запроса списка.
//!
//! Правило приоритета: активный payload расширенного фильтра полностью
//! замещает быстрые колоночные фильтры в рамках одного запроса. Значения
//! не валидируются — это транзит до бэкенда.

use super::pagination::PaginationState;
use contracts::shared::filter::FilterMap;
use contracts::shared::paging::PageRequest;

pub fn build(
    pagination: &PaginationState,
    column_filters: &FilterMap,
    global_filter: Option<&FilterMap>,
) -> PageRequest {
    let filters = match global_filter {
        Some(global) => global.clone(),
        None => column_filters.clone(),
    };
    PageRequest::new(pagination.current_page, pagination.page_size, filters)
}

/// Детерминированная строка запроса; также служит ключом кэша
/// одинаковых запросов.
pub fn to_query_string(request: &PageRequest) -> String {
    request
        .query_pairs()
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(&key),
                urlencoding::encode(&value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::filter::FilterValue;

    fn pagination() -> PaginationState {
        PaginationState::new(25)
    }

    #[test]
    fn test_column_filters_merge_as_flat_pairs() {
        let mut columns = FilterMap::new();
        columns.insert("warehouse_id".to_string(), FilterValue::one("WH-7"));

        let request = build(&pagination(), &columns, None);
        assert_eq!(
            to_query_string(&request),
            "page=1&per_page=25&warehouse_id=WH-7"
        );
    }

    #[test]
    fn test_global_filter_supersedes_column_filters() {
        let mut columns = FilterMap::new();
        columns.insert("warehouse_id".to_string(), FilterValue::one("WH-7"));
        let mut global = FilterMap::new();
        global.insert("date_from".to_string(), FilterValue::one("2026-07-01"));
        global.insert("date_to".to_string(), FilterValue::one("2026-07-31"));

        let request = build(&pagination(), &columns, Some(&global));
        assert!(!request.filters.contains_key("warehouse_id"));
        assert_eq!(request.filters.len(), 2);
    }

    #[test]
    fn test_column_filters_win_when_global_is_cleared() {
        // Сценарий: после сброса расширенного фильтра выбран склад —
        // в запросе только warehouse_id, без остатков payload-а.
        let mut columns = FilterMap::new();
        columns.insert("warehouse_id".to_string(), FilterValue::one("WH-7"));

        let request = build(&pagination(), &columns, None);
        assert_eq!(
            request.filters.get("warehouse_id"),
            Some(&FilterValue::one("WH-7"))
        );
        assert!(!request.filters.contains_key("date_from"));
    }

    #[test]
    fn test_query_string_encodes_values() {
        let mut columns = FilterMap::new();
        columns.insert("q".to_string(), FilterValue::one("ООО Ромашка"));

        let request = build(&pagination(), &columns, None);
        let qs = to_query_string(&request);
        assert!(qs.starts_with("page=1&per_page=25&q="));
        assert!(!qs.contains(' '));
    }

    #[test]
    fn test_multi_value_filter_repeats_key() {
        let mut columns = FilterMap::new();
        columns.insert(
            "status".to_string(),
            FilterValue::many(["new", "approved"]),
        );

        let request = build(&pagination(), &columns, None);
        assert_eq!(
            to_query_string(&request),
            "page=1&per_page=25&status%5B%5D=new&status%5B%5D=approved"
        );
    }
}
