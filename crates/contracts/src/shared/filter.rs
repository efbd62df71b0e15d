//! Filter values as they travel to the backend.
//!
//! Транспорт — HTTP query string либо JSON, поэтому все значения фильтров
//! приводятся к строкам уже при построении. Бэкенд принимает как одиночные
//! значения (`warehouse_id=WH-7`), так и множественные (`status[]=new`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Selected value(s) of a single filter key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    One(String),
    Many(Vec<String>),
}

impl FilterValue {
    pub fn one(value: impl ToString) -> Self {
        FilterValue::One(value.to_string())
    }

    pub fn many<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        FilterValue::Many(values.into_iter().map(|v| v.to_string()).collect())
    }

    /// Пустая строка или пустой список — фильтр фактически не выбран.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::One(v) => v.is_empty(),
            FilterValue::Many(vs) => vs.is_empty(),
        }
    }
}

/// Ordered filter map. `BTreeMap` keeps the serialized parameter order
/// deterministic, which also makes the string form usable as a cache key.
pub type FilterMap = BTreeMap<String, FilterValue>;

/// Flatten a filter map into query pairs. Multi-values use the `key[]`
/// convention the backend expects.
pub fn query_pairs(filters: &FilterMap) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in filters {
        match value {
            FilterValue::One(v) => pairs.push((key.clone(), v.clone())),
            FilterValue::Many(vs) => {
                for v in vs {
                    pairs.push((format!("{}[]", key), v.clone()));
                }
            }
        }
    }
    pairs
}

/// Body of the advanced-filter endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalFilterRequest {
    pub per_page: u32,
    pub current_page: u32,
    pub filter: FilterMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_value_coerces_to_strings() {
        assert_eq!(FilterValue::one(7), FilterValue::One("7".to_string()));
        assert_eq!(
            FilterValue::many([1, 2]),
            FilterValue::Many(vec!["1".to_string(), "2".to_string()])
        );
    }

    #[test]
    fn test_query_pairs_flat_and_multi() {
        let mut filters = FilterMap::new();
        filters.insert("warehouse_id".to_string(), FilterValue::one("WH-7"));
        filters.insert(
            "status".to_string(),
            FilterValue::many(["new", "approved"]),
        );

        let pairs = query_pairs(&filters);
        assert_eq!(
            pairs,
            vec![
                ("status[]".to_string(), "new".to_string()),
                ("status[]".to_string(), "approved".to_string()),
                ("warehouse_id".to_string(), "WH-7".to_string()),
            ]
        );
    }

    #[test]
    fn test_serialize_untagged() {
        let one = serde_json::to_string(&FilterValue::one("x")).unwrap();
        assert_eq!(one, "\"x\"");
        let many = serde_json::to_string(&FilterValue::many(["a", "b"])).unwrap();
        assert_eq!(many, "[\"a\",\"b\"]");
    }

    #[test]
    fn test_is_empty() {
        assert!(FilterValue::one("").is_empty());
        assert!(FilterValue::Many(vec![]).is_empty());
        assert!(!FilterValue::one("WH-1").is_empty());
    }
}
