//! Реестр колонок списковой страницы.
//!
//! Колонка описывается статически: ключ, подпись, видимость по умолчанию
//! и функция отрисовки значения. Отрисовка обязана переживать отсутствие
//! вложенных полей — пустое значение показывается как «-».

use std::collections::BTreeSet;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAlign {
    Left,
    Right,
}

pub struct Column<R: 'static> {
    pub key: &'static str,
    pub label: &'static str,
    pub visible_by_default: bool,
    pub align: CellAlign,
    pub render: fn(&R) -> String,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

/// Пустые и отсутствующие значения деградируют до «-», не до паники.
pub fn or_dash<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "-".to_string())
}

pub fn text_or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

pub fn default_visible_keys<R>(columns: &[Column<R>]) -> BTreeSet<String> {
    columns
        .iter()
        .filter(|c| c.visible_by_default)
        .map(|c| c.key.to_string())
        .collect()
}

/// Сохранённый выбор пользователя, отфильтрованный по известным ключам.
/// Колонки, добавленные после сохранения, не появляются молча; удалённые
/// ключи отбрасываются.
pub fn resolve_visible_keys<R>(columns: &[Column<R>], stored: Option<&[String]>) -> BTreeSet<String> {
    match stored {
        None => default_visible_keys(columns),
        Some(keys) => {
            let known: BTreeSet<&str> = columns.iter().map(|c| c.key).collect();
            let resolved: BTreeSet<String> = keys
                .iter()
                .filter(|k| known.contains(k.as_str()))
                .cloned()
                .collect();
            if resolved.is_empty() {
                default_visible_keys(columns)
            } else {
                resolved
            }
        }
    }
}

/// Сравнение отображаемых значений ячеек для клиентской сортировки
/// текущей страницы. Числа (включая формат с пробелами-разделителями)
/// сравниваются как числа, остальное — без учёта регистра.
pub fn compare_cells(a: &str, b: &str) -> std::cmp::Ordering {
    let parse = |s: &str| s.replace(' ', "").parse::<f64>().ok();
    match (parse(a), parse(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Индикатор сортировки для заголовка колонки.
pub fn sort_indicator(current: Option<&str>, key: &str, ascending: bool) -> &'static str {
    if current == Some(key) {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

const VISIBLE_COLUMNS_PREFIX: &str = "grid-columns";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Ключ localStorage уникален для страницы — выбор колонок переживает
/// перезагрузку только на «своей» странице.
pub fn storage_key(page_key: &str) -> String {
    format!("{}:{}", VISIBLE_COLUMNS_PREFIX, page_key)
}

pub fn load_visible_keys(page_key: &str) -> Option<Vec<String>> {
    let raw = storage()?.get_item(&storage_key(page_key)).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

pub fn save_visible_keys(page_key: &str, keys: &BTreeSet<String>) {
    if let Some(storage) = storage() {
        let ordered: Vec<&String> = keys.iter().collect();
        if let Ok(raw) = serde_json::to_string(&ordered) {
            let _ = storage.set_item(&storage_key(page_key), &raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: Option<String>,
        qty: Option<f64>,
    }

    fn columns() -> [Column<Row>; 3] {
        [
            Column {
                key: "name",
                label: "Наименование",
                visible_by_default: true,
                align: CellAlign::Left,
                render: |r| or_dash(r.name.as_ref()),
            },
            Column {
                key: "qty",
                label: "Кол-во",
                visible_by_default: true,
                align: CellAlign::Right,
                render: |r| or_dash(r.qty),
            },
            Column {
                key: "debug_id",
                label: "ID",
                visible_by_default: false,
                align: CellAlign::Left,
                render: |_| "-".to_string(),
            },
        ]
    }

    #[test]
    fn test_missing_fields_render_as_dash() {
        let row = Row {
            name: None,
            qty: None,
        };
        let cols = columns();
        assert_eq!((cols[0].render)(&row), "-");
        assert_eq!((cols[1].render)(&row), "-");
    }

    #[test]
    fn test_or_dash_trims_blank_strings() {
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(Some("WH-7")), "WH-7");
        assert_eq!(text_or_dash(""), "-");
        assert_eq!(text_or_dash("x"), "x");
    }

    #[test]
    fn test_default_visibility_excludes_opt_in_columns() {
        let visible = default_visible_keys(&columns());
        assert!(visible.contains("name"));
        assert!(!visible.contains("debug_id"));
    }

    #[test]
    fn test_stored_selection_restores_opt_in_column() {
        let stored = vec!["qty".to_string(), "debug_id".to_string()];
        let visible = resolve_visible_keys(&columns(), Some(&stored));
        assert!(visible.contains("debug_id"));
        assert!(!visible.contains("name"));
    }

    #[test]
    fn test_unknown_stored_keys_are_dropped() {
        let stored = vec!["qty".to_string(), "removed_col".to_string()];
        let visible = resolve_visible_keys(&columns(), Some(&stored));
        assert_eq!(visible.len(), 1);
        assert!(visible.contains("qty"));
    }

    #[test]
    fn test_empty_stored_selection_falls_back_to_defaults() {
        let stored: Vec<String> = vec!["ghost".to_string()];
        let visible = resolve_visible_keys(&columns(), Some(&stored));
        assert_eq!(visible, default_visible_keys(&columns()));
    }

    #[test]
    fn test_compare_cells_numeric_aware() {
        use std::cmp::Ordering;
        // "1 234.56" и "987.00" — числа, несмотря на разделители тысяч.
        assert_eq!(compare_cells("987.00", "1 234.56"), Ordering::Less);
        assert_eq!(compare_cells("10", "9"), Ordering::Greater);
        assert_eq!(compare_cells("абв", "АБВ"), Ordering::Equal);
        assert_eq!(compare_cells("ORD-1", "ORD-2"), Ordering::Less);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(sort_indicator(Some("qty"), "qty", true), " ▲");
        assert_eq!(sort_indicator(Some("qty"), "qty", false), " ▼");
        assert_eq!(sort_indicator(Some("qty"), "name", true), " ⇅");
        assert_eq!(sort_indicator(None, "name", true), " ⇅");
    }
}
