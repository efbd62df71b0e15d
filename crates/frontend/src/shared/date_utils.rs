//! Даты в списках и фильтрах.

use chrono::{Duration, NaiveDate, Utc};

/// ISO 8601 (`2026-07-05` или `2026-07-05T16:52:58Z`) -> `05.07.2026`.
/// Непарсибельное значение возвращается как есть: кривая строка в
/// таблице полезнее пустой ячейки.
pub fn format_date(iso_date: &str) -> String {
    let date_part = iso_date.split('T').next().unwrap_or(iso_date);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => iso_date.to_string(),
    }
}

/// ISO 8601 с временем -> `05.07.2026 16:52`. Без времени — как дата.
pub fn format_datetime(iso: &str) -> String {
    match iso.split_once('T') {
        Some((date, time)) => {
            let hhmm: String = time.chars().take(5).collect();
            format!("{} {}", format_date(date), hhmm)
        }
        None => format_date(iso),
    }
}

/// Сегодня в формате, который принимают date-поля фильтров.
pub fn today_iso() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// N дней назад, для дефолтного периода отчётов.
pub fn days_ago_iso(days: i64) -> String {
    (Utc::now().date_naive() - Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-07-05"), "05.07.2026");
        assert_eq!(format_date("2026-07-05T16:52:58.585775200Z"), "05.07.2026");
    }

    #[test]
    fn test_format_date_passes_garbage_through() {
        assert_eq!(format_date("n/a"), "n/a");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2026-07-05T16:52:58Z"), "05.07.2026 16:52");
        assert_eq!(format_datetime("2026-07-05"), "05.07.2026");
    }
}
