//! Page category constants for tab page standardization.
//!
//! Every page rendered inside a tab declares an HTML `id` in the format
//! `{entity}--{category}` (e.g. `"a001_distributor_order--list"`). The
//! `--` separator makes the entity name searchable: copy the id from the
//! browser DOM Inspector, paste into IDE search, and you land in the
//! entity directory.

/// List of records: table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / view form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

pub fn page_id(entity: &str, category: &str) -> String {
    format!("{}--{}", entity, category)
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        let id = page_id("a001_distributor_order", PAGE_CAT_LIST);
        assert_eq!(id, "a001_distributor_order--list");
        assert!(is_valid_page_id(&id));
    }

    #[test]
    fn test_invalid_page_ids() {
        assert!(!is_valid_page_id("no-separator"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("entity--"));
    }
}
