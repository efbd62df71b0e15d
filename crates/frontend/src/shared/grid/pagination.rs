//! Состояние пагинации одного списка.

use contracts::shared::paging::PageResult;

pub const DEFAULT_PAGE_SIZE: u32 = 25;
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 25, 50, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_records: u64,
}

impl PaginationState {
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_pages: 1,
            total_records: 0,
        }
    }

    /// Переход на страницу. Выход за диапазон прижимается к границе,
    /// а не отклоняется. Возвращает `true`, если страница изменилась.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let clamped = page.clamp(1, self.total_pages.max(1));
        if clamped == self.current_page {
            return false;
        }
        self.current_page = clamped;
        true
    }

    /// Смена размера страницы всегда возвращает на первую страницу.
    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size.max(1);
        self.current_page = 1;
    }

    /// Перезаписывает все четыре поля из нормализованного ответа.
    pub fn apply_result<T>(&mut self, result: &PageResult<T>) {
        self.current_page = result.current_page.max(1);
        self.page_size = result.page_size.max(1);
        self.total_pages = result.total_pages.max(1);
        self.total_records = result.total_records;
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_pages(total_pages: u32) -> PaginationState {
        let mut state = PaginationState::new(25);
        state.total_pages = total_pages;
        state
    }

    #[test]
    fn test_go_to_page_in_range() {
        let mut state = state_with_pages(5);
        assert!(state.go_to_page(3));
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn test_go_to_page_clamps_out_of_range() {
        let mut state = state_with_pages(5);
        assert!(state.go_to_page(99));
        assert_eq!(state.current_page, 5);

        assert!(state.go_to_page(0));
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_go_to_same_page_reports_no_change() {
        let mut state = state_with_pages(5);
        state.go_to_page(2);
        assert!(!state.go_to_page(2));
    }

    #[test]
    fn test_set_page_size_resets_to_first_page() {
        let mut state = state_with_pages(5);
        state.go_to_page(4);
        state.set_page_size(100);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.page_size, 100);
    }

    #[test]
    fn test_apply_result_overwrites_everything() {
        let mut state = PaginationState::new(25);
        let result: PageResult<u8> = PageResult {
            rows: vec![],
            total_pages: 7,
            total_records: 161,
            current_page: 3,
            page_size: 25,
        };
        state.apply_result(&result);
        assert_eq!(state.current_page, 3);
        assert_eq!(state.total_pages, 7);
        assert_eq!(state.total_records, 161);
    }
}
