//! Контракт источника данных списка.
//!
//! Каждая страница отдаёт контроллеру пару функций своего `api.rs`:
//! `list` — обычный список с плоскими параметрами, `filter_by` — endpoint
//! расширенного фильтра с JSON-payload. Указатели на функции, без
//! замыканий: источник определяется модулем страницы целиком.

use crate::shared::api_utils::ApiError;
use contracts::shared::filter::FilterMap;
use contracts::shared::paging::{PageRequest, PageResult};
use std::future::Future;
use std::pin::Pin;

/// Future адаптера. WASM однопоточный, `Send` не требуется.
pub type SourceFuture<R> = Pin<Box<dyn Future<Output = Result<PageResult<R>, ApiError>>>>;

pub struct GridSource<R: 'static> {
    /// Имя списка для журнала и текста ошибок («заказы», «доставки»...).
    pub name: &'static str,
    pub list: fn(PageRequest) -> SourceFuture<R>,
    pub filter_by: fn(FilterMap, u32, u32) -> SourceFuture<R>,
}

impl<R> Clone for GridSource<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for GridSource<R> {}
