//! Универсальный табличный механизм списковых страниц.
//!
//! Каждая списковая страница — это конфигурация над одним и тем же ядром:
//! состояние пагинации, сборка параметров запроса, реестр колонок, экспорт
//! и контроллер, который их связывает. Сами страницы описывают только
//! колонки, фильтры и адаптер к своему endpoint-у.

pub mod columns;
pub mod controller;
pub mod export;
pub mod pagination;
pub mod query;
pub mod source;

pub use columns::{or_dash, text_or_dash, CellAlign, Column};
pub use controller::GridController;
pub use export::{run_export, ExportFlags, ExportFn};
pub use pagination::PaginationState;
pub use source::{GridSource, SourceFuture};
