//! Оркестратор серверного экспорта.
//!
//! Машина состояний на формат: `Idle -> Requesting -> Idle`. Повторный
//! клик по кнопке формата, который уже в `Requesting`, игнорируется —
//! второй сетевой вызов не выполняется. Разные форматы (и разные кнопки
//! одной страницы) — независимые машины и могут работать параллельно.

use crate::layout::toast_service::ToastService;
use crate::shared::api_utils::ApiError;
use crate::shared::download::open_download_url;
use contracts::shared::export::{ExportFormat, ExportRequest, ExportResponse};
use contracts::shared::filter::FilterMap;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeSet;
use std::future::Future;
use std::pin::Pin;

/// Таблица флагов «в полёте» по форматам.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportFlags {
    requesting: BTreeSet<ExportFormat>,
}

impl ExportFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Переход `Idle -> Requesting`. `false` — формат уже в полёте,
    /// вызывающий обязан ничего не делать.
    pub fn try_begin(&mut self, format: ExportFormat) -> bool {
        self.requesting.insert(format)
    }

    /// Переход `Requesting -> Idle`, независимо от исхода запроса.
    pub fn finish(&mut self, format: ExportFormat) {
        self.requesting.remove(&format);
    }

    pub fn is_requesting(&self, format: ExportFormat) -> bool {
        self.requesting.contains(&format)
    }
}

pub type ExportFuture = Pin<Box<dyn Future<Output = Result<ExportResponse, ApiError>>>>;
pub type ExportFn = fn(ExportRequest) -> ExportFuture;

/// Запустить экспорт. Все пути выхода (успех, бизнес-ошибка, транспорт,
/// отсутствующий `download_url`) снимают флаг формата.
pub fn run_export(
    flags: RwSignal<ExportFlags>,
    export_fn: ExportFn,
    format: ExportFormat,
    filter: Option<FilterMap>,
    toasts: ToastService,
) {
    let began = flags
        .try_update(|f| f.try_begin(format))
        .unwrap_or(false);
    if !began {
        log::debug!("export {} already requesting, click ignored", format.as_str());
        return;
    }

    spawn_local(async move {
        let request = ExportRequest { format, filter };
        match export_fn(request).await {
            Ok(response) => match response.download_url.filter(|url| !url.is_empty()) {
                Some(url) => match open_download_url(&url) {
                    Ok(()) => toasts.success("Файл сформирован, скачивание началось"),
                    Err(err) => {
                        log::error!("download failed: {}", err);
                        toasts.error("Не удалось скачать файл экспорта");
                    }
                },
                None => {
                    log::error!("export {} returned no download_url", format.as_str());
                    toasts.error("Экспорт не вернул ссылку на файл");
                }
            },
            Err(err) => {
                log::error!("export {} failed: {}", format.as_str(), err);
                toasts.error(format!("Не удалось выполнить экспорт: {}", err));
            }
        }
        flags.update(|f| f.finish(format));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_begin_is_rejected() {
        let mut flags = ExportFlags::new();
        assert!(flags.try_begin(ExportFormat::Csv));
        assert!(!flags.try_begin(ExportFormat::Csv));
        assert!(flags.is_requesting(ExportFormat::Csv));
    }

    #[test]
    fn test_formats_are_independent_machines() {
        let mut flags = ExportFlags::new();
        assert!(flags.try_begin(ExportFormat::Csv));
        assert!(flags.try_begin(ExportFormat::Xlsx));
        flags.finish(ExportFormat::Csv);
        assert!(!flags.is_requesting(ExportFormat::Csv));
        assert!(flags.is_requesting(ExportFormat::Xlsx));
    }

    #[test]
    fn test_finish_allows_restart() {
        let mut flags = ExportFlags::new();
        assert!(flags.try_begin(ExportFormat::Pdf));
        flags.finish(ExportFormat::Pdf);
        assert!(flags.try_begin(ExportFormat::Pdf));
    }
}
