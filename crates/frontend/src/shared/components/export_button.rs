use crate::layout::toast_service::use_toasts;
use crate::shared::grid::export::{run_export, ExportFlags, ExportFn};
use crate::shared::icons::icon;
use contracts::shared::export::ExportFormat;
use contracts::shared::filter::FilterMap;
use leptos::prelude::*;

/// Кнопка серверного экспорта.
///
/// Пока формат в `Requesting`, кнопка заблокирована и показывает
/// спиннер; повторный клик игнорируется ещё и на уровне `ExportFlags`.
/// Несколько кнопок одной страницы делят один `RwSignal<ExportFlags>`,
/// но работают независимо — каждая со своим форматом.
#[component]
pub fn ExportButton(
    format: ExportFormat,
    export_fn: ExportFn,
    flags: RwSignal<ExportFlags>,
    /// Текущий фильтр страницы, подставляется в запрос экспорта
    filter: Callback<(), Option<FilterMap>>,
    /// Подпись (по умолчанию имя формата)
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    let toasts = use_toasts();
    let label = label.unwrap_or_else(|| format.label().to_string());
    let busy = move || flags.with(|f| f.is_requesting(format));

    view! {
        <button
            class="export-btn"
            disabled=busy
            on:click=move |_| {
                run_export(flags, export_fn, format, filter.run(()), toasts);
            }
        >
            {move || {
                if busy() {
                    view! { <span class="export-btn__spinner"></span> }.into_any()
                } else {
                    icon("download")
                }
            }}
            <span>{label.clone()}</span>
        </button>
    }
}
