use crate::shared::icons::icon;
use leptos::prelude::*;

/// Кнопка действия строки.
///
/// `busy` — собственный индикатор действия: пока его promise не
/// завершился, кнопка заблокирована и показывает спиннер. Индикатор
/// независим от загрузки самого грида — оба могут гореть одновременно.
#[component]
pub fn RowActionButton(
    icon_name: &'static str,
    title: &'static str,
    #[prop(optional)] busy: Option<Signal<bool>>,
    on_click: Callback<()>,
) -> impl IntoView {
    let is_busy = move || busy.map(|b| b.get()).unwrap_or(false);

    view! {
        <button
            class="row-action-btn"
            title=title
            disabled=is_busy
            on:click=move |e| {
                e.stop_propagation();
                if !is_busy() {
                    on_click.run(());
                }
            }
        >
            {move || {
                if is_busy() {
                    view! { <span class="row-action-btn__spinner"></span> }.into_any()
                } else {
                    icon(icon_name)
                }
            }}
        </button>
    }
}
