use crate::layout::global_context::{use_app_context, Tab as TabData};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Кнопка вкладки в полосе вкладок.
#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let ctx = use_app_context();
    let key = tab.key.clone();
    let key_for_active = key.clone();
    let key_for_click = key.clone();
    let key_for_close = key.clone();

    let is_active = move || {
        ctx.active
            .with(|active| active.as_ref() == Some(&key_for_active))
    };

    view! {
        <div
            class=move || {
                if is_active() {
                    "tab tab--active"
                } else {
                    "tab"
                }
            }
            on:click=move |_| ctx.activate_tab(&key_for_click)
        >
            <span class="tab__title">{tab.title.clone()}</span>
            <span
                class="tab__close"
                title="Закрыть"
                on:click=move |e| {
                    e.stop_propagation();
                    ctx.close_tab(&key_for_close);
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
