use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Верхняя панель: переключатель меню и название рабочей области.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="top-header">
            <button
                class="top-header__toggle"
                title="Меню"
                on:click=move |_| ctx.left_open.update(|open| *open = !*open)
            >
                {icon("menu")}
            </button>
            <div class="top-header__title">"Дистрибуция — рабочее место"</div>
        </header>
    }
}
