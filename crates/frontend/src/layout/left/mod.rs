pub mod sidebar;

use super::global_context::use_app_context;
use leptos::prelude::*;

/// Обёртка левой панели: видимость управляется из контекста.
#[component]
pub fn Left(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <aside class=move || {
            if ctx.left_open.get() {
                "app-left app-left--open"
            } else {
                "app-left app-left--collapsed"
            }
        }>
            {children()}
        </aside>
    }
}
