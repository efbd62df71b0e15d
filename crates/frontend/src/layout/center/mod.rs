pub mod tabs;

use leptos::prelude::*;

/// Обёртка центральной области.
#[component]
pub fn Center(children: ChildrenFn) -> impl IntoView {
    view! { <main class="app-center">{children()}</main> }
}
