pub mod center;
pub mod global_context;
pub mod left;
pub mod loading_service;
pub mod tabs;
pub mod toast_service;
pub mod top_header;

use leptos::prelude::*;
use loading_service::GlobalLoadingOverlay;
use toast_service::ToastHost;
use top_header::TopHeader;

/// Оболочка приложения.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |         Content               |
/// |   (Left)  |        (Center)               |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send + Sync,
    C: Fn() -> AnyView + 'static + Send + Sync,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>

            <ToastHost />
            <GlobalLoadingOverlay />
        </div>
    }
}
