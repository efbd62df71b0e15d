use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::loading_service::GlobalLoading;
use crate::layout::toast_service::ToastService;
use crate::layout::Shell;
use crate::shared::lookups::LookupStore;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Сервисы уровня приложения раздаются через контекст.
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());
    provide_context(GlobalLoading::new());
    provide_context(LookupStore::new());

    view! { <MainLayout /> }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Восстановление активной вкладки из `?active=`; выполняется один раз.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}
