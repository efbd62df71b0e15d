use crate::domain::a001_distributor_order::ui::details::DistributorOrderDetail;
use crate::domain::a001_distributor_order::ui::list::DistributorOrderList;
use crate::domain::a002_delivery::ui::list::DeliveryList;
use crate::domain::a003_return::ui::list::ReturnList;
use crate::domain::a004_load_out::ui::list::LoadOutList;
use crate::domain::a005_service_ticket::ui::list::ServiceTicketList;
use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::global_context::{use_app_context, Tab as TabData};
use crate::projections::p901_sales_summary::ui::list::SalesSummaryList;
use crate::projections::p902_attendance::ui::list::AttendanceList;
use leptos::prelude::*;

/// Содержимое одной вкладки. Компонент создаётся при открытии вкладки и
/// живёт до её закрытия: переключение вкладок не теряет состояние
/// страниц (фильтры, пагинация).
#[component]
fn TabPage(tab: TabData) -> impl IntoView {
    let ctx = use_app_context();
    let tab_key = tab.key.clone();

    let key_for_active = tab_key.clone();
    let is_active = move || {
        ctx.active
            .with(|active| active.as_ref() == Some(&key_for_active))
    };

    let key_for_close = tab_key.clone();
    let content = {
        match tab_key.as_str() {
            "a001_distributor_order" => view! { <DistributorOrderList /> }.into_any(),
            k if k.starts_with("a001_distributor_order_detail_") => {
                let id = k
                    .strip_prefix("a001_distributor_order_detail_")
                    .unwrap_or_default()
                    .to_string();
                view! {
                    <DistributorOrderDetail
                        id=id
                        on_close=Callback::new(move |_| {
                            ctx.close_tab(&key_for_close);
                        })
                    />
                }
                .into_any()
            }
            "a002_delivery" => view! { <DeliveryList /> }.into_any(),
            "a003_return" => view! { <ReturnList /> }.into_any(),
            "a004_load_out" => view! { <LoadOutList /> }.into_any(),
            "a005_service_ticket" => view! { <ServiceTicketList /> }.into_any(),
            "p901_sales_summary" => view! { <SalesSummaryList /> }.into_any(),
            "p902_attendance" => view! { <AttendanceList /> }.into_any(),
            _ => view! {
                <div class="tab-page__unknown">"Неизвестная страница: " {tab_key.clone()}</div>
            }
            .into_any(),
        }
    };

    view! {
        <div
            class="tab-page"
            style=move || if is_active() { "" } else { "display: none;" }
        >
            {content}
        </div>
    }
}

/// Полоса вкладок и содержимое активной вкладки.
#[component]
pub fn Tabs() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="tabs">
            <div class="tabs__strip">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        view! { <TabComponent tab=tab /> }
                    }
                />
            </div>
            <div class="tabs__content">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        view! { <TabPage tab=tab /> }
                    }
                />
            </div>
        </div>
    }
}
