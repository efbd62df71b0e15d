//! Левое меню: группы страниц рабочей области.

use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (key, label, icon)
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "documents",
            label: "Документы",
            icon: "orders",
            items: vec![
                (
                    "a001_distributor_order",
                    tab_label_for_key("a001_distributor_order"),
                    "orders",
                ),
                ("a002_delivery", tab_label_for_key("a002_delivery"), "truck"),
                ("a003_return", tab_label_for_key("a003_return"), "package-x"),
                ("a004_load_out", tab_label_for_key("a004_load_out"), "load"),
                (
                    "a005_service_ticket",
                    tab_label_for_key("a005_service_ticket"),
                    "snowflake",
                ),
            ],
        },
        MenuGroup {
            id: "reports",
            label: "Отчёты",
            icon: "bar-chart",
            items: vec![
                (
                    "p901_sales_summary",
                    tab_label_for_key("p901_sales_summary"),
                    "bar-chart",
                ),
                (
                    "p902_attendance",
                    tab_label_for_key("p902_attendance"),
                    "users",
                ),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let (collapsed_groups, set_collapsed_groups) = signal::<Vec<&'static str>>(vec![]);

    view! {
        <nav class="sidebar">
            {menu_groups()
                .into_iter()
                .map(|group| {
                    let group_id = group.id;
                    let is_collapsed =
                        move || collapsed_groups.with(|c| c.contains(&group_id));

                    view! {
                        <div class="sidebar__group">
                            <div
                                class="sidebar__group-header"
                                on:click=move |_| {
                                    set_collapsed_groups.update(|c| {
                                        if let Some(pos) = c.iter().position(|g| *g == group_id) {
                                            c.remove(pos);
                                        } else {
                                            c.push(group_id);
                                        }
                                    });
                                }
                            >
                                {icon(group.icon)}
                                <span class="sidebar__group-label">{group.label}</span>
                            </div>
                            <div class=move || {
                                if is_collapsed() {
                                    "sidebar__group-items sidebar__group-items--collapsed"
                                } else {
                                    "sidebar__group-items"
                                }
                            }>
                                {group
                                    .items
                                    .into_iter()
                                    .map(|(key, label, item_icon)| {
                                        let is_active = move || {
                                            ctx.active
                                                .with(|active| active.as_deref() == Some(key))
                                        };
                                        view! {
                                            <div
                                                class=move || {
                                                    if is_active() {
                                                        "sidebar__item sidebar__item--active"
                                                    } else {
                                                        "sidebar__item"
                                                    }
                                                }
                                                on:click=move |_| ctx.open_tab(key, label)
                                            >
                                                {icon(item_icon)}
                                                <span>{label}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
