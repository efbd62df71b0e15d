use crate::projections::p902_attendance::api;
use crate::shared::components::{
    ColumnPicker, FilterPanel, GridTable, PageHeader, PaginationControls,
};
use crate::shared::date_utils::{days_ago_iso, format_date, today_iso};
use crate::shared::grid::columns::{
    load_visible_keys, or_dash, resolve_visible_keys, save_visible_keys, CellAlign, Column,
};
use crate::shared::grid::GridController;
use crate::shared::icons::icon;
use crate::shared::lookups::{use_lookups, LookupKind};
use crate::shared::number_format::format_number_with_decimals;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::projections::p902_attendance::AttendanceRowDto;
use contracts::shared::filter::{FilterMap, FilterValue};
use leptos::prelude::*;
use std::collections::BTreeSet;
use thaw::{Button, ButtonAppearance, ButtonSize};

const PAGE_KEY: &str = "p902_attendance";

static COLUMNS: [Column<AttendanceRowDto>; 7] = [
    Column {
        key: "work_date",
        label: "Дата",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| format_date(&r.work_date),
    },
    Column {
        key: "salesman",
        label: "Агент",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| or_dash(r.salesman_name.as_ref()),
    },
    Column {
        key: "check_in",
        label: "Начало",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| or_dash(r.check_in.as_ref()),
    },
    Column {
        key: "check_out",
        label: "Конец",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| or_dash(r.check_out.as_ref()),
    },
    Column {
        key: "planned_visits",
        label: "План визитов",
        visible_by_default: true,
        align: CellAlign::Right,
        render: |r| or_dash(r.planned_visits),
    },
    Column {
        key: "actual_visits",
        label: "Факт визитов",
        visible_by_default: true,
        align: CellAlign::Right,
        render: |r| or_dash(r.actual_visits),
    },
    Column {
        key: "distance_km",
        label: "Пробег, км",
        visible_by_default: false,
        align: CellAlign::Right,
        render: |r| {
            r.distance_km
                .map(|km| format_number_with_decimals(km, 1))
                .unwrap_or_else(|| "-".to_string())
        },
    },
];

#[component]
pub fn AttendanceList() -> impl IntoView {
    let lookups = use_lookups();
    lookups.ensure_loaded(LookupKind::Salesmen);

    let controller = GridController::new(api::grid_source());
    controller.init();

    let visible = RwSignal::new(resolve_visible_keys(
        &COLUMNS,
        load_visible_keys(PAGE_KEY).as_deref(),
    ));

    let (date_from, set_date_from) = signal(days_ago_iso(7));
    let (date_to, set_date_to) = signal(today_iso());
    let is_filter_expanded = RwSignal::new(false);

    let submit_global = move |_| {
        let mut filter = FilterMap::new();
        if !date_from.get().is_empty() {
            filter.insert("date_from".to_string(), FilterValue::one(date_from.get()));
        }
        if !date_to.get().is_empty() {
            filter.insert("date_to".to_string(), FilterValue::one(date_to.get()));
        }
        controller.submit_global_filter(filter);
    };

    let reset_filters = move |_| {
        set_date_from.set(days_ago_iso(7));
        set_date_to.set(today_iso());
        controller.clear_filters();
    };

    let salesman_value = move || {
        controller.column_filters.with(|f| match f.get("salesman_id") {
            Some(FilterValue::One(v)) => v.clone(),
            _ => String::new(),
        })
    };

    let pagination = controller.pagination;

    view! {
        <div class="page" id=page_id(PAGE_KEY, PAGE_CAT_LIST) data-page-category=PAGE_CAT_LIST>
            <PageHeader title="Посещаемость" subtitle="Рабочий день торговых агентов">
                <select
                    class="quick-filter-select"
                    prop:value=salesman_value
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        controller.set_column_filter(
                            "salesman_id",
                            if value.is_empty() { None } else { Some(FilterValue::one(value)) },
                        );
                    }
                >
                    <option value="">"Все агенты"</option>
                    {move || {
                        lookups
                            .salesmen
                            .get()
                            .into_iter()
                            .map(|s| {
                                view! { <option value=s.id.to_string()>{s.name.clone()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
                <ColumnPicker
                    options={COLUMNS
                        .iter()
                        .map(|c| (c.key.to_string(), c.label.to_string()))
                        .collect::<Vec<_>>()}
                    visible=visible
                    on_change=Callback::new(move |keys: BTreeSet<String>| {
                        save_visible_keys(PAGE_KEY, &keys);
                    })
                />
                <button
                    class="refresh-btn"
                    title="Обновить"
                    on:click=move |_| controller.refresh()
                >
                    {icon("refresh")}
                </button>
            </PageHeader>

            <FilterPanel
                is_expanded=is_filter_expanded
                active_filters_count=Signal::derive(move || controller.active_filter_count())
                pagination_controls=move || {
                    view! {
                        <PaginationControls
                            current_page=Signal::derive(move || pagination.with(|p| p.current_page))
                            total_pages=Signal::derive(move || pagination.with(|p| p.total_pages))
                            total_records=Signal::derive(move || pagination.with(|p| p.total_records))
                            page_size=Signal::derive(move || pagination.with(|p| p.page_size))
                            on_page_change=Callback::new(move |page| controller.go_to_page(page))
                            on_page_size_change=Callback::new(move |size| controller.set_page_size(size))
                        />
                    }
                    .into_any()
                }
                filter_content=move || {
                    view! {
                        <div class="filter-form">
                            <label class="filter-form__field">
                                "Дата с"
                                <input
                                    type="date"
                                    prop:value=move || date_from.get()
                                    on:input=move |ev| set_date_from.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="filter-form__field">
                                "Дата по"
                                <input
                                    type="date"
                                    prop:value=move || date_to.get()
                                    on:input=move |ev| set_date_to.set(event_target_value(&ev))
                                />
                            </label>
                            <div class="filter-form__actions">
                                {move || {
                                    if controller.applying_global.get() {
                                        view! {
                                            <span class="filter-form__busy">"Применение..."</span>
                                        }
                                        .into_any()
                                    } else {
                                        view! {
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Primary
                                                on_click=submit_global
                                            >
                                                "Применить"
                                            </Button>
                                        }
                                        .into_any()
                                    }
                                }}
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Secondary
                                    on_click=reset_filters
                                >
                                    "Сбросить"
                                </Button>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            />

            <GridTable
                columns=&COLUMNS
                rows=controller.rows
                visible=visible
                loading=controller.loading
            />
        </div>
    }
}
