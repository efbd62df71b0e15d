use crate::projections::p901_sales_summary::api;
use crate::shared::components::{
    ColumnPicker, ExportButton, FilterPanel, GridTable, PageHeader, PaginationControls,
};
use crate::shared::date_utils::{days_ago_iso, format_date, today_iso};
use crate::shared::grid::columns::{
    load_visible_keys, or_dash, resolve_visible_keys, save_visible_keys, CellAlign, Column,
};
use crate::shared::grid::export::ExportFlags;
use crate::shared::grid::GridController;
use crate::shared::icons::icon;
use crate::shared::number_format::format_opt_money;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::projections::p901_sales_summary::SalesSummaryRowDto;
use contracts::shared::export::ExportFormat;
use contracts::shared::filter::{FilterMap, FilterValue};
use leptos::prelude::*;
use std::collections::BTreeSet;
use thaw::{Button, ButtonAppearance, ButtonSize};

const PAGE_KEY: &str = "p901_sales_summary";

static COLUMNS: [Column<SalesSummaryRowDto>; 8] = [
    Column {
        key: "period",
        label: "Дата",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| format_date(&r.period),
    },
    Column {
        key: "salesman",
        label: "Агент",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| or_dash(r.salesman_name.as_ref()),
    },
    Column {
        key: "route",
        label: "Маршрут",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| or_dash(r.route_name.as_ref()),
    },
    Column {
        key: "outlets_visited",
        label: "Посещено точек",
        visible_by_default: true,
        align: CellAlign::Right,
        render: |r| or_dash(r.outlets_visited),
    },
    Column {
        key: "orders_count",
        label: "Заказов",
        visible_by_default: true,
        align: CellAlign::Right,
        render: |r| or_dash(r.orders_count),
    },
    Column {
        key: "sales_amount",
        label: "Продажи",
        visible_by_default: true,
        align: CellAlign::Right,
        render: |r| format_opt_money(r.sales_amount),
    },
    Column {
        key: "returns_amount",
        label: "Возвраты",
        visible_by_default: false,
        align: CellAlign::Right,
        render: |r| format_opt_money(r.returns_amount),
    },
    Column {
        key: "net_amount",
        label: "Итого",
        visible_by_default: true,
        align: CellAlign::Right,
        render: |r| format_opt_money(r.net_amount),
    },
];

#[component]
pub fn SalesSummaryList() -> impl IntoView {
    // Отчёт часто листают туда-обратно по одним и тем же параметрам —
    // включён кэш одинаковых запросов.
    let controller = GridController::new(api::grid_source()).with_memo();
    controller.init();

    let visible = RwSignal::new(resolve_visible_keys(
        &COLUMNS,
        load_visible_keys(PAGE_KEY).as_deref(),
    ));

    // Период по умолчанию: последние 30 дней.
    let (date_from, set_date_from) = signal(days_ago_iso(30));
    let (date_to, set_date_to) = signal(today_iso());
    let is_filter_expanded = RwSignal::new(true);

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
        set_date_from.set(days_ago_iso(30));
        set_date_to.set(today_iso());
        controller.clear_filters();
    };

    let export_flags = RwSignal::new(ExportFlags::new());
    let export_filter = Callback::new(move |_: ()| controller.current_filter());

    let pagination = controller.pagination;

    view! {
        <div class="page" id=page_id(PAGE_KEY, PAGE_CAT_LIST) data-page-category=PAGE_CAT_LIST>
            <PageHeader title="Отчёт по продажам" subtitle="Итоги работы агентов за период">
                <ExportButton
                    format=ExportFormat::Xlsx
                    export_fn={|request| Box::pin(api::export(request))}
                    flags=export_flags
                    filter=export_filter
                />
                <ExportButton
                    format=ExportFormat::Pdf
                    export_fn={|request| Box::pin(api::export(request))}
                    flags=export_flags
                    filter=export_filter
                />
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
                                                "Сформировать"
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
