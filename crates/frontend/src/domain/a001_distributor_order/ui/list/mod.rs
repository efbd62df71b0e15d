use crate::domain::a001_distributor_order::api;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::{
    ColumnPicker, ExportButton, FilterPanel, GridTable, PageHeader, PaginationControls,
    RowActionButton,
};
use crate::shared::date_utils::format_date;
use crate::shared::grid::columns::{
    load_visible_keys, or_dash, resolve_visible_keys, save_visible_keys, text_or_dash, CellAlign,
    Column,
};
use crate::shared::grid::export::ExportFlags;
use crate::shared::grid::GridController;
use crate::shared::icons::icon;
use crate::shared::lookups::{use_lookups, LookupKind};
use crate::shared::number_format::{format_opt_int, format_opt_money};
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::domain::a001_distributor_order::{DistributorOrderDto, OrderStatus};
use contracts::shared::export::ExportFormat;
use contracts::shared::filter::{FilterMap, FilterValue};
use leptos::prelude::*;
use std::collections::BTreeSet;
use thaw::{Button, ButtonAppearance, ButtonSize};
use uuid::Uuid;

const PAGE_KEY: &str = "a001_distributor_order";

fn render_customer(row: &DistributorOrderDto) -> String {
    let customer = row.customer.as_ref();
    let code = customer.and_then(|c| c.code.as_deref()).unwrap_or("");
    let name = customer.and_then(|c| c.name.as_deref()).unwrap_or("");
    match (code.is_empty(), name.is_empty()) {
        (false, false) => format!("{} ({})", name, code),
        (false, true) => code.to_string(),
        (true, false) => name.to_string(),
        (true, true) => "-".to_string(),
    }
}

static COLUMNS: [Column<DistributorOrderDto>; 9] = [
    Column {
        key: "document_no",
        label: "Номер",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| text_or_dash(&r.document_no),
    },
    Column {
        key: "order_date",
        label: "Дата",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| format_date(&r.order_date),
    },
    Column {
        key: "status",
        label: "Статус",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| or_dash(r.status.map(|s| s.display_name())),
    },
    Column {
        key: "customer",
        label: "Контрагент",
        visible_by_default: true,
        align: CellAlign::Left,
        render: render_customer,
    },
    Column {
        key: "warehouse",
        label: "Склад",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| or_dash(r.warehouse_name.as_ref()),
    },
    Column {
        key: "salesman",
        label: "Агент",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| or_dash(r.salesman_name.as_ref()),
    },
    Column {
        key: "total_qty",
        label: "Кол-во",
        visible_by_default: false,
        align: CellAlign::Right,
        render: |r| format_opt_int(r.total_qty),
    },
    Column {
        key: "total_amount",
        label: "Сумма",
        visible_by_default: true,
        align: CellAlign::Right,
        render: |r| format_opt_money(r.total_amount),
    },
    Column {
        key: "currency",
        label: "Валюта",
        visible_by_default: false,
        align: CellAlign::Left,
        render: |r| or_dash(r.currency.as_ref()),
    },
];

#[component]
pub fn DistributorOrderList() -> impl IntoView {
    let ctx = use_app_context();
    let lookups = use_lookups();
    lookups.ensure_all(&[LookupKind::Warehouses, LookupKind::Salesmen]);

    let controller = GridController::new(api::grid_source()).with_memo();
    controller.init();

    let visible = RwSignal::new(resolve_visible_keys(
        &COLUMNS,
        load_visible_keys(PAGE_KEY).as_deref(),
    ));

    // Черновики расширенного фильтра: применяются только по submit.
    let (date_from, set_date_from) = signal(String::new());
    let (date_to, set_date_to) = signal(String::new());
    let (status_draft, set_status_draft) = signal(String::new());
    let (search_draft, set_search_draft) = signal(String::new());
    let is_filter_expanded = RwSignal::new(false);

    let submit_global = move |_| {
        let mut filter = FilterMap::new();
        if !date_from.get().is_empty() {
            filter.insert("date_from".to_string(), FilterValue::one(date_from.get()));
        }
        if !date_to.get().is_empty() {
            filter.insert("date_to".to_string(), FilterValue::one(date_to.get()));
        }
        if !status_draft.get().is_empty() {
            filter.insert("status".to_string(), FilterValue::one(status_draft.get()));
        }
        if !search_draft.get().trim().is_empty() {
            filter.insert(
                "q".to_string(),
                FilterValue::one(search_draft.get().trim().to_string()),
            );
        }
        controller.submit_global_filter(filter);
    };

    let reset_filters = move |_| {
        set_date_from.set(String::new());
        set_date_to.set(String::new());
        set_status_draft.set(String::new());
        set_search_draft.set(String::new());
        controller.clear_filters();
    };

    // Быстрые фильтры в шапке: значение привязано к состоянию контроллера,
    // сброс расширенного фильтра очищает и селекты.
    let warehouse_value = move || {
        controller.column_filters.with(|f| match f.get("warehouse_id") {
            Some(FilterValue::One(v)) => v.clone(),
            _ => String::new(),
        })
    };
    let salesman_value = move || {
        controller.column_filters.with(|f| match f.get("salesman_id") {
            Some(FilterValue::One(v)) => v.clone(),
            _ => String::new(),
        })
    };

    let header_flags = RwSignal::new(ExportFlags::new());
    let details_flags = RwSignal::new(ExportFlags::new());
    let export_filter = Callback::new(move |_: ()| controller.current_filter());

    let open_details = move |id: Uuid| {
        let key = format!("a001_distributor_order_detail_{}", id);
        ctx.open_tab(&key, tab_label_for_key(&key));
    };

    let actions = Callback::new(move |row: DistributorOrderDto| {
        let id = row.id;
        view! {
            <RowActionButton
                icon_name="eye"
                title="Открыть"
                on_click=Callback::new(move |_| open_details(id))
            />
        }
        .into_any()
    });

    let pagination = controller.pagination;

    view! {
        <div class="page" id=page_id(PAGE_KEY, PAGE_CAT_LIST) data-page-category=PAGE_CAT_LIST>
            <PageHeader title="Заказы дистрибьюторов" subtitle="Документы продаж дистрибьюторской сети">
                <select
                    class="quick-filter-select"
                    prop:value=warehouse_value
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        controller.set_column_filter(
                            "warehouse_id",
                            if value.is_empty() { None } else { Some(FilterValue::one(value)) },
                        );
                    }
                >
                    <option value="">"Все склады"</option>
                    {move || {
                        lookups
                            .warehouses
                            .get()
                            .into_iter()
                            .map(|w| {
                                view! { <option value=w.id.to_string()>{w.name.clone()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
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
                <ExportButton
                    format=ExportFormat::Csv
                    export_fn={|request| Box::pin(api::export_header(request))}
                    flags=header_flags
                    filter=export_filter
                />
                <ExportButton
                    format=ExportFormat::Xlsx
                    export_fn={|request| Box::pin(api::export_header(request))}
                    flags=header_flags
                    filter=export_filter
                />
                <ExportButton
                    format=ExportFormat::Pdf
                    export_fn={|request| Box::pin(api::export_header(request))}
                    flags=header_flags
                    filter=export_filter
                />
                <ExportButton
                    format=ExportFormat::Xlsx
                    export_fn={|request| Box::pin(api::export_details(request))}
                    flags=details_flags
                    filter=export_filter
                    label="Строки XLSX"
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
                            <label class="filter-form__field">
                                "Статус"
                                <select
                                    prop:value=move || status_draft.get()
                                    on:change=move |ev| set_status_draft.set(event_target_value(&ev))
                                >
                                    <option value="">"Любой"</option>
                                    {OrderStatus::all()
                                        .into_iter()
                                        .map(|status| {
                                            view! {
                                                <option value=status.as_str()>
                                                    {status.display_name()}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </label>
                            <label class="filter-form__field">
                                "Поиск"
                                <input
                                    type="text"
                                    placeholder="Номер, контрагент..."
                                    prop:value=move || search_draft.get()
                                    on:input=move |ev| set_search_draft.set(event_target_value(&ev))
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
                actions=actions
                on_row_click=Callback::new(move |row: DistributorOrderDto| open_details(row.id))
            />
        </div>
    }
}
