use crate::domain::a002_delivery::api;
use crate::shared::components::{
    ColumnPicker, ExportButton, GridTable, PageHeader, PaginationControls,
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
use crate::shared::number_format::format_opt_money;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::domain::a002_delivery::DeliveryDto;
use contracts::shared::export::ExportFormat;
use contracts::shared::filter::FilterValue;
use leptos::prelude::*;
use std::collections::BTreeSet;

const PAGE_KEY: &str = "a002_delivery";

static COLUMNS: [Column<DeliveryDto>; 9] = [
    Column {
        key: "document_no",
        label: "Номер",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| text_or_dash(&r.document_no),
    },
    Column {
        key: "delivery_date",
        label: "Дата",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| format_date(&r.delivery_date),
    },
    Column {
        key: "status",
        label: "Статус",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| or_dash(r.status.map(|s| s.display_name())),
    },
    Column {
        key: "order_no",
        label: "Заказ",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| or_dash(r.order_no.as_ref()),
    },
    Column {
        key: "customer",
        label: "Контрагент",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| or_dash(r.customer_name.as_ref()),
    },
    Column {
        key: "warehouse",
        label: "Склад",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| or_dash(r.warehouse_name.as_ref()),
    },
    Column {
        key: "route",
        label: "Маршрут",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| or_dash(r.route_name.as_ref()),
    },
    Column {
        key: "driver",
        label: "Водитель",
        visible_by_default: false,
        align: CellAlign::Left,
        render: |r| or_dash(r.driver_name.as_ref()),
    },
    Column {
        key: "total_amount",
        label: "Сумма",
        visible_by_default: true,
        align: CellAlign::Right,
        render: |r| format_opt_money(r.total_amount),
    },
];

#[component]
pub fn DeliveryList() -> impl IntoView {
    let lookups = use_lookups();
    lookups.ensure_all(&[LookupKind::Warehouses, LookupKind::Routes]);

    let controller = GridController::new(api::grid_source());
    controller.init();

    let visible = RwSignal::new(resolve_visible_keys(
        &COLUMNS,
        load_visible_keys(PAGE_KEY).as_deref(),
    ));

    let warehouse_value = move || {
        controller.column_filters.with(|f| match f.get("warehouse_id") {
            Some(FilterValue::One(v)) => v.clone(),
            _ => String::new(),
        })
    };
    let route_value = move || {
        controller.column_filters.with(|f| match f.get("route_id") {
            Some(FilterValue::One(v)) => v.clone(),
            _ => String::new(),
        })
    };

    let export_flags = RwSignal::new(ExportFlags::new());
    let export_filter = Callback::new(move |_: ()| controller.current_filter());

    let pagination = controller.pagination;

    view! {
        <div class="page" id=page_id(PAGE_KEY, PAGE_CAT_LIST) data-page-category=PAGE_CAT_LIST>
            <PageHeader title="Доставки" subtitle="Исполнение заказов по маршрутам">
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
                    prop:value=route_value
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        controller.set_column_filter(
                            "route_id",
                            if value.is_empty() { None } else { Some(FilterValue::one(value)) },
                        );
                    }
                >
                    <option value="">"Все маршруты"</option>
                    {move || {
                        lookups
                            .routes
                            .get()
                            .into_iter()
                            .map(|r| {
                                view! { <option value=r.id.to_string()>{r.name.clone()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
                <ExportButton
                    format=ExportFormat::Csv
                    export_fn={|request| Box::pin(api::export(request))}
                    flags=export_flags
                    filter=export_filter
                />
                <ExportButton
                    format=ExportFormat::Xlsx
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

            <div class="list-toolbar">
                <PaginationControls
                    current_page=Signal::derive(move || pagination.with(|p| p.current_page))
                    total_pages=Signal::derive(move || pagination.with(|p| p.total_pages))
                    total_records=Signal::derive(move || pagination.with(|p| p.total_records))
                    page_size=Signal::derive(move || pagination.with(|p| p.page_size))
                    on_page_change=Callback::new(move |page| controller.go_to_page(page))
                    on_page_size_change=Callback::new(move |size| controller.set_page_size(size))
                />
            </div>

            <GridTable
                columns=&COLUMNS
                rows=controller.rows
                visible=visible
                loading=controller.loading
            />
        </div>
    }
}
