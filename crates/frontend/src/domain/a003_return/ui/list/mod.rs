use crate::domain::a003_return::api;
use crate::shared::components::{
    ColumnPicker, ExportButton, FilterPanel, FilterTag, GridTable, PageHeader, PaginationControls,
};
use crate::shared::date_utils::format_date;
use crate::shared::grid::columns::{
    load_visible_keys, or_dash, resolve_visible_keys, save_visible_keys, text_or_dash, CellAlign,
    Column,
};
use crate::shared::grid::export::ExportFlags;
use crate::shared::grid::GridController;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_opt_int, format_opt_money};
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::domain::a003_return::{ReturnDto, ReturnReason};
use contracts::shared::export::ExportFormat;
use contracts::shared::filter::{FilterMap, FilterValue};
use leptos::prelude::*;
use std::collections::BTreeSet;
use thaw::{Button, ButtonAppearance, ButtonSize};

const PAGE_KEY: &str = "a003_return";

static COLUMNS: [Column<ReturnDto>; 8] = [
    Column {
        key: "document_no",
        label: "Номер",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| text_or_dash(&r.document_no),
    },
    Column {
        key: "return_date",
        label: "Дата",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| format_date(&r.return_date),
    },
    Column {
        key: "reason",
        label: "Причина",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| or_dash(r.reason.map(|v| v.display_name())),
    },
    Column {
        key: "status",
        label: "Статус",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| or_dash(r.status.as_ref()),
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
        visible_by_default: false,
        align: CellAlign::Left,
        render: |r| or_dash(r.warehouse_name.as_ref()),
    },
    Column {
        key: "total_qty",
        label: "Кол-во",
        visible_by_default: true,
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
];

#[component]
pub fn ReturnList() -> impl IntoView {
    let controller = GridController::new(api::grid_source());
    controller.init();

    let visible = RwSignal::new(resolve_visible_keys(
        &COLUMNS,
        load_visible_keys(PAGE_KEY).as_deref(),
    ));

    let (date_from, set_date_from) = signal(String::new());
    let (date_to, set_date_to) = signal(String::new());
    let (reason_draft, set_reason_draft) = signal(String::new());
    let is_filter_expanded = RwSignal::new(false);

    let submit_global = move |_| {
        let mut filter = FilterMap::new();
        if !date_from.get().is_empty() {
            filter.insert("date_from".to_string(), FilterValue::one(date_from.get()));
        }
        if !date_to.get().is_empty() {
            filter.insert("date_to".to_string(), FilterValue::one(date_to.get()));
        }
        if !reason_draft.get().is_empty() {
            filter.insert("reason".to_string(), FilterValue::one(reason_draft.get()));
        }
        controller.submit_global_filter(filter);
    };

    let reset_filters = move |_| {
        set_date_from.set(String::new());
        set_date_to.set(String::new());
        set_reason_draft.set(String::new());
        controller.clear_filters();
    };

    let status_value = move || {
        controller.column_filters.with(|f| match f.get("status") {
            Some(FilterValue::One(v)) => v.clone(),
            _ => String::new(),
        })
    };

    let export_flags = RwSignal::new(ExportFlags::new());
    let export_filter = Callback::new(move |_: ()| controller.current_filter());

    let pagination = controller.pagination;

    view! {
        <div class="page" id=page_id(PAGE_KEY, PAGE_CAT_LIST) data-page-category=PAGE_CAT_LIST>
            <PageHeader title="Возвраты" subtitle="Возвраты от дистрибьюторов и точек">
                <select
                    class="quick-filter-select"
                    prop:value=status_value
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        controller.set_column_filter(
                            "status",
                            if value.is_empty() { None } else { Some(FilterValue::one(value)) },
                        );
                    }
                >
                    <option value="">"Любой статус"</option>
                    <option value="draft">"Черновик"</option>
                    <option value="accepted">"Принят"</option>
                    <option value="written_off">"Списан"</option>
                </select>
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
                                "Причина"
                                <select
                                    prop:value=move || reason_draft.get()
                                    on:change=move |ev| set_reason_draft.set(event_target_value(&ev))
                                >
                                    <option value="">"Любая"</option>
                                    <option value="damaged">
                                        {ReturnReason::Damaged.display_name()}
                                    </option>
                                    <option value="expired">
                                        {ReturnReason::Expired.display_name()}
                                    </option>
                                    <option value="wrong_item">
                                        {ReturnReason::WrongItem.display_name()}
                                    </option>
                                    <option value="other">
                                        {ReturnReason::Other.display_name()}
                                    </option>
                                </select>
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
                            {move || {
                                controller
                                    .global_filter
                                    .get()
                                    .map(|filter| {
                                        view! {
                                            <div class="filter-tags">
                                                {filter
                                                    .keys()
                                                    .map(|key| {
                                                        let key_for_remove = key.clone();
                                                        view! {
                                                            <FilterTag
                                                                label=key.clone()
                                                                on_remove=Callback::new(move |_| {
                                                                    let removed = key_for_remove.clone();
                                                                    let mut next = controller
                                                                        .global_filter
                                                                        .get_untracked()
                                                                        .unwrap_or_default();
                                                                    next.remove(&removed);
                                                                    if next.is_empty() {
                                                                        controller.clear_filters();
                                                                    } else {
                                                                        controller.submit_global_filter(next);
                                                                    }
                                                                })
                                                            />
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        }
                                    })
                            }}
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
