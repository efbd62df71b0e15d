use crate::domain::a005_service_ticket::api;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::{
    ColumnPicker, GridTable, PageHeader, PaginationControls, RowActionButton,
};
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::download::open_download_url;
use crate::shared::grid::columns::{
    load_visible_keys, or_dash, resolve_visible_keys, save_visible_keys, text_or_dash, CellAlign,
    Column,
};
use crate::shared::grid::GridController;
use crate::shared::icons::icon;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::domain::a005_service_ticket::{ServiceTicketDto, TicketStatus};
use contracts::shared::filter::FilterValue;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeSet;
use uuid::Uuid;

const PAGE_KEY: &str = "a005_service_ticket";

static COLUMNS: [Column<ServiceTicketDto>; 8] = [
    Column {
        key: "ticket_no",
        label: "Номер",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| text_or_dash(&r.ticket_no),
    },
    Column {
        key: "opened_at",
        label: "Открыта",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| format_datetime(&r.opened_at),
    },
    Column {
        key: "status",
        label: "Статус",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| or_dash(r.status.map(|s| s.display_name())),
    },
    Column {
        key: "asset",
        label: "Оборудование",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| {
            let code = r.asset_code.as_deref().unwrap_or("");
            let model = r.asset_model.as_deref().unwrap_or("");
            match (code.is_empty(), model.is_empty()) {
                (false, false) => format!("{} ({})", code, model),
                (false, true) => code.to_string(),
                (true, false) => model.to_string(),
                (true, true) => "-".to_string(),
            }
        },
    },
    Column {
        key: "outlet",
        label: "Точка",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| or_dash(r.outlet_name.as_ref()),
    },
    Column {
        key: "technician",
        label: "Техник",
        visible_by_default: true,
        align: CellAlign::Left,
        render: |r| or_dash(r.technician_name.as_ref()),
    },
    Column {
        key: "problem",
        label: "Проблема",
        visible_by_default: false,
        align: CellAlign::Left,
        render: |r| or_dash(r.problem.as_ref()),
    },
    Column {
        key: "resolved_at",
        label: "Решена",
        visible_by_default: false,
        align: CellAlign::Left,
        render: |r| or_dash(r.resolved_at.as_deref().map(format_date)),
    },
];

#[component]
pub fn ServiceTicketList() -> impl IntoView {
    let toasts = use_toasts();
    let controller = GridController::new(api::grid_source());
    controller.init();

    let visible = RwSignal::new(resolve_visible_keys(
        &COLUMNS,
        load_visible_keys(PAGE_KEY).as_deref(),
    ));

    let status_value = move || {
        controller.column_filters.with(|f| match f.get("status") {
            Some(FilterValue::One(v)) => v.clone(),
            _ => String::new(),
        })
    };

    // Заявки, по которым печатная форма сейчас формируется. Спиннер
    // строки живёт отдельно от индикатора загрузки самого списка.
    let busy_tickets = RwSignal::new(BTreeSet::<Uuid>::new());

    let download_pdf = move |id: Uuid| {
        let inserted = busy_tickets.try_update(|set| set.insert(id)).unwrap_or(false);
        if !inserted {
            return;
        }
        spawn_local(async move {
            match api::ticket_pdf(id).await {
                Ok(response) => match response.download_url.filter(|url| !url.is_empty()) {
                    Some(url) => {
                        if let Err(err) = open_download_url(&url) {
                            log::error!("ticket pdf download failed: {}", err);
                            toasts.error("Не удалось скачать печатную форму");
                        }
                    }
                    None => toasts.error("Сервер не вернул ссылку на печатную форму"),
                },
                Err(err) => {
                    log::error!("ticket {} pdf failed: {}", id, err);
                    toasts.error(format!("Не удалось сформировать PDF: {}", err));
                }
            }
            busy_tickets.update(|set| {
                set.remove(&id);
            });
        });
    };

    let actions = Callback::new(move |row: ServiceTicketDto| {
        let id = row.id;
        view! {
            <RowActionButton
                icon_name="download"
                title="Печатная форма"
                busy=Signal::derive(move || busy_tickets.with(|set| set.contains(&id)))
                on_click=Callback::new(move |_| download_pdf(id))
            />
        }
        .into_any()
    });

    let pagination = controller.pagination;

    view! {
        <div class="page" id=page_id(PAGE_KEY, PAGE_CAT_LIST) data-page-category=PAGE_CAT_LIST>
            <PageHeader title="Сервисные заявки" subtitle="Обслуживание холодильного оборудования">
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
                    {TicketStatus::all()
                        .into_iter()
                        .map(|status| {
                            view! {
                                <option value=status.as_str()>{status.display_name()}</option>
                            }
                        })
                        .collect_view()}
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
                actions=actions
            />
        </div>
    }
}
