use crate::domain::a001_distributor_order::api;
use crate::layout::loading_service::use_global_loading;
use crate::layout::toast_service::use_toasts;
use crate::shared::date_utils::format_date;
use crate::shared::grid::columns::or_dash;
use crate::shared::number_format::{format_money, format_opt_money};
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};
use contracts::domain::a001_distributor_order::DistributorOrderDetailsDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Card;

const PAGE_KEY: &str = "a001_distributor_order";

#[component]
fn FieldRow(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="detail-field">
            <span class="detail-field__label">{label}</span>
            <span class="detail-field__value">{value}</span>
        </div>
    }
}

/// Карточка заказа дистрибьютора (просмотр).
///
/// Открывается отдельной вкладкой; `on_close` закрывает вкладку.
/// Ошибка загрузки не роняет страницу: показывается деградированная
/// карточка с прочерками.
#[component]
pub fn DistributorOrderDetail(id: String, on_close: Callback<()>) -> impl IntoView {
    let toasts = use_toasts();
    let loading = use_global_loading();
    let (details, set_details) = signal::<Option<DistributorOrderDetailsDto>>(None);
    let (load_failed, set_load_failed) = signal(false);

    let id_for_load = id.clone();
    Effect::new(move |_| {
        let id = id_for_load.clone();
        spawn_local(async move {
            loading.begin();
            match api::get_by_id(&id).await {
                Ok(dto) => set_details.set(Some(dto)),
                Err(err) => {
                    log::error!("distributor order {} load failed: {}", id, err);
                    toasts.error(format!("Не удалось загрузить заказ: {}", err));
                    set_load_failed.set(true);
                }
            }
            loading.end();
        });
    });

    view! {
        <div class="page" id=page_id(PAGE_KEY, PAGE_CAT_DETAIL) data-page-category=PAGE_CAT_DETAIL>
            <div class="detail-header">
                <h1 class="detail-header__title">
                    {move || {
                        details
                            .get()
                            .map(|d| format!("Заказ {}", d.header.document_no))
                            .unwrap_or_else(|| "Заказ".to_string())
                    }}
                </h1>
                <button class="detail-header__close" on:click=move |_| on_close.run(())>
                    "Закрыть"
                </button>
            </div>

            {move || {
                let dto = details.get();
                if dto.is_none() && !load_failed.get() {
                    // Данные ещё в пути — полноэкранный индикатор уже горит.
                    return view! { <></> }.into_any();
                }

                let header = dto.as_ref().map(|d| d.header.clone());
                let lines = dto.map(|d| d.lines).unwrap_or_default();

                view! {
                    <Card>
                        <div class="detail-grid">
                            <FieldRow
                                label="Дата"
                                value=header
                                    .as_ref()
                                    .map(|h| format_date(&h.order_date))
                                    .unwrap_or_else(|| "-".to_string())
                            />
                            <FieldRow
                                label="Статус"
                                value=or_dash(
                                    header.as_ref().and_then(|h| h.status).map(|s| s.display_name()),
                                )
                            />
                            <FieldRow
                                label="Контрагент"
                                value=or_dash(
                                    header
                                        .as_ref()
                                        .and_then(|h| h.customer.as_ref())
                                        .and_then(|c| c.name.as_ref()),
                                )
                            />
                            <FieldRow
                                label="Склад"
                                value=or_dash(header.as_ref().and_then(|h| h.warehouse_name.as_ref()))
                            />
                            <FieldRow
                                label="Агент"
                                value=or_dash(header.as_ref().and_then(|h| h.salesman_name.as_ref()))
                            />
                            <FieldRow
                                label="Сумма"
                                value=format_opt_money(header.as_ref().and_then(|h| h.total_amount))
                            />
                        </div>
                    </Card>

                    <h2 class="detail-section-title">"Строки"</h2>
                    <table class="grid-table">
                        <thead>
                            <tr>
                                <th class="grid-th">"Код"</th>
                                <th class="grid-th">"Наименование"</th>
                                <th class="grid-th grid-th--right">"Кол-во"</th>
                                <th class="grid-th grid-th--right">"Цена"</th>
                                <th class="grid-th grid-th--right">"Сумма"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {if lines.is_empty() {
                                view! {
                                    <tr>
                                        <td class="grid-td grid-td--empty" colspan="5">"Нет строк"</td>
                                    </tr>
                                }
                                .into_any()
                            } else {
                                lines
                                    .into_iter()
                                    .map(|line| {
                                        view! {
                                            <tr class="grid-row">
                                                <td class="grid-td">{line.item_code.clone()}</td>
                                                <td class="grid-td">
                                                    {or_dash(line.item_name.as_ref())}
                                                </td>
                                                <td class="grid-td grid-td--right">
                                                    {format_money(line.qty)}
                                                </td>
                                                <td class="grid-td grid-td--right">
                                                    {format_opt_money(line.price)}
                                                </td>
                                                <td class="grid-td grid-td--right">
                                                    {format_opt_money(line.amount)}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </div>
    }
}
