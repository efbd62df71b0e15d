use crate::shared::grid::columns::{compare_cells, sort_indicator, CellAlign, Column};
use leptos::prelude::*;
use std::collections::BTreeSet;

/// Универсальная таблица списковой страницы.
///
/// Отрисовывает реестр колонок по текущему набору видимых ключей.
/// Ячейка — всегда строка из `column.render`; отсутствие данных уже
/// превращено в «-» на уровне рендера колонки. Слот `actions` отдаёт
/// ячейку действий строки; клики по ней не всплывают до строки.
#[component]
pub fn GridTable<R>(
    columns: &'static [Column<R>],
    #[prop(into)] rows: Signal<Vec<R>>,
    #[prop(into)] visible: Signal<BTreeSet<String>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(optional)] actions: Option<Callback<R, AnyView>>,
    #[prop(optional)] on_row_click: Option<Callback<R>>,
) -> impl IntoView
where
    R: Clone + Send + Sync + 'static,
{
    let visible_columns = move || {
        columns
            .iter()
            .copied()
            .filter(|c| visible.with(|v| v.contains(c.key)))
            .collect::<Vec<_>>()
    };
    let has_actions = actions.is_some();

    // Клиентская сортировка текущей страницы по отображаемым значениям.
    let (sort_key, set_sort_key) = signal::<Option<&'static str>>(None);
    let (sort_ascending, set_sort_ascending) = signal(true);
    let toggle_sort = move |key: &'static str| {
        if sort_key.get_untracked() == Some(key) {
            set_sort_ascending.update(|asc| *asc = !*asc);
        } else {
            set_sort_key.set(Some(key));
            set_sort_ascending.set(true);
        }
    };
    let row_class = if on_row_click.is_some() {
        "grid-row grid-row--clickable"
    } else {
        "grid-row"
    };

    view! {
        <div class="grid-table-wrap">
            {move || {
                if loading.get() {
                    view! {
                        <div class="grid-table__loading">
                            <div class="grid-table__spinner"></div>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
            <table class="grid-table">
                <thead>
                    <tr>
                        {move || {
                            visible_columns()
                                .into_iter()
                                .map(|col| {
                                    let class = match col.align {
                                        CellAlign::Right => "grid-th grid-th--right grid-th--sortable",
                                        CellAlign::Left => "grid-th grid-th--sortable",
                                    };
                                    let key = col.key;
                                    view! {
                                        <th class=class on:click=move |_| toggle_sort(key)>
                                            {col.label}
                                            {move || {
                                                sort_indicator(
                                                    sort_key.get(),
                                                    key,
                                                    sort_ascending.get(),
                                                )
                                            }}
                                        </th>
                                    }
                                })
                                .collect_view()
                        }}
                        {has_actions.then(|| view! { <th class="grid-th grid-th--actions"></th> })}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let mut data = rows.get();
                        if let Some(key) = sort_key.get() {
                            if let Some(col) = columns.iter().find(|c| c.key == key) {
                                let ascending = sort_ascending.get();
                                data.sort_by(|a, b| {
                                    let ord = compare_cells(&(col.render)(a), &(col.render)(b));
                                    if ascending { ord } else { ord.reverse() }
                                });
                            }
                        }
                        if data.is_empty() {
                            let span = visible_columns().len() + usize::from(has_actions);
                            return view! {
                                <tr>
                                    <td class="grid-td grid-td--empty" colspan=span.to_string()>
                                        {if loading.get() { "Загрузка..." } else { "Нет данных" }}
                                    </td>
                                </tr>
                            }
                            .into_any();
                        }

                        data.into_iter()
                            .map(|row| {
                                let cells = visible_columns()
                                    .into_iter()
                                    .map(|col| {
                                        let class = match col.align {
                                            CellAlign::Right => "grid-td grid-td--right",
                                            CellAlign::Left => "grid-td",
                                        };
                                        view! { <td class=class>{(col.render)(&row)}</td> }
                                    })
                                    .collect_view();

                                let action_cell = actions.map(|render_actions| {
                                    let action_row = row.clone();
                                    view! {
                                        <td
                                            class="grid-td grid-td--actions"
                                            on:click=move |e| e.stop_propagation()
                                        >
                                            {render_actions.run(action_row)}
                                        </td>
                                    }
                                });

                                let click_row = row.clone();
                                view! {
                                    <tr
                                        class=row_class
                                        on:click=move |_| {
                                            if let Some(handler) = on_row_click {
                                                handler.run(click_row.clone());
                                            }
                                        }
                                    >
                                        {cells}
                                        {action_cell}
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}
