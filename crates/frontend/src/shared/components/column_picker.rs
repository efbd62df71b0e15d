use crate::shared::icons::icon;
use leptos::prelude::*;
use std::collections::BTreeSet;

/// Выпадающий список видимости колонок.
///
/// Набор ключей живёт у страницы; выбор сохраняется в localStorage под
/// ключом страницы и восстанавливается при следующем открытии.
#[component]
pub fn ColumnPicker(
    /// Пары (ключ, подпись) всех колонок страницы в порядке реестра
    options: Vec<(String, String)>,
    visible: RwSignal<BTreeSet<String>>,
    /// Вызывается после каждого изменения набора (для персистентности)
    on_change: Callback<BTreeSet<String>>,
) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <div class="column-picker">
            <button
                class="column-picker__toggle"
                title="Колонки"
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                {icon("columns")}
            </button>
            {move || {
                if !is_open.get() {
                    return view! { <></> }.into_any();
                }
                let options = options.clone();
                view! {
                    <div class="column-picker__dropdown">
                        {options
                            .into_iter()
                            .map(|(key, label)| {
                                let key_for_check = key.clone();
                                let checked = move || visible.with(|v| v.contains(&key_for_check));
                                view! {
                                    <label class="column-picker__option">
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            on:change=move |_| {
                                                visible.update(|v| {
                                                    if !v.remove(&key) {
                                                        v.insert(key.clone());
                                                    }
                                                });
                                                on_change.run(visible.get_untracked());
                                            }
                                        />
                                        {label}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
