//! Полноэкранный индикатор «блокирующей» загрузки.
//!
//! Счётчик, а не флаг: несколько параллельных операций не сбрасывают
//! индикатор друг другу. Локальные спиннеры (грид, кнопка экспорта,
//! действие строки) живут отдельно от него.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct GlobalLoading {
    active: RwSignal<u32>,
}

impl GlobalLoading {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(0),
        }
    }

    pub fn begin(&self) {
        self.active.update(|n| *n += 1);
    }

    pub fn end(&self) {
        self.active.update(|n| *n = n.saturating_sub(1));
    }

    pub fn is_busy(&self) -> bool {
        self.active.get() > 0
    }
}

impl Default for GlobalLoading {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_loading() -> GlobalLoading {
    use_context::<GlobalLoading>().expect("GlobalLoading not provided in context")
}

#[component]
pub fn GlobalLoadingOverlay() -> impl IntoView {
    let loading = use_global_loading();

    view! {
        {move || {
            if loading.is_busy() {
                view! {
                    <div class="loading-overlay">
                        <div class="loading-overlay__spinner"></div>
                    </div>
                }
                .into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}
