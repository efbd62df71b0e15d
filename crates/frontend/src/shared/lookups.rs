//! Общий кэш справочников для выпадающих фильтров.
//!
//! Склады, агенты, маршруты и товары загружаются лениво, один раз за
//! сессию, и читаются всеми страницами через сигналы. `ensure_loaded`
//! идемпотентен: повторные вызовы во время незавершённой загрузки не
//! создают дублирующих сетевых запросов (флаг «в полёте»).

use crate::shared::api_utils::{api_url, get_json};
use contracts::shared::lookups::{ItemDto, RouteDto, SalesmanDto, WarehouseDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LookupKind {
    Warehouses,
    Salesmen,
    Routes,
    Items,
}

impl LookupKind {
    fn endpoint(&self) -> &'static str {
        match self {
            LookupKind::Warehouses => "/api/lookups/warehouses",
            LookupKind::Salesmen => "/api/lookups/salesmen",
            LookupKind::Routes => "/api/lookups/routes",
            LookupKind::Items => "/api/lookups/items",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
}

#[derive(Clone, Copy)]
pub struct LookupStore {
    pub warehouses: RwSignal<Vec<WarehouseDto>>,
    pub salesmen: RwSignal<Vec<SalesmanDto>>,
    pub routes: RwSignal<Vec<RouteDto>>,
    pub items: RwSignal<Vec<ItemDto>>,
    states: RwSignal<BTreeMap<LookupKind, LoadState>>,
}

impl LookupStore {
    pub fn new() -> Self {
        Self {
            warehouses: RwSignal::new(Vec::new()),
            salesmen: RwSignal::new(Vec::new()),
            routes: RwSignal::new(Vec::new()),
            items: RwSignal::new(Vec::new()),
            states: RwSignal::new(BTreeMap::new()),
        }
    }

    fn state(&self, kind: LookupKind) -> LoadState {
        self.states
            .with_untracked(|s| s.get(&kind).copied().unwrap_or_default())
    }

    /// Ленивая загрузка справочника. Во время `Loading` и после `Ready`
    /// вызов — no-op; подписчики дорисуются через сигналы.
    pub fn ensure_loaded(&self, kind: LookupKind) {
        if self.state(kind) != LoadState::Idle {
            return;
        }
        self.states.update(|s| {
            s.insert(kind, LoadState::Loading);
        });

        let store = *self;
        spawn_local(async move {
            let loaded = store.fetch(kind).await;
            store.states.update(|s| {
                // Ошибка возвращает Idle: следующий ensure повторит запрос.
                s.insert(kind, if loaded { LoadState::Ready } else { LoadState::Idle });
            });
        });
    }

    pub fn ensure_all(&self, kinds: &[LookupKind]) {
        for kind in kinds {
            self.ensure_loaded(*kind);
        }
    }

    async fn fetch(&self, kind: LookupKind) -> bool {
        let url = api_url(kind.endpoint());
        match kind {
            LookupKind::Warehouses => match get_json::<Vec<WarehouseDto>>(&url).await {
                Ok(list) => {
                    self.warehouses.set(list);
                    true
                }
                Err(err) => {
                    log::error!("lookup warehouses failed: {}", err);
                    false
                }
            },
            LookupKind::Salesmen => match get_json::<Vec<SalesmanDto>>(&url).await {
                Ok(list) => {
                    self.salesmen.set(list);
                    true
                }
                Err(err) => {
                    log::error!("lookup salesmen failed: {}", err);
                    false
                }
            },
            LookupKind::Routes => match get_json::<Vec<RouteDto>>(&url).await {
                Ok(list) => {
                    self.routes.set(list);
                    true
                }
                Err(err) => {
                    log::error!("lookup routes failed: {}", err);
                    false
                }
            },
            LookupKind::Items => match get_json::<Vec<ItemDto>>(&url).await {
                Ok(list) => {
                    self.items.set(list);
                    true
                }
                Err(err) => {
                    log::error!("lookup items failed: {}", err);
                    false
                }
            },
        }
    }
}

impl Default for LookupStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_lookups() -> LookupStore {
    use_context::<LookupStore>().expect("LookupStore not provided in context")
}
