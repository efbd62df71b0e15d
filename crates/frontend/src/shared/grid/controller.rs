//! Контроллер списковой страницы.
//!
//! Жизненный цикл: `Init -> Loading -> Loaded -> (Loading по триггеру)`.
//! Триггеры: монтирование, сигнал обновления, смена страницы/размера,
//! колоночный фильтр, расширенный фильтр, сброс. На каждый триггер
//! контроллер собирает запрос, зовёт адаптер и публикует строки с
//! пагинацией; ошибка — тост и пустой результат первой страницы.
//!
//! Ответы защищены токеном запроса: монотонный счётчик инкрементируется
//! на каждый fetch, обработчик сверяет свой токен с текущим и молча
//! отбрасывает устаревший ответ. Медленная «страница 1» не перезапишет
//! уже показанную «страницу 2».

use super::pagination::PaginationState;
use super::query;
use super::source::GridSource;
use crate::layout::toast_service::{use_toasts, ToastService};
use contracts::shared::filter::{FilterMap, FilterValue};
use contracts::shared::paging::{PageRequest, PageResult};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;

pub struct GridController<R>
where
    R: Clone + Send + Sync + 'static,
{
    source: GridSource<R>,
    pub rows: RwSignal<Vec<R>>,
    pub pagination: RwSignal<PaginationState>,
    pub column_filters: RwSignal<FilterMap>,
    pub global_filter: RwSignal<Option<FilterMap>>,
    pub loading: RwSignal<bool>,
    /// Панель расширенного фильтра «применяется»: взводится на submit,
    /// снимается по завершении запроса — успешном или нет.
    pub applying_global: RwSignal<bool>,
    refresh_tick: RwSignal<u64>,
    token: StoredValue<u64>,
    memo: StoredValue<HashMap<String, PageResult<R>>>,
    memo_enabled: bool,
    toasts: ToastService,
}

impl<R> Clone for GridController<R>
where
    R: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for GridController<R> where R: Clone + Send + Sync + 'static {}

impl<R> GridController<R>
where
    R: Clone + Send + Sync + 'static,
{
    pub fn new(source: GridSource<R>) -> Self {
        Self {
            source,
            rows: RwSignal::new(Vec::new()),
            pagination: RwSignal::new(PaginationState::default()),
            column_filters: RwSignal::new(FilterMap::new()),
            global_filter: RwSignal::new(None),
            loading: RwSignal::new(false),
            applying_global: RwSignal::new(false),
            refresh_tick: RwSignal::new(0),
            token: StoredValue::new(0),
            memo: StoredValue::new(HashMap::new()),
            memo_enabled: false,
            toasts: use_toasts(),
        }
    }

    /// Кэш одинаковых запросов в рамках сессии (ключ — строка параметров).
    pub fn with_memo(mut self) -> Self {
        self.memo_enabled = true;
        self
    }

    /// Первый fetch и подписка на сигнал обновления. Вызывается один раз
    /// из тела компонента страницы.
    pub fn init(self) {
        Effect::new(move |_| {
            let _ = self.refresh_tick.get();
            self.spawn_fetch();
        });
    }

    /// Принудительное обновление: сброс кэша и перезапрос первой страницы.
    /// Используется после create/update/delete.
    pub fn refresh(self) {
        self.memo.update_value(|m| m.clear());
        self.pagination.update(|p| p.current_page = 1);
        self.refresh_tick.update(|n| *n += 1);
    }

    pub fn go_to_page(self, page: u32) {
        let changed = self
            .pagination
            .try_update(|p| p.go_to_page(page))
            .unwrap_or(false);
        if changed {
            self.spawn_fetch();
        }
    }

    pub fn set_page_size(self, page_size: u32) {
        self.pagination.update(|p| p.set_page_size(page_size));
        self.spawn_fetch();
    }

    /// Быстрый колоночный фильтр. Сбрасывает активный расширенный фильтр:
    /// пути запроса взаимоисключающие. `None` или пустое значение снимает
    /// фильтр по ключу. Всегда возврат на первую страницу.
    pub fn set_column_filter(self, key: &str, value: Option<FilterValue>) {
        self.global_filter.set(None);
        let key = key.to_string();
        self.column_filters.update(|filters| match value {
            Some(v) if !v.is_empty() => {
                filters.insert(key, v);
            }
            _ => {
                filters.remove(&key);
            }
        });
        self.reset_page_and_fetch();
    }

    /// Submit панели расширенного фильтра: payload целиком замещает
    /// колоночные фильтры на время своего действия.
    pub fn submit_global_filter(self, filter: FilterMap) {
        self.applying_global.set(true);
        self.global_filter.set(Some(filter));
        self.reset_page_and_fetch();
    }

    pub fn clear_filters(self) {
        self.global_filter.set(None);
        self.column_filters.update(|filters| filters.clear());
        self.reset_page_and_fetch();
    }

    pub fn active_filter_count(&self) -> usize {
        if let Some(global) = self.global_filter.get() {
            global.len()
        } else {
            self.column_filters.with(|f| f.len())
        }
    }

    /// Текущий фильтр для запроса экспорта: расширенный, если активен,
    /// иначе колоночные.
    pub fn current_filter(&self) -> Option<FilterMap> {
        let filters = match self.global_filter.get_untracked() {
            Some(global) => global,
            None => self.column_filters.get_untracked(),
        };
        if filters.is_empty() {
            None
        } else {
            Some(filters)
        }
    }

    fn build_request(&self) -> PageRequest {
        let pagination = self.pagination.get_untracked();
        let column_filters = self.column_filters.get_untracked();
        let global_filter = self.global_filter.get_untracked();
        query::build(&pagination, &column_filters, global_filter.as_ref())
    }

    fn reset_page_and_fetch(self) {
        self.pagination.update(|p| p.current_page = 1);
        self.spawn_fetch();
    }

    fn publish(&self, result: &PageResult<R>) {
        self.pagination.update(|p| p.apply_result(result));
        self.rows.set(result.rows.clone());
    }

    fn spawn_fetch(self) {
        let request = self.build_request();
        let memo_key = query::to_query_string(&request);
        let use_global = self.global_filter.with_untracked(|g| g.is_some());

        if self.memo_enabled {
            let cached = self.memo.with_value(|m| m.get(&memo_key).cloned());
            if let Some(hit) = cached {
                log::debug!("{}: memo hit for {}", self.source.name, memo_key);
                self.publish(&hit);
                self.applying_global.set(false);
                return;
            }
        }

        let token = self.token.with_value(|t| *t) + 1;
        self.token.set_value(token);
        self.loading.set(true);

        spawn_local(async move {
            let outcome = if use_global {
                (self.source.filter_by)(request.filters.clone(), request.per_page, request.page)
                    .await
            } else {
                (self.source.list)(request.clone()).await
            };

            if self.token.with_value(|t| *t) != token {
                // Устаревший ответ: его запрос уже вытеснен более новым.
                log::debug!("{}: stale response (token {}) dropped", self.source.name, token);
                return;
            }

            match outcome {
                Ok(result) => {
                    if self.memo_enabled {
                        let cached = result.clone();
                        self.memo.update_value(|m| {
                            m.insert(memo_key, cached);
                        });
                    }
                    self.publish(&result);
                }
                Err(err) => {
                    log::error!("{}: fetch failed: {}", self.source.name, err);
                    self.toasts
                        .error(format!("Не удалось загрузить данные: {}", err));
                    self.publish(&PageResult::empty(request.per_page));
                }
            }

            self.applying_global.set(false);
            self.loading.set(false);
        });
    }
}
