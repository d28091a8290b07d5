//! Состояние экрана-списка: загруженные записи, строка поиска, ошибка.
//!
//! Записи приходят в два шага: первая страница (`/list?limit=`), затем вся
//! коллекция. Набранный запрос при этом не теряется и применяется заново.

use contracts::shared::list::{ListQuery, ListResponse};
use contracts::shared::search::{filter_records, LoadedRecords, RecordFilter};
use contracts::shared::table::{TableRecord, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;
use std::future::Future;

pub struct ListState<T: Send + Sync + 'static> {
    pub records: RwSignal<LoadedRecords<T>>,
    pub filter: RwSignal<RecordFilter>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<T: Send + Sync + 'static> Clone for ListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListState<T> {}

impl<T> ListState<T>
where
    T: TableRecord + Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            records: RwSignal::new(LoadedRecords::default()),
            filter: RwSignal::new(RecordFilter::for_record::<T>()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Действующий запрос; меняется только после debounce
    pub fn effective_query(&self) -> Memo<String> {
        let filter = self.filter;
        Memo::new(move |_| filter.with(|f| f.effective_query().to_string()))
    }

    /// Записи, прошедшие фильтр, в исходном порядке
    pub fn filtered(&self) -> Signal<Vec<T>> {
        let records = self.records;
        let filter = self.filter;
        let query = self.effective_query();
        Signal::derive(move || {
            let query = query.get();
            let fields = filter.with_untracked(|f| f.fields().to_vec());
            records.with(|r| filter_records(r.items(), &fields, &query))
        })
    }

    /// Загрузка в два шага: первая страница, затем вся коллекция
    pub fn load<P, A, F>(&self, first_page: P, fetch_all: A)
    where
        P: Future<Output = Result<ListResponse<T>, String>> + 'static,
        A: FnOnce() -> F + 'static,
        F: Future<Output = Result<Vec<T>, String>> + 'static,
    {
        let this = *self;
        this.loading.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match first_page.await {
                Ok(page) if page.is_complete() => {
                    this.records.update(|r| r.receive_complete(page.items));
                    this.loading.set(false);
                    return;
                }
                Ok(page) => {
                    log::debug!("first page: {} of {}", page.items.len(), page.total);
                    this.records.update(|r| r.receive_partial(page.items));
                }
                Err(e) => log::warn!("first page failed: {}", e),
            }

            match fetch_all().await {
                Ok(items) => this.records.update(|r| r.receive_complete(items)),
                Err(e) => this.error.set(Some(e)),
            }
            this.loading.set(false);
        });
    }
}

impl<T> Default for ListState<T>
where
    T: TableRecord + Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Запрос первой страницы списка
pub fn first_page_query() -> ListQuery {
    ListQuery::first_page(DEFAULT_PAGE_SIZE)
}
