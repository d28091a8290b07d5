//! Фильтрация списков записей строкой поиска.
//!
//! Запись попадает в результат, если хотя бы одно из настроенных полей
//! содержит все токены запроса. Порядок записей сохраняется.

use super::debounce::Debounce;
use super::matcher::NormalizedQuery;
use crate::shared::table::TableRecord;

/// Проверка одной записи по подготовленному запросу (OR по полям)
pub fn record_matches<T: TableRecord>(record: &T, fields: &[&str], query: &NormalizedQuery) -> bool {
    if query.is_empty() {
        return true;
    }
    fields.iter().any(|key| {
        record
            .field_text(key)
            .map(|text| query.matches(&text))
            .unwrap_or(false)
    })
}

/// Отфильтрованная копия списка в исходном порядке
pub fn filter_records<T: TableRecord + Clone>(records: &[T], fields: &[&str], query: &str) -> Vec<T> {
    let query = NormalizedQuery::new(query);
    if query.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| record_matches(*r, fields, &query))
        .cloned()
        .collect()
}

/// Загруженные записи списка.
///
/// Сначала может прийти только первая страница (`Partial`), затем полный
/// список (`Complete`). Запрос поиска хранится отдельно в [`RecordFilter`],
/// поэтому замена коллекции его не сбрасывает.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedRecords<T> {
    NotLoaded,
    Partial(Vec<T>),
    Complete(Vec<T>),
}

impl<T> Default for LoadedRecords<T> {
    fn default() -> Self {
        LoadedRecords::NotLoaded
    }
}

impl<T> LoadedRecords<T> {
    pub fn items(&self) -> &[T] {
        match self {
            LoadedRecords::NotLoaded => &[],
            LoadedRecords::Partial(items) | LoadedRecords::Complete(items) => items,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, LoadedRecords::Complete(_))
    }

    pub fn is_loaded(&self) -> bool {
        !matches!(self, LoadedRecords::NotLoaded)
    }

    /// Первая страница не должна затирать уже загруженный полный список
    pub fn receive_partial(&mut self, items: Vec<T>) {
        if !self.is_complete() {
            *self = LoadedRecords::Partial(items);
        }
    }

    pub fn receive_complete(&mut self, items: Vec<T>) {
        *self = LoadedRecords::Complete(items);
    }
}

/// Состояние строки поиска одного списка: набранный текст, действующий
/// запрос и таймер debounce между ними
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFilter {
    fields: Vec<&'static str>,
    raw: String,
    effective: String,
    debounce: Debounce<String>,
}

impl RecordFilter {
    pub fn new(fields: Vec<&'static str>) -> Self {
        Self {
            fields,
            raw: String::new(),
            effective: String::new(),
            debounce: Debounce::default(),
        }
    }

    /// Поля поиска берутся из описания записи
    pub fn for_record<T: TableRecord>() -> Self {
        Self::new(T::search_fields())
    }

    pub fn with_window(mut self, window_ms: u64) -> Self {
        self.debounce = Debounce::new(window_ms);
        self
    }

    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }

    /// Текст в поле ввода
    pub fn raw_query(&self) -> &str {
        &self.raw
    }

    /// Запрос, по которому фактически фильтруется список
    pub fn effective_query(&self) -> &str {
        &self.effective
    }

    pub fn is_settling(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Нажатие клавиши: перезапускает окно ожидания.
    /// Возвращает время (мс), когда запрос станет действующим.
    pub fn type_query(&mut self, raw: impl Into<String>, now_ms: u64) -> u64 {
        self.raw = raw.into();
        self.debounce.push(self.raw.clone(), now_ms)
    }

    /// Проверка таймера. Возвращает `true`, если действующий запрос изменился
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.debounce.poll(now_ms) {
            Some(q) => self.promote(q),
            None => false,
        }
    }

    /// Срабатывание таймера: ожидающий запрос становится действующим сразу
    pub fn settle(&mut self) -> bool {
        match self.debounce.flush() {
            Some(q) => self.promote(q),
            None => false,
        }
    }

    /// Очистка поля: без ожидания
    pub fn clear(&mut self) -> bool {
        self.raw.clear();
        self.debounce.cancel();
        self.promote(String::new())
    }

    fn promote(&mut self, query: String) -> bool {
        if self.effective == query {
            return false;
        }
        self.effective = query;
        true
    }

    pub fn apply<T: TableRecord + Clone>(&self, records: &[T]) -> Vec<T> {
        filter_records(records, &self.fields, &self.effective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::{CellValue, Column};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        city: &'static str,
        note: Option<&'static str>,
    }

    impl TableRecord for Row {
        fn columns() -> Vec<Column<Self>> {
            vec![
                Column::new("name", "Имя", |r: &Row| CellValue::text(r.name)),
                Column::new("city", "Город", |r: &Row| CellValue::text(r.city)),
                Column::new("note", "Примечание", |r: &Row| CellValue::opt_text(r.note)),
            ]
        }

        fn search_fields() -> Vec<&'static str> {
            vec!["name", "city", "note"]
        }

        fn row_key(&self) -> String {
            self.id.to_string()
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "João Silva", city: "Lisboa", note: None },
            Row { id: 2, name: "Maria Conceição", city: "Porto", note: Some("VIP") },
            Row { id: 3, name: "Pedro Gonçalves", city: "Lisboa", note: None },
            Row { id: 4, name: "Ana Sousa", city: "Évora", note: Some("joão indicou") },
        ]
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    fn is_subsequence(sub: &[Row], all: &[Row]) -> bool {
        let mut it = all.iter();
        sub.iter().all(|s| it.any(|a| a == s))
    }

    #[test]
    fn test_or_across_fields_and_within_field() {
        let all = rows();
        let fields = Row::search_fields();
        assert_eq!(ids(&filter_records(&all, &fields, "joao")), vec![1, 4]);
        assert_eq!(ids(&filter_records(&all, &fields, "lisboa")), vec![1, 3]);
        assert_eq!(ids(&filter_records(&all, &fields, "evora")), vec![4]);
        // Токены не складываются из разных полей
        assert!(filter_records(&all, &fields, "joao lisboa").is_empty());
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let all = rows();
        assert_eq!(filter_records(&all, &["note"], "  "), all);
    }

    #[test]
    fn test_only_configured_fields_searched() {
        let all = rows();
        assert!(filter_records(&all, &["name"], "porto").is_empty());
        assert_eq!(ids(&filter_records(&all, &["city"], "porto")), vec![2]);
    }

    #[test]
    fn test_order_preserved_and_idempotent() {
        let all = rows();
        let fields = Row::search_fields();
        for q in ["a", "o", "lisboa", "ç", "zzz", ""] {
            let once = filter_records(&all, &fields, q);
            assert!(is_subsequence(&once, &all), "query {q:?}");
            assert_eq!(filter_records(&once, &fields, q), once, "query {q:?}");
        }
    }

    #[test]
    fn test_debounced_typing_produces_one_update() {
        let mut f = RecordFilter::for_record::<Row>();
        let mut updates = Vec::new();

        f.type_query("a", 0);
        f.type_query("ab", 120);
        f.type_query("abc", 250);
        for now in (0..=1000).step_by(5) {
            if f.tick(now) {
                updates.push(f.effective_query().to_string());
            }
        }

        assert_eq!(updates, vec!["abc".to_string()]);
        assert_eq!(f.raw_query(), "abc");
    }

    #[test]
    fn test_effective_query_lags_raw_query() {
        let all = rows();
        let mut f = RecordFilter::for_record::<Row>();
        f.type_query("porto", 1_000);
        assert_eq!(f.apply(&all).len(), all.len());
        assert!(f.is_settling());

        assert!(!f.tick(1_299));
        assert!(f.tick(1_300));
        assert_eq!(ids(&f.apply(&all)), vec![2]);
    }

    #[test]
    fn test_settle_and_clear() {
        let mut f = RecordFilter::for_record::<Row>();
        f.type_query("ana", 0);
        assert!(f.settle());
        assert_eq!(f.effective_query(), "ana");
        assert!(!f.settle());

        f.type_query("anab", 10);
        assert!(f.clear());
        assert_eq!(f.effective_query(), "");
        assert!(!f.tick(10_000));
    }

    #[test]
    fn test_partial_then_complete_keeps_query() {
        let all = rows();
        let mut f = RecordFilter::for_record::<Row>();
        let mut loaded = LoadedRecords::default();
        assert!(!loaded.is_loaded());

        loaded.receive_partial(all[..2].to_vec());
        f.type_query("lisboa", 0);
        f.tick(300);
        assert_eq!(ids(&f.apply(loaded.items())), vec![1]);

        loaded.receive_complete(all.clone());
        assert!(loaded.is_complete());
        assert_eq!(f.effective_query(), "lisboa");
        assert_eq!(ids(&f.apply(loaded.items())), vec![1, 3]);

        // Поздний ответ первой страницы не откатывает полный список
        loaded.receive_partial(all[..1].to_vec());
        assert_eq!(loaded.items().len(), 4);
    }
}
