//! Модель таблицы со страницами и двумя режимами отображения.
//!
//! `Full` - все колонки; `Compact` (узкий экран) - одна колонка и кнопка
//! просмотра карточки записи. Режим не влияет на состав страницы.

use serde::{Deserialize, Serialize};

use super::column::{Column, ColumnSpec, TableRecord};
use super::pagination::{Page, Pagination};

/// Ширина окна (px), ниже которой таблица показывается в компактном режиме
pub const COMPACT_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    #[default]
    Full,
    Compact,
}

impl DisplayMode {
    pub fn for_viewport(width_px: f64) -> Self {
        if width_px < COMPACT_BREAKPOINT_PX {
            DisplayMode::Compact
        } else {
            DisplayMode::Full
        }
    }

    pub fn is_compact(&self) -> bool {
        matches!(self, DisplayMode::Compact)
    }
}

/// Строка таблицы, готовая к выводу
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub key: String,
    pub cells: Vec<String>,
    /// В компактном режиме у строки есть кнопка карточки
    pub has_detail: bool,
}

/// Строка карточки записи: заголовок колонки и значение
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    pub label: &'static str,
    pub value: String,
}

pub struct TablePresenter<T> {
    columns: Vec<Column<T>>,
    compact_key: &'static str,
    pagination: Pagination,
}

impl<T> Clone for TablePresenter<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            compact_key: self.compact_key,
            pagination: self.pagination,
        }
    }
}

impl<T: TableRecord> TablePresenter<T> {
    /// В компактном режиме по умолчанию остаётся первая колонка
    pub fn new(page_size: usize) -> Self {
        let columns = T::columns();
        let compact_key = columns.first().map(|c| c.key).unwrap_or_default();
        Self {
            columns,
            compact_key,
            pagination: Pagination::new(page_size),
        }
    }

    /// Колонка для компактного режима. Неизвестный ключ игнорируется.
    pub fn with_compact_column(mut self, key: &'static str) -> Self {
        if self.columns.iter().any(|c| c.key == key) {
            self.compact_key = key;
        }
        self
    }

    pub fn compact_key(&self) -> &'static str {
        self.compact_key
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn pagination_mut(&mut self) -> &mut Pagination {
        &mut self.pagination
    }

    fn visible_columns(&self, mode: DisplayMode) -> Vec<&Column<T>> {
        match mode {
            DisplayMode::Full => self.columns.iter().collect(),
            DisplayMode::Compact => self
                .columns
                .iter()
                .filter(|c| c.key == self.compact_key)
                .collect(),
        }
    }

    pub fn headers(&self, mode: DisplayMode) -> Vec<ColumnSpec> {
        self.visible_columns(mode).into_iter().map(|c| c.spec()).collect()
    }

    pub fn rows(&self, mode: DisplayMode, items: &[T]) -> Vec<TableRow> {
        let columns = self.visible_columns(mode);
        items
            .iter()
            .map(|record| TableRow {
                key: record.row_key(),
                cells: columns.iter().map(|c| c.read(record).to_string()).collect(),
                has_detail: mode.is_compact(),
            })
            .collect()
    }

    /// Карточка записи: все колонки с подписями
    pub fn detail(&self, record: &T) -> Vec<DetailLine> {
        self.columns
            .iter()
            .map(|c| DetailLine {
                label: c.label,
                value: c.read(record).to_string(),
            })
            .collect()
    }

    /// Текущая страница коллекции (с прижатием номера страницы)
    pub fn present<'a>(&mut self, records: &'a [T]) -> Page<'a, T> {
        self.pagination.paginate(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::CellValue;

    #[derive(Debug, Clone)]
    struct Item {
        id: usize,
        name: String,
        qty: i64,
    }

    impl TableRecord for Item {
        fn columns() -> Vec<Column<Self>> {
            vec![
                Column::new("id", "№", |r: &Item| CellValue::Number(r.id as i64)),
                Column::new("name", "Наименование", |r: &Item| CellValue::text(r.name.clone())),
                Column::new("qty", "Количество", |r: &Item| CellValue::Number(r.qty)),
            ]
        }

        fn search_fields() -> Vec<&'static str> {
            vec!["name"]
        }

        fn row_key(&self) -> String {
            self.id.to_string()
        }
    }

    fn items(n: usize) -> Vec<Item> {
        (1..=n)
            .map(|id| Item {
                id,
                name: format!("Товар {id}"),
                qty: id as i64 * 2,
            })
            .collect()
    }

    #[test]
    fn test_display_mode_for_viewport() {
        assert_eq!(DisplayMode::for_viewport(1280.0), DisplayMode::Full);
        assert_eq!(DisplayMode::for_viewport(768.0), DisplayMode::Full);
        assert_eq!(DisplayMode::for_viewport(420.0), DisplayMode::Compact);
    }

    #[test]
    fn test_full_and_compact_rows_share_page_items() {
        let all = items(25);
        let mut presenter = TablePresenter::<Item>::new(10).with_compact_column("name");
        presenter.pagination_mut().set_total(all.len());
        presenter.pagination_mut().go_to(2);
        let page = presenter.present(&all);
        assert_eq!(page.items.len(), 10);

        let full = presenter.rows(DisplayMode::Full, page.items);
        let compact = presenter.rows(DisplayMode::Compact, page.items);
        assert_eq!(full.len(), compact.len());
        assert_eq!(full[0].cells, vec!["11", "Товар 11", "22"]);
        assert_eq!(compact[0].cells, vec!["Товар 11"]);
        assert!(compact[0].has_detail);
        assert!(!full[0].has_detail);
        assert_eq!(full[0].key, compact[0].key);
    }

    #[test]
    fn test_headers_by_mode() {
        let presenter = TablePresenter::<Item>::new(10);
        assert_eq!(presenter.headers(DisplayMode::Full).len(), 3);
        let compact = presenter.headers(DisplayMode::Compact);
        assert_eq!(compact.len(), 1);
        assert_eq!(compact[0].key, "id");
    }

    #[test]
    fn test_unknown_compact_column_is_ignored() {
        let presenter = TablePresenter::<Item>::new(10).with_compact_column("missing");
        assert_eq!(presenter.compact_key(), "id");
    }

    #[test]
    fn test_detail_lists_every_column() {
        let presenter = TablePresenter::<Item>::new(10);
        let all = items(3);
        let detail = presenter.detail(&all[2]);
        assert_eq!(
            detail,
            vec![
                DetailLine { label: "№", value: "3".into() },
                DetailLine { label: "Наименование", value: "Товар 3".into() },
                DetailLine { label: "Количество", value: "6".into() },
            ]
        );
    }
}
