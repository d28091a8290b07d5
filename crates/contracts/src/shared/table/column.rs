use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::pricing::money::format_fixed2;

/// Примитивное значение ячейки таблицы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Number(i64),
    Money(Decimal),
    Bool(bool),
    Empty,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// `None` и пустая строка дают `Empty`
    pub fn opt_text(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => CellValue::Text(v.to_string()),
            _ => CellValue::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Money(d) => f.write_str(&format_fixed2(*d)),
            CellValue::Bool(true) => f.write_str("Да"),
            CellValue::Bool(false) => f.write_str("Нет"),
            CellValue::Empty => f.write_str("—"),
        }
    }
}

/// Пара ключ/заголовок колонки, без доступа к данным
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub label: &'static str,
}

/// Колонка таблицы: ключ, заголовок и функция чтения значения из записи
pub struct Column<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub value: fn(&T) -> CellValue,
}

impl<T> Column<T> {
    pub const fn new(key: &'static str, label: &'static str, value: fn(&T) -> CellValue) -> Self {
        Self { key, label, value }
    }

    pub fn read(&self, record: &T) -> CellValue {
        (self.value)(record)
    }

    pub fn spec(&self) -> ColumnSpec {
        ColumnSpec {
            key: self.key,
            label: self.label,
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .finish()
    }
}

/// Запись, которую можно показать в таблице и отфильтровать поиском
pub trait TableRecord: Sized {
    /// Колонки в порядке отображения
    fn columns() -> Vec<Column<Self>>;

    /// Ключи полей, по которым работает строка поиска
    fn search_fields() -> Vec<&'static str>;

    /// Уникальный ключ строки (id записи)
    fn row_key(&self) -> String;

    fn field(&self, key: &str) -> Option<CellValue> {
        Self::columns()
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.read(self))
    }

    /// Текст поля для поиска; пустые значения не участвуют в поиске
    fn field_text(&self, key: &str) -> Option<String> {
        match self.field(key)? {
            CellValue::Empty => None,
            value => Some(value.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::text("abc").to_string(), "abc");
        assert_eq!(CellValue::Number(42).to_string(), "42");
        assert_eq!(CellValue::Money(Decimal::new(1235, 1)).to_string(), "123.50");
        assert_eq!(CellValue::Bool(true).to_string(), "Да");
        assert_eq!(CellValue::Empty.to_string(), "—");
        assert!(CellValue::opt_text(Some("")).is_empty());
        assert!(CellValue::opt_text(None).is_empty());
    }
}
