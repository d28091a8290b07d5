use crate::domain::common::{AggregateId, BaseAggregate};
use crate::shared::table::{CellValue, Column, TableRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор статьи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleId(pub Uuid);

impl ArticleId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ArticleId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ArticleId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Статья витрины (новости, обзоры)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(flatten)]
    pub base: BaseAggregate<ArticleId>,

    pub author: String,
    pub category: String,
    pub published: bool,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
}

impl Article {
    pub fn new_for_insert(dto: &ArticleDto) -> Self {
        let base = BaseAggregate::new(ArticleId::new_v4(), dto.code.clone(), dto.title.clone());
        Self {
            base,
            author: dto.author.clone(),
            category: dto.category.clone(),
            published: dto.published,
            published_at: dto.published.then(Utc::now),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Заголовок не может быть пустым".into());
        }
        Ok(())
    }
}

impl TableRecord for Article {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("title", "Заголовок", |a: &Article| CellValue::text(a.base.description.clone())),
            Column::new("author", "Автор", |a: &Article| CellValue::opt_text(Some(a.author.as_str()))),
            Column::new("category", "Категория", |a: &Article| {
                CellValue::opt_text(Some(a.category.as_str()))
            }),
            Column::new("published", "Опубликована", |a: &Article| CellValue::Bool(a.published)),
            Column::new("published_at", "Дата публикации", |a: &Article| match a.published_at {
                Some(dt) => CellValue::Text(dt.format("%Y-%m-%d").to_string()),
                None => CellValue::Empty,
            }),
        ]
    }

    fn search_fields() -> Vec<&'static str> {
        vec!["title", "author", "category"]
    }

    fn row_key(&self) -> String {
        self.to_string_id()
    }
}

// ============================================================================
// DTO
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleDto {
    pub code: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub published: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_at_set_only_for_published() {
        let mut dto = ArticleDto {
            code: "ART-1".into(),
            title: "Novidades de Verão".into(),
            author: "Inês".into(),
            category: "Notícias".into(),
            published: true,
        };
        assert!(Article::new_for_insert(&dto).published_at.is_some());

        dto.published = false;
        let draft = Article::new_for_insert(&dto);
        assert!(draft.published_at.is_none());
        assert_eq!(draft.field("published_at"), Some(CellValue::Empty));
        assert!(draft.validate().is_ok());
    }
}
