use contracts::domain::a002_article::aggregate::{Article, ArticleId};

use crate::shared::data::catalog::get_catalog;

/// Сначала свежие публикации, черновики в конце
pub async fn list_all() -> anyhow::Result<Vec<Article>> {
    let catalog = get_catalog()?;
    let mut items: Vec<Article> = catalog
        .read()?
        .articles
        .iter()
        .filter(|a| !a.base.metadata.is_deleted)
        .cloned()
        .collect();
    items.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    Ok(items)
}

pub async fn get_by_id(id: ArticleId) -> anyhow::Result<Option<Article>> {
    let catalog = get_catalog()?;
    let found = catalog
        .read()?
        .articles
        .iter()
        .find(|a| a.base.id == id && !a.base.metadata.is_deleted)
        .cloned();
    Ok(found)
}

pub async fn insert(aggregate: &Article) -> anyhow::Result<ArticleId> {
    let catalog = get_catalog()?;
    catalog.write()?.articles.push(aggregate.clone());
    Ok(aggregate.base.id)
}
