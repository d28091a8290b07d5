use contracts::domain::a002_article::aggregate::Article;
use contracts::shared::list::{ListQuery, ListResponse};

use crate::shared::api_utils::{get_json, get_list_page};

const API_PATH: &str = "/api/article";

/// Страница списка статей
pub async fn fetch_page(query: ListQuery) -> Result<ListResponse<Article>, String> {
    get_list_page(API_PATH, query).await
}

/// Все статьи
pub async fn fetch_all() -> Result<Vec<Article>, String> {
    get_json(API_PATH).await
}
