use contracts::domain::a001_client::aggregate::Client;
use contracts::shared::list::{ListQuery, ListResponse};

use crate::shared::api_utils::{get_json, get_list_page};

const API_PATH: &str = "/api/client";

/// Страница списка клиентов
pub async fn fetch_page(query: ListQuery) -> Result<ListResponse<Client>, String> {
    get_list_page(API_PATH, query).await
}

/// Все клиенты
pub async fn fetch_all() -> Result<Vec<Client>, String> {
    get_json(API_PATH).await
}
