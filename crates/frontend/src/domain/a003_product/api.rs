use contracts::domain::a003_product::aggregate::Product;
use contracts::shared::list::{ListQuery, ListResponse};

use crate::shared::api_utils::{get_json, get_list_page};

const API_PATH: &str = "/api/product";

/// Страница списка товаров
pub async fn fetch_page(query: ListQuery) -> Result<ListResponse<Product>, String> {
    get_list_page(API_PATH, query).await
}

/// Все товары
pub async fn fetch_all() -> Result<Vec<Product>, String> {
    get_json(API_PATH).await
}
