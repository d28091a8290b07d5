use contracts::domain::a003_product::aggregate::{Product, ProductDto};
use serde::Deserialize;

use crate::shared::api_utils::{get_json, post_json};

#[derive(Debug, Deserialize)]
struct CreatedResponse {
    id: String,
}

pub async fn fetch_by_id(id: String) -> Result<Product, String> {
    get_json(&format!("/api/product/{}", id)).await
}

/// Создание товара, возвращает id новой записи
pub async fn save_form(dto: ProductDto) -> Result<String, String> {
    let created: CreatedResponse = post_json("/api/product", &dto).await?;
    Ok(created.id)
}
