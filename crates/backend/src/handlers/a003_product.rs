use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a003_product::aggregate::{Product, ProductDto, ProductId};
use contracts::domain::common::AggregateId;
use contracts::shared::list::{ListQuery, ListResponse};
use serde_json::json;

use crate::domain::a003_product;
use crate::shared::data::catalog::CatalogError;

/// GET /api/product
pub async fn list_all() -> Result<Json<Vec<Product>>, StatusCode> {
    match a003_product::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list products: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/product/list?limit=&offset=
pub async fn list_paginated(
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResponse<Product>>, StatusCode> {
    match a003_product::service::list_page(query).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list products page: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/product/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Product>, StatusCode> {
    let id = match ProductId::from_string(&id) {
        Ok(id) => id,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match a003_product::service::get_by_id(id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/product
pub async fn create(
    Json(dto): Json<ProductDto>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    match a003_product::service::create(dto).await {
        Ok(id) => Ok(Json(json!({"id": id.as_string()}))),
        Err(e) => match e.downcast_ref::<CatalogError>() {
            Some(CatalogError::Validation(msg)) => Err((StatusCode::BAD_REQUEST, msg.clone())),
            _ => {
                tracing::error!("Failed to create product: {}", e);
                Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::catalog::ensure_test_catalog;
    use contracts::domain::a003_product::aggregate::ProductPrices;

    #[tokio::test]
    async fn test_get_by_id_statuses() {
        ensure_test_catalog();
        let bad = get_by_id(Path("not-a-uuid".to_string())).await;
        assert_eq!(bad.unwrap_err(), StatusCode::BAD_REQUEST);

        let missing = get_by_id(Path(uuid::Uuid::new_v4().to_string())).await;
        assert_eq!(missing.unwrap_err(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_then_fetch() {
        ensure_test_catalog();
        let dto = ProductDto {
            reference: "TST-HANDLER".into(),
            name: "Broa de Milho".into(),
            prices: ProductPrices::default(),
            stock: 2,
            ..ProductDto::default()
        };
        let Json(created) = create(Json(dto)).await.unwrap();
        let id = created["id"].as_str().unwrap().to_string();

        let Json(product) = get_by_id(Path(id)).await.unwrap();
        assert_eq!(product.name(), "Broa de Milho");

        let Json(page) = list_paginated(Query(ListQuery::first_page(1))).await.unwrap();
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn test_create_validation_is_bad_request() {
        ensure_test_catalog();
        let dto = ProductDto {
            reference: "TST-NONAME".into(),
            ..ProductDto::default()
        };
        let (status, message) = create(Json(dto)).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!message.is_empty());
    }

    #[tokio::test]
    async fn test_create_with_overflowing_prices_is_bad_request() {
        ensure_test_catalog();
        let dto = ProductDto {
            reference: "TST-OVERFLOW".into(),
            name: "Sal Marinho".into(),
            prices: ProductPrices {
                purchase_ex_tax: rust_decimal::Decimal::new(1, 2),
                sale_ex_tax: rust_decimal::Decimal::MAX,
                ..ProductPrices::default()
            },
            stock: 1,
            ..ProductDto::default()
        };
        let (status, _) = create(Json(dto)).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
