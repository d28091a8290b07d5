use axum::{
    extract::{Path, Query},
    Json,
};
use contracts::domain::a002_article::aggregate::{Article, ArticleId};
use contracts::domain::common::AggregateId;
use contracts::shared::list::{ListQuery, ListResponse};

use crate::domain::a002_article;

/// GET /api/article
pub async fn list_all() -> Result<Json<Vec<Article>>, axum::http::StatusCode> {
    match a002_article::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list articles: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/article/list?limit=&offset=
pub async fn list_paginated(
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResponse<Article>>, axum::http::StatusCode> {
    match a002_article::service::list_page(query).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list articles page: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/article/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Article>, axum::http::StatusCode> {
    let id = match ArticleId::from_string(&id) {
        Ok(id) => id,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a002_article::service::get_by_id(id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
