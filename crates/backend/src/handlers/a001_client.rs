use axum::{
    extract::{Path, Query},
    Json,
};
use contracts::domain::a001_client::aggregate::{Client, ClientId};
use contracts::domain::common::AggregateId;
use contracts::shared::list::{ListQuery, ListResponse};

use crate::domain::a001_client;

/// GET /api/client
pub async fn list_all() -> Result<Json<Vec<Client>>, axum::http::StatusCode> {
    match a001_client::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list clients: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/client/list?limit=&offset=
pub async fn list_paginated(
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResponse<Client>>, axum::http::StatusCode> {
    match a001_client::service::list_page(query).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list clients page: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/client/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Client>, axum::http::StatusCode> {
    let id = match ClientId::from_string(&id) {
        Ok(id) => id,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a001_client::service::get_by_id(id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
