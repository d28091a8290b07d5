use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Client
        .route("/api/client", get(handlers::a001_client::list_all))
        .route(
            "/api/client/list",
            get(handlers::a001_client::list_paginated),
        )
        .route("/api/client/:id", get(handlers::a001_client::get_by_id))
        // A002 Article
        .route("/api/article", get(handlers::a002_article::list_all))
        .route(
            "/api/article/list",
            get(handlers::a002_article::list_paginated),
        )
        .route("/api/article/:id", get(handlers::a002_article::get_by_id))
        // A003 Product
        .route(
            "/api/product",
            get(handlers::a003_product::list_all).post(handlers::a003_product::create),
        )
        .route(
            "/api/product/list",
            get(handlers::a003_product::list_paginated),
        )
        .route("/api/product/:id", get(handlers::a003_product::get_by_id))
}
