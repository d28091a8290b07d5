pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use shared::config::Config;
use shared::data::catalog::{self, Catalog, CatalogSeed};

/// Начальное наполнение каталога: seed-файл, иначе тестовые данные
async fn initialize_catalog(config: &Config) -> anyhow::Result<()> {
    if let Some(path) = config.seed_path() {
        if path.exists() {
            tracing::info!("Loading catalog seed from: {}", path.display());
            let seed = CatalogSeed::from_file(&path)?;
            return catalog::initialize_catalog(Catalog::from_seed(seed)?);
        }
        tracing::warn!("Catalog seed file not found: {}", path.display());
    }

    catalog::initialize_catalog(Catalog::default())?;

    if config.catalog.seed_test_data {
        tracing::info!("Inserting test data");
        domain::a001_client::service::insert_test_data().await?;
        domain::a002_article::service::insert_test_data().await?;
        domain::a003_product::service::insert_test_data().await?;
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    initialize_catalog(&config).await?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes()
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors);

    let addr = config.bind_address();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: {} is already in use. Please ensure no other process is using this port.",
                    addr
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
