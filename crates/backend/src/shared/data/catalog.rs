//! Каталог записей в памяти процесса.
//!
//! Источник записей для списков фронтенда. Начальные данные читаются из
//! JSON-файла (или создаются тестовые), новые товары живут до перезапуска.

use contracts::domain::a001_client::aggregate::{Client, ClientDto};
use contracts::domain::a002_article::aggregate::{Article, ArticleDto};
use contracts::domain::a003_product::aggregate::{Product, ProductDto};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

static CATALOG: OnceCell<CatalogStore> = OnceCell::new();

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog has not been initialized")]
    NotInitialized,
    #[error("Catalog lock is poisoned")]
    Poisoned,
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Failed to read seed file {path}: {source}")]
    SeedRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse seed file: {0}")]
    SeedParse(#[from] serde_json::Error),
}

/// Содержимое seed-файла каталога
#[derive(Debug, Default, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub clients: Vec<ClientDto>,
    #[serde(default)]
    pub articles: Vec<ArticleDto>,
    #[serde(default)]
    pub products: Vec<ProductDto>,
}

impl CatalogSeed {
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::SeedRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(contents)?)
    }
}

#[derive(Debug, Default)]
pub struct Catalog {
    pub clients: Vec<Client>,
    pub articles: Vec<Article>,
    pub products: Vec<Product>,
}

impl Catalog {
    /// Все записи seed-файла проходят ту же валидацию, что и созданные через API
    pub fn from_seed(seed: CatalogSeed) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::default();
        for dto in &seed.clients {
            let client = Client::new_for_insert(dto);
            client.validate().map_err(CatalogError::Validation)?;
            catalog.clients.push(client);
        }
        for dto in &seed.articles {
            let article = Article::new_for_insert(dto);
            article.validate().map_err(CatalogError::Validation)?;
            catalog.articles.push(article);
        }
        for dto in &seed.products {
            let product = Product::new_for_insert(dto);
            product.validate().map_err(CatalogError::Validation)?;
            catalog.products.push(product);
        }
        Ok(catalog)
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty() && self.articles.is_empty() && self.products.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct CatalogStore {
    inner: RwLock<Catalog>,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: RwLock::new(catalog),
        }
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, Catalog>, CatalogError> {
        self.inner.read().map_err(|_| CatalogError::Poisoned)
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, Catalog>, CatalogError> {
        self.inner.write().map_err(|_| CatalogError::Poisoned)
    }
}

pub fn initialize_catalog(catalog: Catalog) -> anyhow::Result<()> {
    tracing::info!(
        clients = catalog.clients.len(),
        articles = catalog.articles.len(),
        products = catalog.products.len(),
        "Catalog initialized"
    );
    CATALOG
        .set(CatalogStore::new(catalog))
        .map_err(|_| anyhow::anyhow!("Catalog already initialized"))
}

pub fn get_catalog() -> Result<&'static CatalogStore, CatalogError> {
    CATALOG.get().ok_or(CatalogError::NotInitialized)
}

/// Пустой каталог, общий для всех тестов процесса
#[cfg(test)]
pub fn ensure_test_catalog() -> &'static CatalogStore {
    CATALOG.get_or_init(CatalogStore::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = r#"{
        "clients": [
            {"code": "CLT-1", "name": "João Silva", "taxId": "123456789", "email": "joao@example.pt",
             "phone": "", "city": "Lisboa", "active": true, "comment": null}
        ],
        "products": [
            {"reference": "PRD-1", "name": "Azeite", "category": "Mercearia",
             "prices": {"purchaseExTax": "4.00", "purchaseIncTax": "4.92", "saleExTax": "6.00",
                        "saleIncTax": "7.38", "marginOnCost": "50.00", "marginOnSale": "33.33"},
             "taxRate": "23", "stock": 5, "imageName": null, "comment": null}
        ]
    }"#;

    #[test]
    fn test_seed_parses_with_missing_sections() {
        let seed = CatalogSeed::from_json(SEED).unwrap();
        assert_eq!(seed.clients.len(), 1);
        assert!(seed.articles.is_empty());
        assert_eq!(seed.products.len(), 1);

        let catalog = Catalog::from_seed(seed).unwrap();
        assert_eq!(catalog.products[0].name(), "Azeite");
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_invalid_seed_record_rejected() {
        let seed = CatalogSeed::from_json(r#"{"articles": [{"code": "A", "title": " ", "author": "", "category": "", "published": false}]}"#).unwrap();
        assert!(matches!(Catalog::from_seed(seed), Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_missing_seed_file() {
        let err = CatalogSeed::from_file(Path::new("definitely/missing/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::SeedRead { .. }));
    }

    #[test]
    fn test_store_read_write() {
        let store = CatalogStore::default();
        store.write().unwrap().clients.push(Client::new_for_insert(&ClientDto {
            code: "C".into(),
            name: "Ana".into(),
            ..ClientDto::default()
        }));
        assert_eq!(store.read().unwrap().clients.len(), 1);
    }
}
