use contracts::domain::a003_product::aggregate::{Product, ProductId};

use crate::shared::data::catalog::{get_catalog, CatalogError};

pub async fn list_all() -> anyhow::Result<Vec<Product>> {
    let catalog = get_catalog()?;
    let mut items: Vec<Product> = catalog
        .read()?
        .products
        .iter()
        .filter(|p| !p.base.metadata.is_deleted)
        .cloned()
        .collect();
    items.sort_by(|a, b| a.base.code.cmp(&b.base.code));
    Ok(items)
}

pub async fn get_by_id(id: ProductId) -> anyhow::Result<Option<Product>> {
    let catalog = get_catalog()?;
    let found = catalog
        .read()?
        .products
        .iter()
        .find(|p| p.base.id == id && !p.base.metadata.is_deleted)
        .cloned();
    Ok(found)
}

fn same_reference(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Вставка с проверкой уникальности артикула под одной блокировкой записи
pub async fn insert_unique(aggregate: &Product) -> anyhow::Result<ProductId> {
    let catalog = get_catalog()?;
    let mut guard = catalog.write()?;
    let duplicate = guard
        .products
        .iter()
        .any(|p| !p.base.metadata.is_deleted && same_reference(&p.base.code, aggregate.reference()));
    if duplicate {
        return Err(CatalogError::Validation(format!(
            "Артикул {} уже существует",
            aggregate.reference()
        ))
        .into());
    }
    guard.products.push(aggregate.clone());
    Ok(aggregate.base.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_comparison_folds_unicode_case() {
        assert!(same_reference("AÇO-1", "aço-1"));
        assert!(same_reference("Prd-7", "PRD-7"));
        assert!(!same_reference("PRD-7", "PRD-8"));
    }
}
