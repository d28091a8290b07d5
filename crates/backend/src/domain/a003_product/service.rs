use super::repository;
use crate::shared::data::catalog::CatalogError;
use contracts::domain::a003_product::aggregate::{Product, ProductDto, ProductId, ProductPrices};
use contracts::shared::list::{ListQuery, ListResponse};
use contracts::shared::pricing::{margins, round2, PriceEdit, PriceReconciler};

/// Создание товара из формы.
///
/// Цены проверяются до любых вычислений, затем округляются до копеек;
/// наценка и маржа пересчитываются по ценам без НДС.
pub async fn create(dto: ProductDto) -> anyhow::Result<ProductId> {
    let mut aggregate = Product::new_for_insert(&dto);
    aggregate.validate().map_err(CatalogError::Validation)?;
    aggregate.prices = normalize_prices(aggregate.prices);

    let id = repository::insert_unique(&aggregate).await?;
    tracing::info!(id = %id.value(), reference = aggregate.reference(), "Product created");
    Ok(id)
}

fn normalize_prices(prices: ProductPrices) -> ProductPrices {
    let purchase_ex_tax = round2(prices.purchase_ex_tax);
    let sale_ex_tax = round2(prices.sale_ex_tax);
    let (margin_on_cost, margin_on_sale) = margins(Some(purchase_ex_tax), Some(sale_ex_tax));
    ProductPrices {
        purchase_ex_tax,
        purchase_inc_tax: round2(prices.purchase_inc_tax),
        sale_ex_tax,
        sale_inc_tax: round2(prices.sale_inc_tax),
        margin_on_cost,
        margin_on_sale,
    }
}

pub async fn get_by_id(id: ProductId) -> anyhow::Result<Option<Product>> {
    repository::get_by_id(id).await
}

/// Получение списка всех товаров (по артикулу)
pub async fn list_all() -> anyhow::Result<Vec<Product>> {
    repository::list_all().await
}

pub async fn list_page(query: ListQuery) -> anyhow::Result<ListResponse<Product>> {
    let all = repository::list_all().await?;
    Ok(query.slice(&all))
}

/// Вставка тестовых данных. Цены с НДС считаются так же, как в форме товара.
pub async fn insert_test_data() -> anyhow::Result<()> {
    let data = vec![
        ("PRD-001", "Azeite Virgem Extra 750ml", "Mercearia", "4.00", "6.00", 40),
        ("PRD-002", "Bacalhau Graúdo 1kg", "Peixaria", "9.50", "14.90", 25),
        ("PRD-003", "Vinho Tinto Douro Reserva", "Bebidas", "7.20", "12.50", 60),
        ("PRD-004", "Queijo da Serra", "Charcutaria", "11.00", "17.80", 8),
        ("PRD-005", "Pastéis de Nata (6 un.)", "Pastelaria", "2.10", "3.90", 30),
        ("PRD-006", "Café Moído Torrefação Lenta", "Mercearia", "3.35", "5.49", 55),
        ("PRD-007", "Sardinhas em Conserva", "Conservas", "1.15", "2.29", 120),
        ("PRD-008", "Mel de Rosmaninho", "Mercearia", "5.60", "8.95", 14),
        ("PRD-009", "Chouriço de Porco Preto", "Charcutaria", "6.40", "10.20", 0),
        ("PRD-010", "Água das Pedras 1L", "Bebidas", "0.55", "0.99", 200),
        ("PRD-011", "Pão de Ló de Ovar", "Pastelaria", "4.80", "7.95", 6),
        ("PRD-012", "Ginjinha de Óbidos", "Bebidas", "8.10", "13.40", 18),
    ];

    let reconciler = PriceReconciler::default();
    for (reference, name, category, purchase, sale, stock) in data {
        let state = reconciler.replay([
            PriceEdit::EditPurchaseExTax(purchase.into()),
            PriceEdit::EditSaleExTax(sale.into()),
        ]);
        let prices = state
            .to_prices()
            .ok_or_else(|| anyhow::anyhow!("Invalid test prices for {}", reference))?;

        create(ProductDto {
            reference: reference.into(),
            name: name.into(),
            category: category.into(),
            prices,
            tax_rate: reconciler.tax_rate(),
            stock,
            ..ProductDto::default()
        })
        .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::catalog::ensure_test_catalog;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn dto(reference: &str) -> ProductDto {
        ProductDto {
            reference: reference.into(),
            name: "Azeite".into(),
            category: "Mercearia".into(),
            prices: ProductPrices {
                purchase_ex_tax: dec("50"),
                purchase_inc_tax: dec("61.5"),
                sale_ex_tax: dec("75"),
                sale_inc_tax: dec("92.25"),
                margin_on_cost: dec("1"),
                margin_on_sale: dec("1"),
            },
            stock: 3,
            ..ProductDto::default()
        }
    }

    #[tokio::test]
    async fn test_create_recomputes_margins() {
        ensure_test_catalog();
        let id = create(dto("TST-MARGIN")).await.unwrap();
        let product = get_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.prices.margin_on_cost, dec("50.00"));
        assert_eq!(product.prices.margin_on_sale, dec("33.33"));
        assert_eq!(product.prices.purchase_inc_tax, dec("61.50"));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_and_duplicate() {
        ensure_test_catalog();
        let mut unnamed = dto("TST-UNNAMED");
        unnamed.name = String::new();
        let err = create(unnamed).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::Validation(_))
        ));

        create(dto("TST-DUP")).await.unwrap();
        let err = create(dto("tst-dup")).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range_price() {
        ensure_test_catalog();
        let mut huge = dto("TST-HUGE");
        huge.prices.purchase_ex_tax = dec("0.01");
        huge.prices.sale_ex_tax = Decimal::MAX;
        let err = create(huge).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::Validation(_))
        ));
        assert!(list_all()
            .await
            .unwrap()
            .iter()
            .all(|p| p.reference() != "TST-HUGE"));
    }

    #[tokio::test]
    async fn test_concurrent_duplicates_store_one() {
        ensure_test_catalog();
        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let reference = if i % 2 == 0 { "TST-RACE" } else { "tst-race" };
                tokio::spawn(create(dto(reference)))
            })
            .collect();
        let mut created = 0;
        for task in tasks {
            if task.await.unwrap().is_ok() {
                created += 1;
            }
        }
        assert_eq!(created, 1);
        let stored = list_all()
            .await
            .unwrap()
            .iter()
            .filter(|p| p.reference().eq_ignore_ascii_case("tst-race"))
            .count();
        assert_eq!(stored, 1);
    }

    #[tokio::test]
    async fn test_list_page_reports_total() {
        ensure_test_catalog();
        create(dto("TST-PAGE-1")).await.unwrap();
        create(dto("TST-PAGE-2")).await.unwrap();
        let page = list_page(ListQuery::first_page(1)).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert!(page.total >= 2);
        assert!(!page.is_complete());
    }
}
