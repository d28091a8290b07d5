use crate::domain::common::{AggregateId, BaseAggregate};
use crate::shared::pricing::DEFAULT_TAX_RATE;
use crate::shared::table::{CellValue, Column, TableRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Value objects
// ============================================================================

/// Верхняя граница цены в каталоге (миллиард)
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Цены товара с НДС и без, наценка и маржа (в процентах)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductPrices {
    #[serde(rename = "purchaseExTax")]
    pub purchase_ex_tax: Decimal,
    #[serde(rename = "purchaseIncTax")]
    pub purchase_inc_tax: Decimal,
    #[serde(rename = "saleExTax")]
    pub sale_ex_tax: Decimal,
    #[serde(rename = "saleIncTax")]
    pub sale_inc_tax: Decimal,
    #[serde(rename = "marginOnCost")]
    pub margin_on_cost: Decimal,
    #[serde(rename = "marginOnSale")]
    pub margin_on_sale: Decimal,
}

impl ProductPrices {
    fn amounts(&self) -> [Decimal; 4] {
        [
            self.purchase_ex_tax,
            self.purchase_inc_tax,
            self.sale_ex_tax,
            self.sale_inc_tax,
        ]
    }

    fn has_negative(&self) -> bool {
        self.amounts().iter().any(|v| v.is_sign_negative() && !v.is_zero())
    }

    fn exceeds_max(&self) -> bool {
        self.amounts().iter().any(|v| *v > MAX_PRICE)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    pub category: String,
    pub prices: ProductPrices,
    /// Ставка из поля формы; на пересчёт цен не влияет
    #[serde(rename = "taxRate")]
    pub tax_rate: Decimal,
    pub stock: i64,
    /// Имя файла изображения, выданное хранилищем файлов
    #[serde(rename = "imageName")]
    pub image_name: Option<String>,
}

impl Product {
    /// `code` - артикул (reference), `description` - наименование
    pub fn new_for_insert(dto: &ProductDto) -> Self {
        let mut base = BaseAggregate::new(
            ProductId::new_v4(),
            dto.reference.clone(),
            dto.name.clone(),
        );
        base.comment = dto.comment.clone();

        Self {
            base,
            category: dto.category.clone(),
            prices: dto.prices,
            tax_rate: dto.tax_rate,
            stock: dto.stock,
            image_name: dto.image_name.clone(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn reference(&self) -> &str {
        &self.base.code
    }

    pub fn name(&self) -> &str {
        &self.base.description
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Артикул не может быть пустым".into());
        }
        if self.stock < 0 {
            return Err("Остаток не может быть отрицательным".into());
        }
        if self.prices.has_negative() {
            return Err("Цены не могут быть отрицательными".into());
        }
        if self.prices.exceeds_max() {
            return Err(format!("Цена не может превышать {}", MAX_PRICE));
        }
        Ok(())
    }
}

impl TableRecord for Product {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("reference", "Артикул", |p: &Product| CellValue::text(p.base.code.clone())),
            Column::new("name", "Наименование", |p: &Product| {
                CellValue::text(p.base.description.clone())
            }),
            Column::new("category", "Категория", |p: &Product| {
                CellValue::opt_text(Some(p.category.as_str()))
            }),
            Column::new("purchase_ex_tax", "Закупка без НДС", |p: &Product| {
                CellValue::Money(p.prices.purchase_ex_tax)
            }),
            Column::new("sale_ex_tax", "Продажа без НДС", |p: &Product| {
                CellValue::Money(p.prices.sale_ex_tax)
            }),
            Column::new("sale_inc_tax", "Продажа с НДС", |p: &Product| {
                CellValue::Money(p.prices.sale_inc_tax)
            }),
            Column::new("margin_on_cost", "Наценка, %", |p: &Product| {
                CellValue::Money(p.prices.margin_on_cost)
            }),
            Column::new("stock", "Остаток", |p: &Product| CellValue::Number(p.stock)),
        ]
    }

    fn search_fields() -> Vec<&'static str> {
        vec!["reference", "name", "category"]
    }

    fn row_key(&self) -> String {
        self.to_string_id()
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Данные формы создания товара
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub reference: String,
    pub name: String,
    pub category: String,
    pub prices: ProductPrices,
    #[serde(rename = "taxRate")]
    pub tax_rate: Decimal,
    pub stock: i64,
    #[serde(rename = "imageName")]
    pub image_name: Option<String>,
    pub comment: Option<String>,
}

impl Default for ProductDto {
    fn default() -> Self {
        Self {
            reference: String::new(),
            name: String::new(),
            category: String::new(),
            prices: ProductPrices::default(),
            tax_rate: DEFAULT_TAX_RATE,
            stock: 0,
            image_name: None,
            comment: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dto() -> ProductDto {
        ProductDto {
            reference: "PRD-001".into(),
            name: "Azeite Virgem Extra".into(),
            category: "Mercearia".into(),
            prices: ProductPrices {
                purchase_ex_tax: Decimal::from_str("4.00").unwrap(),
                purchase_inc_tax: Decimal::from_str("4.92").unwrap(),
                sale_ex_tax: Decimal::from_str("6.00").unwrap(),
                sale_inc_tax: Decimal::from_str("7.38").unwrap(),
                margin_on_cost: Decimal::from_str("50.00").unwrap(),
                margin_on_sale: Decimal::from_str("33.33").unwrap(),
            },
            stock: 12,
            ..ProductDto::default()
        }
    }

    #[test]
    fn test_validate() {
        assert!(Product::new_for_insert(&dto()).validate().is_ok());

        let mut no_ref = dto();
        no_ref.reference = String::new();
        assert!(Product::new_for_insert(&no_ref).validate().is_err());

        let mut negative = dto();
        negative.prices.sale_ex_tax = Decimal::from_str("-1").unwrap();
        assert!(Product::new_for_insert(&negative).validate().is_err());

        let mut no_stock = dto();
        no_stock.stock = -3;
        assert!(Product::new_for_insert(&no_stock).validate().is_err());

        let mut huge = dto();
        huge.prices.sale_ex_tax = Decimal::MAX;
        assert!(Product::new_for_insert(&huge).validate().is_err());

        let mut at_limit = dto();
        at_limit.prices.sale_inc_tax = MAX_PRICE;
        assert!(Product::new_for_insert(&at_limit).validate().is_ok());
    }

    #[test]
    fn test_money_columns_have_two_decimals() {
        let product = Product::new_for_insert(&dto());
        assert_eq!(product.field_text("sale_inc_tax").as_deref(), Some("7.38"));
        assert_eq!(product.field_text("purchase_ex_tax").as_deref(), Some("4.00"));
        assert_eq!(product.field_text("stock").as_deref(), Some("12"));
        assert_eq!(product.tax_rate, DEFAULT_TAX_RATE);
    }

    #[test]
    fn test_json_field_names() {
        let product = Product::new_for_insert(&dto());
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["prices"]["saleIncTax"], "7.38");
        assert_eq!(json["code"], "PRD-001");
        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);
    }
}
