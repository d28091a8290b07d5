//! ViewModel формы товара.
//!
//! Цены живут в одном `PriceState`; каждое изменение поля цены проходит
//! через `PriceReconciler::apply`, который пересчитывает парное поле и маржу.

use super::model;
use contracts::domain::a003_product::aggregate::{Product, ProductDto};
use contracts::domain::common::AggregateId;
use contracts::shared::pricing::{format_fixed2, parse_amount, PriceEdit, PriceReconciler, PriceState, DEFAULT_TAX_RATE};
use leptos::prelude::*;

/// Helper to convert empty strings to None
fn opt(v: String) -> Option<String> {
    if v.trim().is_empty() {
        None
    } else {
        Some(v)
    }
}

/// Снимок полей формы (без сигналов)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub reference: String,
    pub name: String,
    pub category: String,
    pub tax_rate: String,
    pub stock: String,
    pub image_name: String,
    pub comment: String,
}

impl ProductForm {
    pub fn to_dto(&self, prices: &PriceState) -> Result<ProductDto, String> {
        if self.reference.trim().is_empty() {
            return Err("Артикул обязателен для заполнения".into());
        }
        if self.name.trim().is_empty() {
            return Err("Наименование обязательно для заполнения".into());
        }
        let prices = prices
            .to_prices()
            .ok_or_else(|| "Заполните все цены".to_string())?;
        let tax_rate = if self.tax_rate.trim().is_empty() {
            DEFAULT_TAX_RATE
        } else {
            parse_amount(&self.tax_rate).ok_or_else(|| "Некорректная ставка НДС".to_string())?
        };
        let stock = if self.stock.trim().is_empty() {
            0
        } else {
            self.stock
                .trim()
                .parse::<i64>()
                .map_err(|_| "Остаток должен быть целым числом".to_string())?
        };

        Ok(ProductDto {
            reference: self.reference.trim().to_string(),
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            prices,
            tax_rate,
            stock,
            image_name: opt(self.image_name.clone()),
            comment: opt(self.comment.clone()),
        })
    }
}

/// Ввод в поле цены превращается в событие, только если текст отличается
/// от того, что уже лежит в состоянии (иначе это эхо пересчёта)
pub fn typed_price_edit(
    state: &PriceState,
    read: fn(&PriceState) -> String,
    edit: fn(String) -> PriceEdit,
    typed: String,
) -> Option<PriceEdit> {
    (read(state) != typed).then(|| edit(typed))
}

#[derive(Clone, Copy)]
pub struct ProductDetailsVm {
    // === Form fields ===
    pub id: RwSignal<Option<String>>,
    pub reference: RwSignal<String>,
    pub name: RwSignal<String>,
    pub category: RwSignal<String>,
    /// Редактируемая ставка; на пересчёт цен не влияет
    pub tax_rate: RwSignal<String>,
    pub stock: RwSignal<String>,
    pub image_name: RwSignal<String>,
    pub comment: RwSignal<String>,
    pub prices: RwSignal<PriceState>,

    reconciler: PriceReconciler,

    // === UI State ===
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
}

impl ProductDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            reference: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            tax_rate: RwSignal::new(format_fixed2(DEFAULT_TAX_RATE)),
            stock: RwSignal::new("0".to_string()),
            image_name: RwSignal::new(String::new()),
            comment: RwSignal::new(String::new()),
            prices: RwSignal::new(PriceState::default()),
            reconciler: PriceReconciler::default(),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
        }
    }

    // === Derived signals ===

    /// Просмотр сохранённого товара: форма только для чтения
    pub fn is_read_only(&self) -> Signal<bool> {
        let id = self.id;
        Signal::derive(move || id.get().is_some())
    }

    pub fn is_save_disabled(&self) -> Signal<bool> {
        let saving = self.saving;
        let read_only = self.is_read_only();
        let name = self.name;
        let reference = self.reference;
        Signal::derive(move || {
            saving.get()
                || read_only.get()
                || name.get().trim().is_empty()
                || reference.get().trim().is_empty()
        })
    }

    // === Commands ===

    /// Изменение одного из четырёх полей цены
    pub fn edit_price(&self, edit: PriceEdit) {
        let reconciler = self.reconciler;
        self.prices.update(|state| *state = reconciler.apply(state, edit));
    }

    pub fn form(&self) -> ProductForm {
        ProductForm {
            reference: self.reference.get_untracked(),
            name: self.name.get_untracked(),
            category: self.category.get_untracked(),
            tax_rate: self.tax_rate.get_untracked(),
            stock: self.stock.get_untracked(),
            image_name: self.image_name.get_untracked(),
            comment: self.comment.get_untracked(),
        }
    }

    pub fn from_aggregate(&self, product: &Product) {
        self.id.set(Some(product.base.id.as_string()));
        self.reference.set(product.reference().to_string());
        self.name.set(product.name().to_string());
        self.category.set(product.category.clone());
        self.tax_rate.set(format_fixed2(product.tax_rate));
        self.stock.set(product.stock.to_string());
        self.image_name.set(product.image_name.clone().unwrap_or_default());
        self.comment.set(product.base.comment.clone().unwrap_or_default());
        self.prices.set(PriceState::from_product(product));
    }

    /// Load entity data by ID
    pub fn load(&self, id: String) {
        let this = *self;
        this.loading.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match model::fetch_by_id(id).await {
                Ok(item) => this.from_aggregate(&item),
                Err(e) => this.error.set(Some(e)),
            }
            this.loading.set(false);
        });
    }

    /// Save the form
    pub fn save(&self, on_saved: Callback<String>) {
        let dto = match self.prices.with_untracked(|p| self.form().to_dto(p)) {
            Ok(dto) => dto,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let this = *self;
        this.saving.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match model::save_form(dto).await {
                Ok(new_id) => {
                    log::info!("product created: {}", new_id);
                    this.saving.set(false);
                    this.success.set(Some("Сохранено успешно".into()));
                    on_saved.run(new_id);
                }
                Err(e) => {
                    this.saving.set(false);
                    this.error.set(Some(e));
                }
            }
        });
    }
}

impl Default for ProductDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn form() -> ProductForm {
        ProductForm {
            reference: " PRD-100 ".into(),
            name: "Queijo Fresco".into(),
            category: "Charcutaria".into(),
            tax_rate: "6".into(),
            stock: "4".into(),
            ..ProductForm::default()
        }
    }

    fn prices() -> PriceState {
        PriceReconciler::default().replay([
            PriceEdit::EditPurchaseExTax("50".into()),
            PriceEdit::EditSaleExTax("75".into()),
        ])
    }

    #[test]
    fn test_to_dto_keeps_typed_tax_rate_but_fixed_rate_prices() {
        let dto = form().to_dto(&prices()).unwrap();
        assert_eq!(dto.reference, "PRD-100");
        assert_eq!(dto.tax_rate, Decimal::from(6));
        // цены посчитаны по 23%, а не по ставке из формы
        assert_eq!(dto.prices.sale_inc_tax, Decimal::from_str("92.25").unwrap());
        assert_eq!(dto.prices.margin_on_sale, Decimal::from_str("33.33").unwrap());
        assert_eq!(dto.image_name, None);
    }

    #[test]
    fn test_to_dto_errors() {
        assert!(form().to_dto(&PriceState::default()).is_err());

        let mut bad_stock = form();
        bad_stock.stock = "2.5".into();
        assert!(bad_stock.to_dto(&prices()).is_err());

        let mut unnamed = form();
        unnamed.name = " ".into();
        assert!(unnamed.to_dto(&prices()).is_err());
    }

    #[test]
    fn test_typed_price_edit_ignores_echo_of_derived_value() {
        let read_inc: fn(&PriceState) -> String = |s| s.purchase_inc_tax.clone();
        let state = prices();
        assert_eq!(state.purchase_inc_tax, "61.50");

        assert_eq!(
            typed_price_edit(&state, read_inc, PriceEdit::EditPurchaseIncTax, "61.50".into()),
            None
        );
        let edit = typed_price_edit(&state, read_inc, PriceEdit::EditPurchaseIncTax, "70".into());
        assert_eq!(edit, Some(PriceEdit::EditPurchaseIncTax("70".into())));
    }
}
