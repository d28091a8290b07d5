//! Согласование цен с НДС и без НДС для формы товара.
//!
//! Состояние формы - одно неизменяемое значение [`PriceState`]. Каждое
//! изменение поля пользователем - событие [`PriceEdit`], которое
//! [`PriceReconciler::apply`] превращает в новое состояние.
//!
//! Правила:
//! - последнее отредактированное поле пары (закупка/продажа) - источник,
//!   второе поле пары пересчитывается по ставке налога;
//! - производное поле перезаписывается, только если округлённое значение
//!   отличается от текущего;
//! - нечисловой ввод очищает производное поле;
//! - наценка и маржа считаются только от цен без НДС.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::{format_fixed2, parse_amount, round2};
use crate::domain::a003_product::aggregate::{Product, ProductPrices};

/// Ставка НДС в процентах, которой пользуется форма товара.
/// Поле "ставка" в форме на пересчёт не влияет.
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(23, 0, 0, false, 0);

/// Поле цены, которое пользователь менял последним
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditedSide {
    #[default]
    None,
    PurchaseExTax,
    PurchaseIncTax,
    SaleExTax,
    SaleIncTax,
}

/// Событие редактирования поля цены (значение - текст из поля ввода)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceEdit {
    EditPurchaseExTax(String),
    EditPurchaseIncTax(String),
    EditSaleExTax(String),
    EditSaleIncTax(String),
}

impl PriceEdit {
    pub fn side(&self) -> EditedSide {
        match self {
            PriceEdit::EditPurchaseExTax(_) => EditedSide::PurchaseExTax,
            PriceEdit::EditPurchaseIncTax(_) => EditedSide::PurchaseIncTax,
            PriceEdit::EditSaleExTax(_) => EditedSide::SaleExTax,
            PriceEdit::EditSaleIncTax(_) => EditedSide::SaleIncTax,
        }
    }
}

/// Значения цен и маржи в форме товара
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceState {
    pub purchase_ex_tax: String,
    pub purchase_inc_tax: String,
    pub sale_ex_tax: String,
    pub sale_inc_tax: String,
    pub margin_on_cost: Decimal,
    pub margin_on_sale: Decimal,
    pub edited_side: EditedSide,
}

impl PriceState {
    /// Заполнение формы из сохранённого товара
    pub fn from_product(product: &Product) -> Self {
        let p = &product.prices;
        Self {
            purchase_ex_tax: format_fixed2(p.purchase_ex_tax),
            purchase_inc_tax: format_fixed2(p.purchase_inc_tax),
            sale_ex_tax: format_fixed2(p.sale_ex_tax),
            sale_inc_tax: format_fixed2(p.sale_inc_tax),
            margin_on_cost: round2(p.margin_on_cost),
            margin_on_sale: round2(p.margin_on_sale),
            edited_side: EditedSide::None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.edited_side == EditedSide::None
    }

    pub fn margin_on_cost_text(&self) -> String {
        format_fixed2(self.margin_on_cost)
    }

    pub fn margin_on_sale_text(&self) -> String {
        format_fixed2(self.margin_on_sale)
    }

    /// Числовые значения для сохранения. `None`, если какая-то цена не заполнена
    pub fn to_prices(&self) -> Option<ProductPrices> {
        Some(ProductPrices {
            purchase_ex_tax: round2(parse_amount(&self.purchase_ex_tax)?),
            purchase_inc_tax: round2(parse_amount(&self.purchase_inc_tax)?),
            sale_ex_tax: round2(parse_amount(&self.sale_ex_tax)?),
            sale_inc_tax: round2(parse_amount(&self.sale_inc_tax)?),
            margin_on_cost: self.margin_on_cost,
            margin_on_sale: self.margin_on_sale,
        })
    }
}

/// Пересчёт цен по фиксированной ставке налога
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceReconciler {
    tax_rate: Decimal,
}

impl Default for PriceReconciler {
    fn default() -> Self {
        Self::new(DEFAULT_TAX_RATE)
    }
}

impl PriceReconciler {
    /// `tax_rate` в процентах (23 = 23%)
    pub fn new(tax_rate: Decimal) -> Self {
        Self { tax_rate }
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    fn factor(&self) -> Option<Decimal> {
        Decimal::ONE.checked_add(self.tax_rate.checked_div(Decimal::ONE_HUNDRED)?)
    }

    /// Цена с налогом; `None`, если результат не помещается в `Decimal`
    pub fn with_tax(&self, ex_tax: Decimal) -> Option<Decimal> {
        ex_tax.checked_mul(self.factor()?).map(round2)
    }

    pub fn without_tax(&self, inc_tax: Decimal) -> Option<Decimal> {
        let factor = self.factor()?;
        if factor.is_zero() {
            return Some(Decimal::ZERO);
        }
        inc_tax.checked_div(factor).map(round2)
    }

    /// Применить событие редактирования к состоянию
    pub fn apply(&self, state: &PriceState, edit: PriceEdit) -> PriceState {
        let mut next = state.clone();
        next.edited_side = edit.side();

        let ex_tax_changed = match edit {
            PriceEdit::EditPurchaseExTax(text) => {
                let derived = parse_amount(&text).and_then(|v| self.with_tax(v));
                next.purchase_ex_tax = text;
                write_derived(&mut next.purchase_inc_tax, derived);
                true
            }
            PriceEdit::EditSaleExTax(text) => {
                let derived = parse_amount(&text).and_then(|v| self.with_tax(v));
                next.sale_ex_tax = text;
                write_derived(&mut next.sale_inc_tax, derived);
                true
            }
            PriceEdit::EditPurchaseIncTax(text) => {
                let derived = parse_amount(&text).and_then(|v| self.without_tax(v));
                next.purchase_inc_tax = text;
                write_derived(&mut next.purchase_ex_tax, derived)
            }
            PriceEdit::EditSaleIncTax(text) => {
                let derived = parse_amount(&text).and_then(|v| self.without_tax(v));
                next.sale_inc_tax = text;
                write_derived(&mut next.sale_ex_tax, derived)
            }
        };

        if ex_tax_changed {
            let (on_cost, on_sale) = margins(
                parse_amount(&next.purchase_ex_tax),
                parse_amount(&next.sale_ex_tax),
            );
            next.margin_on_cost = on_cost;
            next.margin_on_sale = on_sale;
        }

        next
    }

    /// Применить цепочку событий, начиная с пустой формы
    pub fn replay(&self, edits: impl IntoIterator<Item = PriceEdit>) -> PriceState {
        edits
            .into_iter()
            .fold(PriceState::default(), |state, edit| self.apply(&state, edit))
    }
}

/// Записывает производное значение, если оно отличается от текущего.
/// Возвращает `true`, если поле изменилось.
fn write_derived(field: &mut String, derived: Option<Decimal>) -> bool {
    match derived {
        Some(value) => {
            if parse_amount(field) == Some(value) {
                return false;
            }
            *field = format_fixed2(value);
            true
        }
        None => {
            if field.is_empty() {
                return false;
            }
            field.clear();
            true
        }
    }
}

/// Процент `profit` от `base`; ноль при неположительной базе или переполнении
fn percent_of(profit: Decimal, base: Decimal) -> Decimal {
    if base <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    profit
        .checked_div(base)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(round2)
        .unwrap_or(Decimal::ZERO)
}

/// Наценка (от закупки) и маржа (от продажи) в процентах.
/// Пока одна из цен без НДС не заполнена, обе равны нулю.
pub fn margins(purchase_ex_tax: Option<Decimal>, sale_ex_tax: Option<Decimal>) -> (Decimal, Decimal) {
    let (Some(p), Some(s)) = (purchase_ex_tax, sale_ex_tax) else {
        return (Decimal::ZERO, Decimal::ZERO);
    };
    let Some(profit) = s.checked_sub(p) else {
        return (Decimal::ZERO, Decimal::ZERO);
    };
    (percent_of(profit, p), percent_of(profit, s))
}
