pub mod money;
pub mod reconciler;

pub use money::{format_fixed2, parse_amount, round2};
pub use reconciler::{margins, EditedSide, PriceEdit, PriceReconciler, PriceState, DEFAULT_TAX_RATE};
