use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One segment of the progressive income-tax schedule.
///
/// A row covers incomes from `lower_bound` up to (but excluding) the next
/// row's `lower_bound`. The last row of a table is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketRow {
    pub lower_bound: Decimal,
    pub base_amount: Decimal,
    pub marginal_rate: Decimal,
}

impl BracketRow {
    pub const fn new(
        lower_bound: Decimal,
        base_amount: Decimal,
        marginal_rate: Decimal,
    ) -> Self {
        Self {
            lower_bound,
            base_amount,
            marginal_rate,
        }
    }
}
