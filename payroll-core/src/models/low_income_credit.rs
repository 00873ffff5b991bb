use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Flat monthly credit for earners at or below `income_ceiling`.
///
/// The credit is subtracted from the computed income tax and may leave the
/// tax negative, in which case the employee receives the difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowIncomeCredit {
    pub income_ceiling: Decimal,
    pub credit_amount: Decimal,
}

impl LowIncomeCredit {
    /// Whether a monthly gross income qualifies for the credit.
    pub fn applies_to(
        &self,
        gross_monthly: Decimal,
    ) -> bool {
        gross_monthly <= self.income_ceiling
    }
}
