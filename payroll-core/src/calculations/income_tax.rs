//! Monthly income-tax withholding.
//!
//! The tax for a gross monthly income is the fixed amount of its bracket
//! plus the marginal rate applied to the excess over the bracket's lower
//! bound. Incomes at or below the low-income ceiling then receive a flat
//! credit, which can push the result below zero.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::calculations::IncomeTax;
//! use payroll_core::schedule::PayrollSchedule;
//!
//! let schedule = PayrollSchedule::for_year(2025).unwrap();
//! let income_tax = IncomeTax::new(schedule.brackets(), schedule.credit());
//!
//! // 371.83 + (10,000 - 6,332.06) × 10.88 %
//! assert_eq!(income_tax.calculate(dec!(10000)), dec!(770.901872));
//!
//! // Low earners get a credit larger than their tax.
//! assert!(income_tax.calculate(dec!(5000)) < dec!(0));
//! ```

use rust_decimal::Decimal;

use crate::LowIncomeCredit;
use crate::calculations::common::max;
use crate::schedule::BracketTable;

/// Calculator for the signed monthly income tax.
#[derive(Debug, Clone, Copy)]
pub struct IncomeTax<'a> {
    brackets: &'a BracketTable,
    credit: &'a LowIncomeCredit,
}

impl<'a> IncomeTax<'a> {
    pub fn new(
        brackets: &'a BracketTable,
        credit: &'a LowIncomeCredit,
    ) -> Self {
        Self { brackets, credit }
    }

    /// Calculates the income tax for `gross_monthly`.
    ///
    /// Returns zero for zero or negative income without consulting the
    /// table. The result is negative when the low-income credit exceeds the
    /// bracket tax; callers must keep the sign.
    pub fn calculate(
        &self,
        gross_monthly: Decimal,
    ) -> Decimal {
        if gross_monthly <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let tax = self.bracket_tax(gross_monthly);
        self.apply_credit(gross_monthly, tax)
    }

    /// Tax from the bracket table alone, before any credit.
    fn bracket_tax(
        &self,
        gross_monthly: Decimal,
    ) -> Decimal {
        let row = self.brackets.lookup(gross_monthly);
        let excess = max(gross_monthly - row.lower_bound, Decimal::ZERO);
        let marginal_tax = excess * row.marginal_rate;
        marginal_tax.saturating_add(row.base_amount)
    }

    /// Subtracts the low-income credit when the income qualifies.
    fn apply_credit(
        &self,
        gross_monthly: Decimal,
        tax: Decimal,
    ) -> Decimal {
        if self.credit.applies_to(gross_monthly) {
            tax - self.credit.credit_amount
        } else {
            tax
        }
    }
}
