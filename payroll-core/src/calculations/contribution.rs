//! Employee social-security contribution.
//!
//! # Calculation Structure
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Daily base: gross × integration factor ÷ days per month |
//! | 2    | Clamp the daily base to [1, cap multiple] × base unit value |
//! | 3    | Monthly base: clamped daily base × days per month |
//! | 4    | Excess term: rate on the monthly excess over the threshold (never negative) |
//! | 5    | Flat terms: each rate × monthly base |
//! | 6    | Total: excess term + flat terms |
//!
//! The ceiling is applied before the floor, so the floor wins should the two
//! ever disagree. Schedule validation rejects constants where they could.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ContributionConstants;
use crate::calculations::common::{max, min};

/// One flat contribution term with its amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionTerm {
    pub name: String,
    pub amount: Decimal,
}

/// Result of the contribution calculation with its intermediate values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDetail {
    /// Unclamped daily integrated base (Step 1).
    pub daily_base: Decimal,

    /// Daily base after the ceiling and floor (Step 2).
    pub capped_daily_base: Decimal,

    /// Monthly base the flat rates apply to (Step 3).
    pub monthly_base: Decimal,

    /// Contribution on the part of the base above the threshold (Step 4).
    pub excess_term: Decimal,

    /// Flat terms in configuration order (Step 5).
    pub flat_terms: Vec<ContributionTerm>,

    /// Total withheld amount (Step 6).
    pub total: Decimal,
}

impl ContributionDetail {
    /// All-zero detail for incomes at or below zero.
    fn zero(constants: &ContributionConstants) -> Self {
        Self {
            daily_base: Decimal::ZERO,
            capped_daily_base: Decimal::ZERO,
            monthly_base: Decimal::ZERO,
            excess_term: Decimal::ZERO,
            flat_terms: constants
                .flat_rates
                .iter()
                .map(|r| ContributionTerm {
                    name: r.name.clone(),
                    amount: Decimal::ZERO,
                })
                .collect(),
            total: Decimal::ZERO,
        }
    }
}

/// Calculator for the employee contribution.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::Contribution;
/// use payroll_core::schedule::PayrollSchedule;
///
/// let schedule = PayrollSchedule::for_year(2025).unwrap();
/// let contribution = Contribution::new(schedule.contribution());
///
/// // Far above the cap the base is pinned at 25 × 108.57 per day.
/// let detail = contribution.detail(dec!(1000000));
/// assert_eq!(detail.capped_daily_base, dec!(2714.25));
/// assert_eq!(contribution.calculate(dec!(1000000)), contribution.calculate(dec!(2000000)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Contribution<'a> {
    constants: &'a ContributionConstants,
}

impl<'a> Contribution<'a> {
    pub fn new(constants: &'a ContributionConstants) -> Self {
        Self { constants }
    }

    /// Total contribution for `gross_monthly`; zero for zero or negative
    /// income, never negative otherwise.
    pub fn calculate(
        &self,
        gross_monthly: Decimal,
    ) -> Decimal {
        self.detail(gross_monthly).total
    }

    /// Full calculation with intermediate values.
    pub fn detail(
        &self,
        gross_monthly: Decimal,
    ) -> ContributionDetail {
        if gross_monthly <= Decimal::ZERO {
            return ContributionDetail::zero(self.constants);
        }

        let daily_base = self.daily_base(gross_monthly);
        let capped_daily_base = self.clamp_daily_base(daily_base);
        let monthly_base = self.monthly_base(capped_daily_base);
        let excess_term = self.excess_term(capped_daily_base);
        let flat_terms = self.flat_terms(monthly_base);

        let total = flat_terms
            .iter()
            .fold(excess_term, |sum, term| sum + term.amount);

        ContributionDetail {
            daily_base,
            capped_daily_base,
            monthly_base,
            excess_term,
            flat_terms,
            total,
        }
    }

    /// Step 1. Saturates on overflow; such a base is far above any ceiling.
    fn daily_base(
        &self,
        gross_monthly: Decimal,
    ) -> Decimal {
        gross_monthly
            .checked_mul(self.constants.integration_factor)
            .map(|integrated| integrated / self.constants.days_per_month)
            .unwrap_or(Decimal::MAX)
    }

    /// Step 2. Ceiling first, then floor.
    fn clamp_daily_base(
        &self,
        daily_base: Decimal,
    ) -> Decimal {
        let capped = min(daily_base, self.constants.daily_ceiling());
        max(capped, self.constants.daily_floor())
    }

    /// Step 3.
    fn monthly_base(
        &self,
        capped_daily_base: Decimal,
    ) -> Decimal {
        capped_daily_base * self.constants.days_per_month
    }

    /// Step 4.
    fn excess_term(
        &self,
        capped_daily_base: Decimal,
    ) -> Decimal {
        let excess = capped_daily_base - self.constants.excess_threshold();
        if excess <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        excess * self.constants.days_per_month * self.constants.excess_rate
    }

    /// Step 5.
    fn flat_terms(
        &self,
        monthly_base: Decimal,
    ) -> Vec<ContributionTerm> {
        self.constants
            .flat_rates
            .iter()
            .map(|r| ContributionTerm {
                name: r.name.clone(),
                amount: monthly_base * r.rate,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::ContributionRate;
    use crate::schedule::PayrollSchedule;

    fn assert_close(
        actual: Decimal,
        expected: Decimal,
    ) {
        assert!(
            (actual - expected).abs() <= dec!(0.000000001),
            "expected {expected}, got {actual}"
        );
    }

    fn schedule() -> PayrollSchedule {
        PayrollSchedule::for_year(2025).unwrap()
    }

    // =========================================================================
    // domain tests
    // =========================================================================

    #[test]
    fn calculate_returns_zero_for_zero_income() {
        let schedule = schedule();
        let contribution = Contribution::new(schedule.contribution());

        assert_eq!(contribution.calculate(dec!(0)), dec!(0));
    }

    #[test]
    fn calculate_returns_zero_for_negative_income() {
        let schedule = schedule();
        let contribution = Contribution::new(schedule.contribution());

        assert_eq!(contribution.calculate(dec!(-5)), dec!(0));
        assert_eq!(contribution.detail(dec!(-5)).flat_terms.len(), 3);
    }

    // =========================================================================
    // base tests
    // =========================================================================

    #[test]
    fn low_income_base_is_floored_at_one_unit() {
        let schedule = schedule();
        let contribution = Contribution::new(schedule.contribution());

        let detail = contribution.detail(dec!(1000));

        assert_eq!(detail.capped_daily_base, dec!(108.57));
        assert_eq!(detail.monthly_base, dec!(3300.528));
        assert_eq!(detail.excess_term, dec!(0));
        // 3300.528 * (0.00625 + 0.00625 + 0.01125)
        assert_eq!(detail.total, dec!(78.3875400));
    }

    #[test]
    fn high_income_base_is_capped() {
        let schedule = schedule();
        let contribution = Contribution::new(schedule.contribution());

        let detail = contribution.detail(dec!(1000000));

        assert!(detail.daily_base > dec!(34516));
        assert_eq!(detail.capped_daily_base, dec!(2714.25));
        assert_eq!(detail.monthly_base, dec!(82513.2));
        // (2714.25 - 325.71) * 30.4 * 0.004
        assert_eq!(detail.excess_term, dec!(290.446464));
        assert_eq!(detail.total, dec!(2250.134964));
    }

    #[test]
    fn contribution_plateaus_beyond_cap() {
        let schedule = schedule();
        let contribution = Contribution::new(schedule.contribution());

        let at_cap = contribution.calculate(dec!(1000000));

        assert_eq!(contribution.calculate(dec!(5000000)), at_cap);
        assert_eq!(contribution.calculate(dec!(1000000000000)), at_cap);
    }

    #[test]
    fn enormous_income_does_not_overflow() {
        let schedule = schedule();
        let contribution = Contribution::new(schedule.contribution());

        let result = contribution.calculate(Decimal::MAX);

        assert_eq!(result, dec!(2250.134964));
    }

    // =========================================================================
    // term tests
    // =========================================================================

    #[test]
    fn mid_income_terms_match_formula() {
        let schedule = schedule();
        let contribution = Contribution::new(schedule.contribution());

        let detail = contribution.detail(dec!(10000));

        // daily base = 10000 * 1.0493 / 30.4, monthly base = 10493
        assert_close(detail.monthly_base, dec!(10493));
        // (10493 - 3 * 108.57 * 30.4) * 0.004
        assert_close(detail.excess_term, dec!(2.365664));
        assert_close(detail.flat_terms[0].amount, dec!(65.58125));
        assert_close(detail.flat_terms[1].amount, dec!(65.58125));
        assert_close(detail.flat_terms[2].amount, dec!(118.04625));
        assert_close(detail.total, dec!(251.574414));
    }

    #[test]
    fn excess_term_is_zero_at_threshold() {
        let schedule = schedule();
        let contribution = Contribution::new(schedule.contribution());

        // Daily base of exactly 3 units.
        let gross = dec!(325.71) * dec!(30.4) / dec!(1.0493);
        let detail = contribution.detail(gross);

        assert!(detail.excess_term <= dec!(0.000000001));
        assert!(detail.excess_term >= Decimal::ZERO);
    }

    #[test]
    fn floor_wins_when_bounds_conflict() {
        // Validation rejects a zero multiple; build the constants directly to
        // exercise the clamp order.
        let constants = ContributionConstants {
            base_unit_value: dec!(100),
            integration_factor: dec!(1),
            days_per_month: dec!(30),
            cap_multiple: 0,
            excess_threshold_multiple: dec!(3),
            excess_rate: dec!(0.004),
            flat_rates: vec![ContributionRate::new("flat", dec!(0.01))],
        };
        let contribution = Contribution::new(&constants);

        let detail = contribution.detail(dec!(90000));

        assert_eq!(detail.capped_daily_base, dec!(100));
        assert_eq!(detail.total, dec!(30));
    }
}
