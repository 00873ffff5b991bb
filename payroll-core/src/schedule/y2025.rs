//! Compiled-in 2025 monthly schedule.
//!
//! Where 2025 figures were not yet published the 2024 values carry over:
//! the daily base unit value (UMA) is the 2024 one and the low-income credit
//! follows the May 2024 flat-amount mechanism.

use rust_decimal_macros::dec;

use super::{BracketTable, PayrollSchedule, ScheduleError};
use crate::{BracketRow, ContributionConstants, ContributionRate, LowIncomeCredit};

const YEAR: i32 = 2025;

/// Monthly income-tax table: lower bound, fixed amount, rate on the excess.
const BRACKETS: [BracketRow; 11] = [
    BracketRow::new(dec!(0.01), dec!(0.00), dec!(0.0192)),
    BracketRow::new(dec!(746.05), dec!(14.32), dec!(0.0640)),
    BracketRow::new(dec!(6332.06), dec!(371.83), dec!(0.1088)),
    BracketRow::new(dec!(11128.02), dec!(893.63), dec!(0.1600)),
    BracketRow::new(dec!(12935.83), dec!(1182.88), dec!(0.1792)),
    BracketRow::new(dec!(15487.72), dec!(1640.18), dec!(0.2136)),
    BracketRow::new(dec!(31236.50), dec!(5004.12), dec!(0.2352)),
    BracketRow::new(dec!(49233.01), dec!(9236.89), dec!(0.3000)),
    BracketRow::new(dec!(93993.91), dec!(22665.17), dec!(0.3200)),
    BracketRow::new(dec!(125325.21), dec!(32691.18), dec!(0.3400)),
    BracketRow::new(dec!(375975.62), dec!(117912.32), dec!(0.3500)),
];

const CREDIT: LowIncomeCredit = LowIncomeCredit {
    income_ceiling: dec!(9081.00),
    credit_amount: dec!(390.12),
};

fn contribution() -> ContributionConstants {
    ContributionConstants {
        base_unit_value: dec!(108.57),
        // (365 + 15 days of year-end bonus + 12 vacation days × 25 %) / 365
        integration_factor: dec!(1.0493),
        days_per_month: dec!(30.4),
        cap_multiple: 25,
        excess_threshold_multiple: dec!(3),
        excess_rate: dec!(0.0040),
        flat_rates: vec![
            ContributionRate::new("cash benefits and pensioner medical", dec!(0.00625)),
            ContributionRate::new("disability and life", dec!(0.00625)),
            ContributionRate::new("severance and old age", dec!(0.01125)),
        ],
    }
}

pub(super) fn schedule() -> Result<PayrollSchedule, ScheduleError> {
    let brackets = BracketTable::new(BRACKETS.to_vec())?;
    PayrollSchedule::new(YEAR, brackets, contribution(), CREDIT)
}
