//! Year-versioned payroll schedules.
//!
//! A [`PayrollSchedule`] bundles everything the engine needs for one calendar
//! year: the income-tax bracket table, the contribution constants and the
//! low-income credit. Schedules are validated once at construction and are
//! immutable afterwards.

mod bracket_table;
mod error;
mod y2025;

pub use bracket_table::BracketTable;
pub use error::ScheduleError;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{ContributionConstants, LowIncomeCredit};

/// Years with a compiled-in schedule.
pub const SUPPORTED_YEARS: &[i32] = &[2025];

/// Validated configuration for one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollSchedule {
    year: i32,
    brackets: BracketTable,
    contribution: ContributionConstants,
    credit: LowIncomeCredit,
}

impl PayrollSchedule {
    /// Builds a schedule after validating the contribution constants and the
    /// credit. The bracket table is validated by [`BracketTable::new`].
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if any constant is outside its valid range.
    pub fn new(
        year: i32,
        brackets: BracketTable,
        contribution: ContributionConstants,
        credit: LowIncomeCredit,
    ) -> Result<Self, ScheduleError> {
        validate_contribution(&contribution)?;
        validate_credit(&credit)?;

        Ok(Self {
            year,
            brackets,
            contribution,
            credit,
        })
    }

    /// Returns the compiled-in schedule for `year`.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::UnknownYear`] for years not in
    /// [`SUPPORTED_YEARS`].
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_core::schedule::{PayrollSchedule, ScheduleError};
    ///
    /// let schedule = PayrollSchedule::for_year(2025).unwrap();
    /// assert_eq!(schedule.year(), 2025);
    ///
    /// assert_eq!(
    ///     PayrollSchedule::for_year(1999),
    ///     Err(ScheduleError::UnknownYear(1999))
    /// );
    /// ```
    pub fn for_year(year: i32) -> Result<Self, ScheduleError> {
        match year {
            2025 => y2025::schedule(),
            other => Err(ScheduleError::UnknownYear(other)),
        }
    }

    /// Returns a copy of this schedule with its bracket table replaced.
    pub fn with_brackets(
        self,
        brackets: BracketTable,
    ) -> Self {
        Self { brackets, ..self }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn brackets(&self) -> &BracketTable {
        &self.brackets
    }

    pub fn contribution(&self) -> &ContributionConstants {
        &self.contribution
    }

    pub fn credit(&self) -> &LowIncomeCredit {
        &self.credit
    }
}

fn is_fraction(rate: Decimal) -> bool {
    rate >= Decimal::ZERO && rate < Decimal::ONE
}

fn validate_contribution(constants: &ContributionConstants) -> Result<(), ScheduleError> {
    if constants.base_unit_value <= Decimal::ZERO {
        return Err(ScheduleError::InvalidBaseUnitValue(
            constants.base_unit_value,
        ));
    }
    if constants.integration_factor < Decimal::ONE {
        return Err(ScheduleError::InvalidIntegrationFactor(
            constants.integration_factor,
        ));
    }
    if constants.days_per_month <= Decimal::ZERO {
        return Err(ScheduleError::InvalidDaysPerMonth(constants.days_per_month));
    }
    // A multiple below 1 would put the ceiling under the floor.
    if constants.cap_multiple < 1 {
        return Err(ScheduleError::InvalidCapMultiple(constants.cap_multiple));
    }
    if constants.excess_threshold_multiple < Decimal::ZERO {
        return Err(ScheduleError::InvalidExcessThreshold(
            constants.excess_threshold_multiple,
        ));
    }
    if !is_fraction(constants.excess_rate) {
        return Err(ScheduleError::InvalidContributionRate {
            name: "excess".to_string(),
            rate: constants.excess_rate,
        });
    }
    if let Some(bad) = constants.flat_rates.iter().find(|r| !is_fraction(r.rate)) {
        return Err(ScheduleError::InvalidContributionRate {
            name: bad.name.clone(),
            rate: bad.rate,
        });
    }
    Ok(())
}

fn validate_credit(credit: &LowIncomeCredit) -> Result<(), ScheduleError> {
    if credit.income_ceiling < Decimal::ZERO || credit.credit_amount < Decimal::ZERO {
        return Err(ScheduleError::InvalidCredit {
            ceiling: credit.income_ceiling,
            amount: credit.credit_amount,
        });
    }
    Ok(())
}
