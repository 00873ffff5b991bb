//! Public entry point of the payroll engine.
//!
//! [`PayrollEngine`] owns a validated [`PayrollSchedule`] and exposes the
//! four monthly operations. It holds no mutable state, so a single engine can
//! be shared freely across threads.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::PayrollEngine;
//!
//! let engine = PayrollEngine::for_year(2025).unwrap();
//!
//! let breakdown = engine.net_from_gross(dec!(10000));
//! assert_eq!(breakdown.tax(), dec!(770.901872));
//!
//! let back = engine.gross_from_net(breakdown.net()).unwrap();
//! assert!((back.gross() - dec!(10000)).abs() < dec!(0.02));
//! ```

use rust_decimal::Decimal;

use crate::Breakdown;
use crate::calculations::{
    Contribution, ContributionDetail, GrossResolver, IncomeTax, NetResolver, ResolveError,
    SearchConfig,
};
use crate::schedule::{PayrollSchedule, ScheduleError};

/// Gross/net calculator for one payroll schedule. All amounts are monthly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollEngine {
    schedule: PayrollSchedule,
    search: SearchConfig,
}

impl PayrollEngine {
    pub fn new(schedule: PayrollSchedule) -> Self {
        Self {
            schedule,
            search: SearchConfig::default(),
        }
    }

    /// Engine over the compiled-in schedule for `year`.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::UnknownYear`] when no schedule exists.
    pub fn for_year(year: i32) -> Result<Self, ScheduleError> {
        PayrollSchedule::for_year(year).map(Self::new)
    }

    /// Replaces the inverse-search tuning.
    pub fn with_search_config(
        self,
        search: SearchConfig,
    ) -> Self {
        Self { search, ..self }
    }

    pub fn schedule(&self) -> &PayrollSchedule {
        &self.schedule
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    /// Signed income tax; negative when the low-income credit exceeds it.
    pub fn compute_tax(
        &self,
        gross_monthly: Decimal,
    ) -> Decimal {
        IncomeTax::new(self.schedule.brackets(), self.schedule.credit()).calculate(gross_monthly)
    }

    /// Non-negative employee contribution.
    pub fn compute_contribution(
        &self,
        gross_monthly: Decimal,
    ) -> Decimal {
        Contribution::new(self.schedule.contribution()).calculate(gross_monthly)
    }

    /// Contribution with its base and per-term amounts.
    pub fn contribution_detail(
        &self,
        gross_monthly: Decimal,
    ) -> ContributionDetail {
        Contribution::new(self.schedule.contribution()).detail(gross_monthly)
    }

    pub fn net_from_gross(
        &self,
        gross_monthly: Decimal,
    ) -> Breakdown {
        NetResolver::new(&self.schedule).resolve(gross_monthly)
    }

    /// Gross income whose net is within tolerance of `target_net_monthly`,
    /// or the closest estimate found.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NegativeTarget`] for a negative target.
    pub fn gross_from_net(
        &self,
        target_net_monthly: Decimal,
    ) -> Result<Breakdown, ResolveError> {
        GrossResolver::new(NetResolver::new(&self.schedule), self.search)
            .resolve(target_net_monthly)
    }
}
