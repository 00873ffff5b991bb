//! Gross-to-net composition and its numeric inverse.
//!
//! [`NetResolver`] combines income tax and contribution into a
//! [`Breakdown`]. [`GrossResolver`] recovers the gross income that yields a
//! target net by bisection, treating any [`NetOracle`] as a black box.
//!
//! # Search
//!
//! 1. Start with `[target, 2 × target]`. If the oracle already pays more
//!    than the target at the lower end (credit-receiving incomes, where net
//!    exceeds gross) the lower end drops to zero.
//! 2. Grow the upper end by the expansion factor while it still pays less
//!    than the target, for a bounded number of attempts.
//! 3. Bisect until the net is within tolerance or the iteration cap is hit.
//! 4. On exhaustion, return the last candidate. Non-convergence is not an
//!    error.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::Breakdown;
use crate::calculations::{Contribution, IncomeTax};
use crate::schedule::PayrollSchedule;

/// Errors that can occur when inverting the net calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// Target net income below zero.
    #[error("target net income must be non-negative, got {0}")]
    NegativeTarget(Decimal),
}

/// Anything that maps a gross monthly income to its breakdown.
pub trait NetOracle {
    fn breakdown(
        &self,
        gross_monthly: Decimal,
    ) -> Breakdown;
}

impl<F> NetOracle for F
where
    F: Fn(Decimal) -> Breakdown,
{
    fn breakdown(
        &self,
        gross_monthly: Decimal,
    ) -> Breakdown {
        self(gross_monthly)
    }
}

/// Gross → (net, tax, contribution).
#[derive(Debug, Clone, Copy)]
pub struct NetResolver<'a> {
    income_tax: IncomeTax<'a>,
    contribution: Contribution<'a>,
}

impl<'a> NetResolver<'a> {
    pub fn new(schedule: &'a PayrollSchedule) -> Self {
        Self {
            income_tax: IncomeTax::new(schedule.brackets(), schedule.credit()),
            contribution: Contribution::new(schedule.contribution()),
        }
    }

    pub fn resolve(
        &self,
        gross_monthly: Decimal,
    ) -> Breakdown {
        let tax = self.income_tax.calculate(gross_monthly);
        let contribution = self.contribution.calculate(gross_monthly);
        Breakdown::from_parts(gross_monthly, tax, contribution)
    }
}

impl NetOracle for NetResolver<'_> {
    fn breakdown(
        &self,
        gross_monthly: Decimal,
    ) -> Breakdown {
        self.resolve(gross_monthly)
    }
}

/// Tuning of the inverse search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Absolute currency distance at which a candidate is accepted.
    pub tolerance: Decimal,

    /// Bisection steps before the best estimate is returned.
    pub max_iterations: u32,

    /// Attempts at growing the upper bound.
    pub max_expansions: u32,

    /// Multiplier applied to the upper bound on each expansion.
    pub expansion_factor: Decimal,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tolerance: dec!(0.01),
            max_iterations: 50,
            max_expansions: 20,
            expansion_factor: dec!(1.5),
        }
    }
}

/// Bounds and progress of one inversion call.
#[derive(Debug, Clone, Copy)]
struct SearchState {
    low: Decimal,
    high: Decimal,
    candidate: Decimal,
    iteration: u32,
}

/// Target net → gross, by bisection over a [`NetOracle`].
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::{GrossResolver, NetResolver, SearchConfig};
/// use payroll_core::schedule::PayrollSchedule;
///
/// let schedule = PayrollSchedule::for_year(2025).unwrap();
/// let resolver = GrossResolver::new(NetResolver::new(&schedule), SearchConfig::default());
///
/// let breakdown = resolver.resolve(dec!(20000)).unwrap();
/// assert!((breakdown.net() - dec!(20000)).abs() < dec!(0.01));
/// assert!(breakdown.gross() > dec!(20000));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GrossResolver<O> {
    oracle: O,
    config: SearchConfig,
}

impl<O: NetOracle> GrossResolver<O> {
    pub fn new(
        oracle: O,
        config: SearchConfig,
    ) -> Self {
        Self { oracle, config }
    }

    /// Finds the breakdown whose net is within tolerance of `target_net`.
    ///
    /// Returns the closest estimate found when the iteration cap runs out.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NegativeTarget`] if `target_net` is negative.
    pub fn resolve(
        &self,
        target_net: Decimal,
    ) -> Result<Breakdown, ResolveError> {
        if target_net < Decimal::ZERO {
            return Err(ResolveError::NegativeTarget(target_net));
        }

        let mut state = self.initial_state(target_net);
        self.expand_upper_bound(&mut state, target_net);

        let mut last = None;
        while state.iteration < self.config.max_iterations {
            state.iteration += 1;
            state.candidate = state.low + (state.high - state.low) / Decimal::TWO;
            let breakdown = self.oracle.breakdown(state.candidate);
            last = Some(breakdown);

            trace!(
                iteration = state.iteration,
                low = %state.low,
                high = %state.high,
                candidate = %state.candidate,
                net = %breakdown.net(),
                "bisection step"
            );

            if (breakdown.net() - target_net).abs() < self.config.tolerance {
                debug!(
                    target_net = %target_net,
                    gross = %breakdown.gross(),
                    iterations = state.iteration,
                    "gross resolved"
                );
                return Ok(breakdown);
            }

            if breakdown.net() < target_net {
                state.low = state.candidate;
            } else {
                state.high = state.candidate;
            }
        }

        // With no bisection step taken the candidate is still the upper bound.
        let last = last.unwrap_or_else(|| self.oracle.breakdown(state.candidate));
        warn!(
            target_net = %target_net,
            gross = %last.gross(),
            net = %last.net(),
            iterations = state.iteration,
            "gross search did not converge; returning best estimate"
        );
        Ok(last)
    }

    fn initial_state(
        &self,
        target_net: Decimal,
    ) -> SearchState {
        let high = target_net.checked_mul(Decimal::TWO).unwrap_or(Decimal::MAX);
        let low = if self.oracle.breakdown(target_net).net() > target_net {
            Decimal::ZERO
        } else {
            target_net
        };

        SearchState {
            low,
            high,
            candidate: high,
            iteration: 0,
        }
    }

    fn expand_upper_bound(
        &self,
        state: &mut SearchState,
        target_net: Decimal,
    ) {
        let mut high_net = self.oracle.breakdown(state.high).net();
        let mut attempts = 0;
        while attempts < self.config.max_expansions && high_net < target_net {
            match state.high.checked_mul(self.config.expansion_factor) {
                Some(high) => {
                    state.high = high;
                    high_net = self.oracle.breakdown(high).net();
                }
                None => break,
            }
            attempts += 1;
        }

        if high_net < target_net {
            warn!(
                target_net = %target_net,
                high = %state.high,
                attempts,
                "upper bound never reached the target; searching anyway"
            );
        }
        state.candidate = state.high;
    }
}
