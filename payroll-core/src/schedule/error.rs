use rust_decimal::Decimal;
use thiserror::Error;

/// Configuration invariant violations detected when a schedule is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// No compiled-in schedule exists for the requested year.
    #[error("no payroll schedule available for year {0}")]
    UnknownYear(i32),

    /// The bracket table has no rows.
    #[error("bracket table is empty")]
    EmptyBracketTable,

    /// The first bracket starts below zero.
    #[error("first bracket lower bound must be non-negative, got {0}")]
    NegativeLowerBound(Decimal),

    /// Lower bounds are not strictly ascending.
    #[error("bracket {index} lower bound {lower_bound} does not exceed the previous bound {previous}")]
    UnsortedBrackets {
        index: usize,
        lower_bound: Decimal,
        previous: Decimal,
    },

    /// A marginal rate lies outside [0, 1).
    #[error("bracket {index} marginal rate must be in [0, 1), got {rate}")]
    InvalidMarginalRate { index: usize, rate: Decimal },

    /// A base amount is negative or smaller than the previous row's.
    #[error("bracket {index} base amount {base_amount} is negative or decreasing")]
    InvalidBaseAmount { index: usize, base_amount: Decimal },

    /// The base unit value must be positive.
    #[error("base unit value must be positive, got {0}")]
    InvalidBaseUnitValue(Decimal),

    /// The integration factor must be at least 1.
    #[error("integration factor must be at least 1, got {0}")]
    InvalidIntegrationFactor(Decimal),

    /// Days per month must be positive.
    #[error("days per month must be positive, got {0}")]
    InvalidDaysPerMonth(Decimal),

    /// The contribution ceiling would fall below the floor.
    #[error("cap multiple must be at least 1, got {0}")]
    InvalidCapMultiple(u32),

    /// The excess threshold multiple must be non-negative.
    #[error("excess threshold multiple must be non-negative, got {0}")]
    InvalidExcessThreshold(Decimal),

    /// A contribution rate lies outside [0, 1).
    #[error("contribution rate '{name}' must be in [0, 1), got {rate}")]
    InvalidContributionRate { name: String, rate: Decimal },

    /// Credit ceiling or amount is negative.
    #[error("low-income credit values must be non-negative, got ceiling {ceiling} and amount {amount}")]
    InvalidCredit { ceiling: Decimal, amount: Decimal },
}
