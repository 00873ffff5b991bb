use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

/// Gross-to-net breakdown for one monthly period.
///
/// `net` always equals `gross - tax - contribution`; the fields are private
/// so every producer goes through [`Breakdown::from_parts`]. A negative `tax`
/// is a net credit to the employee.
///
/// Deserializing ignores any `net` in the input and recomputes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BreakdownParts")]
pub struct Breakdown {
    gross: Decimal,
    net: Decimal,
    tax: Decimal,
    contribution: Decimal,
}

#[derive(Deserialize)]
struct BreakdownParts {
    gross: Decimal,
    tax: Decimal,
    contribution: Decimal,
}

impl From<BreakdownParts> for Breakdown {
    fn from(parts: BreakdownParts) -> Self {
        Self::from_parts(parts.gross, parts.tax, parts.contribution)
    }
}

impl Breakdown {
    pub fn from_parts(
        gross: Decimal,
        tax: Decimal,
        contribution: Decimal,
    ) -> Self {
        Self {
            gross,
            net: gross - tax - contribution,
            tax,
            contribution,
        }
    }

    /// Breakdown of a zero income.
    pub fn zero() -> Self {
        Self::from_parts(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    }

    pub fn gross(&self) -> Decimal {
        self.gross
    }

    pub fn net(&self) -> Decimal {
        self.net
    }

    pub fn tax(&self) -> Decimal {
        self.tax
    }

    pub fn contribution(&self) -> Decimal {
        self.contribution
    }

    /// Tax plus contribution. Negative when the credit outweighs both.
    pub fn total_deductions(&self) -> Decimal {
        self.tax + self.contribution
    }

    /// Scales every component by `factor`, e.g. `0.5` for a biweekly view
    /// of a monthly figure.
    pub fn scaled(
        &self,
        factor: Decimal,
    ) -> Self {
        Self::from_parts(
            self.gross * factor,
            self.tax * factor,
            self.contribution * factor,
        )
    }

    /// Rounds gross, tax and contribution to cents and recomputes net from
    /// the rounded parts, so the printed figures still add up.
    pub fn rounded(&self) -> Self {
        Self::from_parts(
            round_half_up(self.gross),
            round_half_up(self.tax),
            round_half_up(self.contribution),
        )
    }
}
