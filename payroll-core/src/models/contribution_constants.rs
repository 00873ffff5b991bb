use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named proportional rate applied to the whole monthly contribution base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRate {
    pub name: String,
    pub rate: Decimal,
}

impl ContributionRate {
    pub fn new(
        name: impl Into<String>,
        rate: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            rate,
        }
    }
}

/// Parameters of the employee social-security contribution formula.
///
/// The contribution base is expressed per day and bounded by multiples of
/// `base_unit_value`, the government-published daily reference value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionConstants {
    /// Daily reference value (floor of the contribution base).
    pub base_unit_value: Decimal,

    /// Multiplier turning a raw wage into its integrated base equivalent.
    pub integration_factor: Decimal,

    /// Average days per month used to move between daily and monthly figures.
    pub days_per_month: Decimal,

    /// Ceiling of the daily base, as a multiple of `base_unit_value`.
    pub cap_multiple: u32,

    /// Daily base (in multiples of `base_unit_value`) above which
    /// `excess_rate` applies to the excess only.
    pub excess_threshold_multiple: Decimal,

    pub excess_rate: Decimal,

    /// Rates applied directly to the monthly base.
    pub flat_rates: Vec<ContributionRate>,
}

impl ContributionConstants {
    /// Upper clamp of the daily base.
    pub fn daily_ceiling(&self) -> Decimal {
        self.base_unit_value * Decimal::from(self.cap_multiple)
    }

    /// Lower clamp of the daily base.
    pub fn daily_floor(&self) -> Decimal {
        self.base_unit_value
    }

    /// Daily base above which the excess term starts accruing.
    pub fn excess_threshold(&self) -> Decimal {
        self.base_unit_value * self.excess_threshold_multiple
    }
}
