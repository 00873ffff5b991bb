use clap::ValueEnum;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Pay period an amount on the command line is expressed in.
///
/// The engine works on monthly figures only; a biweekly amount is treated as
/// half a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PayPeriod {
    #[default]
    Monthly,
    Biweekly,
}

impl PayPeriod {
    /// Periods per month.
    fn per_month(self) -> Decimal {
        match self {
            PayPeriod::Monthly => Decimal::ONE,
            PayPeriod::Biweekly => dec!(2),
        }
    }

    /// Converts a per-period amount to its monthly equivalent, or `None`
    /// when the result does not fit in a [`Decimal`].
    pub fn to_monthly(
        self,
        amount: Decimal,
    ) -> Option<Decimal> {
        amount.checked_mul(self.per_month())
    }

    /// Factor that turns a monthly figure back into this period.
    pub fn period_factor(self) -> Decimal {
        match self {
            PayPeriod::Monthly => Decimal::ONE,
            PayPeriod::Biweekly => dec!(0.5),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PayPeriod::Monthly => "monthly",
            PayPeriod::Biweekly => "biweekly",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn biweekly_doubles_to_monthly() {
        assert_eq!(PayPeriod::Biweekly.to_monthly(dec!(5000)), Some(dec!(10000)));
        assert_eq!(PayPeriod::Monthly.to_monthly(dec!(5000)), Some(dec!(5000)));
    }

    #[test]
    fn biweekly_overflow_is_none() {
        assert_eq!(PayPeriod::Biweekly.to_monthly(Decimal::MAX), None);
        assert_eq!(PayPeriod::Monthly.to_monthly(Decimal::MAX), Some(Decimal::MAX));
    }

    #[test]
    fn factor_inverts_conversion() {
        for period in [PayPeriod::Monthly, PayPeriod::Biweekly] {
            let monthly = period.to_monthly(dec!(1234.56)).unwrap();
            assert_eq!(monthly * period.period_factor(), dec!(1234.56));
        }
    }
}
