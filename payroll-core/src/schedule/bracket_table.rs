//! Validated progressive income-tax bracket table.
//!
//! A [`BracketTable`] can only be built from rows that partition the
//! non-negative income line: lower bounds strictly ascending, the first one
//! non-negative, each segment running up to the next row's lower bound and
//! the last one unbounded. Lookups rely on that invariant and never fail.

use rust_decimal::Decimal;
use serde::Serialize;

use super::ScheduleError;
use crate::BracketRow;

/// Ordered, immutable schedule of [`BracketRow`]s.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::{BracketRow, schedule::BracketTable};
///
/// let table = BracketTable::new(vec![
///     BracketRow::new(dec!(0.01), dec!(0.00), dec!(0.0192)),
///     BracketRow::new(dec!(746.05), dec!(14.32), dec!(0.0640)),
/// ])
/// .unwrap();
///
/// // A boundary value belongs to the row that starts there.
/// assert_eq!(table.lookup(dec!(746.05)).base_amount, dec!(14.32));
/// assert_eq!(table.lookup(dec!(746.04)).base_amount, dec!(0.00));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketTable {
    rows: Vec<BracketRow>,
}

impl BracketTable {
    /// Validates `rows` and freezes them into a table.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if:
    /// - `rows` is empty
    /// - the first lower bound is negative
    /// - lower bounds are not strictly ascending
    /// - a marginal rate is outside `[0, 1)`
    /// - a base amount is negative or smaller than the previous row's
    pub fn new(rows: Vec<BracketRow>) -> Result<Self, ScheduleError> {
        let first = rows.first().ok_or(ScheduleError::EmptyBracketTable)?;
        if first.lower_bound < Decimal::ZERO {
            return Err(ScheduleError::NegativeLowerBound(first.lower_bound));
        }

        for (index, row) in rows.iter().enumerate() {
            if row.marginal_rate < Decimal::ZERO || row.marginal_rate >= Decimal::ONE {
                return Err(ScheduleError::InvalidMarginalRate {
                    index,
                    rate: row.marginal_rate,
                });
            }
            if row.base_amount < Decimal::ZERO {
                return Err(ScheduleError::InvalidBaseAmount {
                    index,
                    base_amount: row.base_amount,
                });
            }
        }

        for (index, pair) in rows.windows(2).enumerate() {
            let (previous, current) = (&pair[0], &pair[1]);
            if current.lower_bound <= previous.lower_bound {
                return Err(ScheduleError::UnsortedBrackets {
                    index: index + 1,
                    lower_bound: current.lower_bound,
                    previous: previous.lower_bound,
                });
            }
            if current.base_amount < previous.base_amount {
                return Err(ScheduleError::InvalidBaseAmount {
                    index: index + 1,
                    base_amount: current.base_amount,
                });
            }
        }

        Ok(Self { rows })
    }

    /// Returns the row whose segment contains `amount`.
    ///
    /// This is the last row with `lower_bound <= amount`, so an amount equal
    /// to a boundary resolves to the higher bracket. Amounts below the first
    /// lower bound resolve to the first row.
    pub fn lookup(
        &self,
        amount: Decimal,
    ) -> &BracketRow {
        let above = self.rows.partition_point(|row| row.lower_bound <= amount);
        &self.rows[above.saturating_sub(1)]
    }

    pub fn rows(&self) -> &[BracketRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a constructed table; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn rows() -> Vec<BracketRow> {
        vec![
            BracketRow::new(dec!(0.01), dec!(0.00), dec!(0.0192)),
            BracketRow::new(dec!(746.05), dec!(14.32), dec!(0.0640)),
            BracketRow::new(dec!(6332.06), dec!(371.83), dec!(0.1088)),
        ]
    }

    // =========================================================================
    // construction tests
    // =========================================================================

    #[test]
    fn new_accepts_sorted_rows() {
        let table = BracketTable::new(rows()).unwrap();

        assert_eq!(table.len(), 3);
    }

    #[test]
    fn new_rejects_empty_table() {
        let result = BracketTable::new(vec![]);

        assert_eq!(result, Err(ScheduleError::EmptyBracketTable));
    }

    #[test]
    fn new_rejects_negative_first_bound() {
        let result = BracketTable::new(vec![BracketRow::new(dec!(-1), dec!(0), dec!(0.10))]);

        assert_eq!(result, Err(ScheduleError::NegativeLowerBound(dec!(-1))));
    }

    #[test]
    fn new_rejects_unsorted_rows() {
        let mut rows = rows();
        rows.swap(1, 2);

        let result = BracketTable::new(rows);

        assert_eq!(
            result,
            Err(ScheduleError::UnsortedBrackets {
                index: 2,
                lower_bound: dec!(746.05),
                previous: dec!(6332.06),
            })
        );
    }

    #[test]
    fn new_rejects_duplicate_bounds() {
        let mut rows = rows();
        rows[2].lower_bound = dec!(746.05);

        let result = BracketTable::new(rows);

        assert!(matches!(
            result,
            Err(ScheduleError::UnsortedBrackets { index: 2, .. })
        ));
    }

    #[test]
    fn new_rejects_rate_of_one() {
        let mut rows = rows();
        rows[1].marginal_rate = dec!(1);

        let result = BracketTable::new(rows);

        assert_eq!(
            result,
            Err(ScheduleError::InvalidMarginalRate {
                index: 1,
                rate: dec!(1),
            })
        );
    }

    #[test]
    fn new_rejects_decreasing_base_amount() {
        let mut rows = rows();
        rows[2].base_amount = dec!(10.00);

        let result = BracketTable::new(rows);

        assert_eq!(
            result,
            Err(ScheduleError::InvalidBaseAmount {
                index: 2,
                base_amount: dec!(10.00),
            })
        );
    }

    // =========================================================================
    // lookup tests
    // =========================================================================

    #[test]
    fn lookup_inside_segment() {
        let table = BracketTable::new(rows()).unwrap();

        assert_eq!(table.lookup(dec!(5000)).lower_bound, dec!(746.05));
    }

    #[test]
    fn lookup_boundary_resolves_to_higher_row() {
        let table = BracketTable::new(rows()).unwrap();

        assert_eq!(table.lookup(dec!(6332.06)).lower_bound, dec!(6332.06));
        assert_eq!(table.lookup(dec!(6332.05)).lower_bound, dec!(746.05));
    }

    #[test]
    fn lookup_last_segment_is_unbounded() {
        let table = BracketTable::new(rows()).unwrap();

        assert_eq!(table.lookup(dec!(1000000000)).lower_bound, dec!(6332.06));
    }

    #[test]
    fn lookup_below_first_bound_uses_first_row() {
        let table = BracketTable::new(rows()).unwrap();

        assert_eq!(table.lookup(dec!(0.001)).lower_bound, dec!(0.01));
    }
}
