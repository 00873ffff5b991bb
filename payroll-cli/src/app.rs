use std::fmt;
use std::path::Path;

use anyhow::Context;
use rust_decimal::Decimal;
use tracing::{debug, info};

use payroll_core::calculations::ContributionTerm;
use payroll_core::schedule::PayrollSchedule;
use payroll_core::{Breakdown, PayrollEngine};
use payroll_data::BracketTableLoader;

use crate::period::PayPeriod;
use crate::utils::{format_currency, format_rate};

/// Builds the engine for `year`, optionally replacing its bracket table with
/// one loaded from a CSV file.
pub fn build_engine(
    year: i32,
    brackets: Option<&Path>,
) -> anyhow::Result<PayrollEngine> {
    let mut schedule = PayrollSchedule::for_year(year)
        .with_context(|| format!("no payroll schedule for year {year}"))?;

    if let Some(path) = brackets {
        let table = BracketTableLoader::load_from_file(path)
            .with_context(|| format!("failed to load bracket table from '{}'", path.display()))?;
        info!(path = %path.display(), rows = table.len(), "using bracket table override");
        schedule = schedule.with_brackets(table);
    }

    info!(year, "payroll schedule ready");
    Ok(PayrollEngine::new(schedule))
}

/// Which way a calculation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The amount is a gross income; compute the net.
    GrossToNet,
    /// The amount is a desired net income; find the gross.
    NetToGross,
}

/// Result of one calculation, expressed in the requested pay period.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub direction: Direction,
    pub period: PayPeriod,
    /// The amount as entered, per period.
    pub input: Decimal,
    /// Per-period breakdown, unrounded.
    pub breakdown: Breakdown,
    /// Per-period contribution terms.
    pub contribution_terms: Vec<ContributionTerm>,
}

/// Runs one calculation. `amount` is per `period`; the engine is always fed
/// the monthly equivalent and its results are scaled back.
pub fn calculate(
    engine: &PayrollEngine,
    direction: Direction,
    amount: Decimal,
    period: PayPeriod,
) -> anyhow::Result<Report> {
    let monthly = period
        .to_monthly(amount)
        .with_context(|| format!("{} amount {amount} is too large", period.label()))?;
    debug!(%amount, %monthly, period = period.label(), ?direction, "calculating");

    let monthly_breakdown = match direction {
        Direction::GrossToNet => engine.net_from_gross(monthly),
        Direction::NetToGross => engine
            .gross_from_net(monthly)
            .context("cannot solve for gross income")?,
    };

    let factor = period.period_factor();
    let detail = engine.contribution_detail(monthly_breakdown.gross());

    let mut contribution_terms = Vec::with_capacity(detail.flat_terms.len() + 1);
    contribution_terms.push(ContributionTerm {
        name: "excess over threshold".to_string(),
        amount: detail.excess_term * factor,
    });
    contribution_terms.extend(detail.flat_terms.into_iter().map(|term| ContributionTerm {
        amount: term.amount * factor,
        ..term
    }));

    Ok(Report {
        direction,
        period,
        input: amount,
        breakdown: monthly_breakdown.scaled(factor),
        contribution_terms,
    })
}

/// A deduction as printed: `-$770.90` for a charge, `+$103.55` for a credit.
fn signed_deduction(amount: Decimal) -> String {
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("+{}", format_currency(-amount))
    } else if amount.is_zero() {
        format_currency(amount)
    } else {
        format!("-{}", format_currency(amount))
    }
}

impl fmt::Display for Report {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let b = self.breakdown.rounded();

        match self.direction {
            Direction::GrossToNet => {
                writeln!(f, "Net income ({}):    {}", self.period.label(), format_currency(b.net()))?;
                writeln!(f)?;
                writeln!(f, "Gross income:        {}", format_currency(b.gross()))?;
            }
            Direction::NetToGross => {
                writeln!(f, "Gross income ({}):  {}", self.period.label(), format_currency(b.gross()))?;
                writeln!(f)?;
                writeln!(f, "Target net:          {}", format_currency(self.input))?;
                writeln!(f, "Achieved net:        {}", format_currency(b.net()))?;
            }
        }

        let tax_label = if b.tax().is_sign_negative() && !b.tax().is_zero() {
            "Income tax (credit):"
        } else {
            "Income tax:         "
        };
        writeln!(f, "{tax_label} {}", signed_deduction(b.tax()))?;
        writeln!(f, "Social security:     {}", signed_deduction(b.contribution()))?;
        for term in &self.contribution_terms {
            writeln!(f, "  {:<36} {}", term.name, format_currency(term.amount))?;
        }
        write!(f, "Total deductions:    {}", signed_deduction(b.total_deductions()))
    }
}

/// Renders the active bracket table and credit of a schedule.
pub fn render_schedule(schedule: &PayrollSchedule) -> String {
    let mut out = format!("Monthly income-tax brackets ({})\n", schedule.year());
    out.push_str(&format!(
        "{:>16} {:>14} {:>10}\n",
        "Lower bound", "Base amount", "Rate"
    ));
    for row in schedule.brackets().rows() {
        out.push_str(&format!(
            "{:>16} {:>14} {:>10}\n",
            format_currency(row.lower_bound),
            format_currency(row.base_amount),
            format_rate(row.marginal_rate)
        ));
    }

    let credit = schedule.credit();
    out.push_str(&format!(
        "Low-income credit: {} for gross up to {}",
        format_currency(credit.credit_amount),
        format_currency(credit.income_ceiling)
    ));
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn engine() -> PayrollEngine {
        build_engine(2025, None).unwrap()
    }

    #[test]
    fn build_engine_rejects_unknown_year() {
        let err = build_engine(1999, None).unwrap_err();

        assert!(err.to_string().contains("1999"));
    }

    #[test]
    fn build_engine_reports_missing_csv() {
        let err = build_engine(2025, Some(Path::new("no/such/brackets.csv"))).unwrap_err();

        assert!(err.to_string().contains("no/such/brackets.csv"));
    }

    #[test]
    fn gross_to_net_monthly() {
        let report = calculate(&engine(), Direction::GrossToNet, dec!(10000), PayPeriod::Monthly)
            .unwrap();

        assert_eq!(report.breakdown.gross(), dec!(10000));
        assert_eq!(report.breakdown.tax(), dec!(770.901872));
        assert_eq!(report.contribution_terms.len(), 4);
    }

    #[test]
    fn biweekly_scales_monthly_result() {
        let engine = engine();
        let monthly = engine.net_from_gross(dec!(10000));

        let report =
            calculate(&engine, Direction::GrossToNet, dec!(5000), PayPeriod::Biweekly).unwrap();

        assert_eq!(report.input, dec!(5000));
        assert_eq!(report.breakdown, monthly.scaled(dec!(0.5)));
    }

    #[test]
    fn biweekly_amount_too_large_is_an_error() {
        let amount = crate::utils::parse_amount("50,000,000,000,000,000,000,000,000,000").unwrap();

        let err = calculate(&engine(), Direction::GrossToNet, amount, PayPeriod::Biweekly)
            .unwrap_err();

        assert!(err.to_string().contains("too large"), "{err}");
    }

    #[test]
    fn contribution_terms_sum_to_contribution() {
        let report = calculate(&engine(), Direction::GrossToNet, dec!(25000), PayPeriod::Biweekly)
            .unwrap();

        let sum: Decimal = report.contribution_terms.iter().map(|t| t.amount).sum();

        assert_eq!(sum, report.breakdown.contribution());
    }

    #[test]
    fn net_to_gross_recovers_gross() {
        let engine = engine();
        let net = engine.net_from_gross(dec!(15000)).net();

        let report = calculate(&engine, Direction::NetToGross, net, PayPeriod::Monthly).unwrap();

        assert!((report.breakdown.gross() - dec!(15000)).abs() < dec!(0.02));
    }

    #[test]
    fn credit_is_printed_with_plus_sign() {
        let report = calculate(&engine(), Direction::GrossToNet, dec!(5000), PayPeriod::Monthly)
            .unwrap();

        let text = report.to_string();

        assert!(text.contains("Income tax (credit): +$103.55"), "{text}");
    }

    #[test]
    fn report_lists_gross_and_net() {
        let report = calculate(&engine(), Direction::GrossToNet, dec!(10000), PayPeriod::Monthly)
            .unwrap();

        let text = report.to_string();

        assert!(text.contains("Gross income:        $10,000.00"), "{text}");
        assert!(text.contains("Income tax:          -$770.90"), "{text}");
    }

    #[test]
    fn signed_deduction_formats() {
        assert_eq!(signed_deduction(dec!(770.90)), "-$770.90");
        assert_eq!(signed_deduction(dec!(-103.55)), "+$103.55");
        assert_eq!(signed_deduction(dec!(0)), "$0.00");
    }

    #[test]
    fn schedule_render_lists_every_row() {
        let engine = engine();

        let text = render_schedule(engine.schedule());

        assert_eq!(text.lines().count(), 2 + 11 + 1);
        assert!(text.contains("$375,975.62"), "{text}");
        assert!(text.contains("Low-income credit: $390.12 for gross up to $9,081.00"));
    }
}
