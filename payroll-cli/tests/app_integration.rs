use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use payroll_cli::app::{Direction, build_engine, calculate, render_schedule};
use payroll_cli::period::PayPeriod;
use payroll_cli::utils::parse_amount;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../payroll-data/test-data")
        .join(name)
}

#[test]
fn fixture_override_matches_compiled_schedule() {
    let compiled = build_engine(2025, None).unwrap();
    let loaded = build_engine(2025, Some(&fixture("brackets_2025.csv"))).unwrap();

    assert_eq!(loaded, compiled);
}

#[test]
fn flat_override_changes_the_tax() {
    let path = std::env::temp_dir().join(format!("net-pay-flat-{}.csv", std::process::id()));
    fs::write(
        &path,
        "lower_bound,base_amount,marginal_rate\n0.01,0.00,0.10\n",
    )
    .unwrap();

    let engine = build_engine(2025, Some(&path)).unwrap();
    let report = calculate(&engine, Direction::GrossToNet, dec!(20000), PayPeriod::Monthly).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(report.breakdown.tax(), dec!(1999.999));
    assert!(render_schedule(engine.schedule()).contains("10%"));
}

#[test]
fn unsorted_override_is_rejected() {
    let path = std::env::temp_dir().join(format!("net-pay-unsorted-{}.csv", std::process::id()));
    fs::write(
        &path,
        "lower_bound,base_amount,marginal_rate\n746.05,14.32,0.0640\n0.01,0.00,0.0192\n",
    )
    .unwrap();

    let result = build_engine(2025, Some(&path));
    fs::remove_file(&path).ok();

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("failed to load bracket table"), "{message}");
}

#[test]
fn biweekly_round_trip_through_parsed_input() {
    let engine = build_engine(2025, None).unwrap();
    let gross = parse_amount("7,500").unwrap();

    let forward = calculate(&engine, Direction::GrossToNet, gross, PayPeriod::Biweekly).unwrap();
    let back = calculate(
        &engine,
        Direction::NetToGross,
        forward.breakdown.net(),
        PayPeriod::Biweekly,
    )
    .unwrap();

    assert!((back.breakdown.gross() - gross).abs() < dec!(0.02));
    assert!(back.to_string().starts_with("Gross income (biweekly):"));
}
