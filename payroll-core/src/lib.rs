//! Gross/net payroll engine.
//!
//! Computes monthly income tax and employee social-security contributions
//! from a gross income, and inverts that relationship to find the gross
//! income behind a target net. See [`PayrollEngine`] for the entry point.

pub mod calculations;
pub mod engine;
pub mod models;
pub mod schedule;

pub use engine::PayrollEngine;
pub use models::*;
