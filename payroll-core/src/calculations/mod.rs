//! Payroll calculation modules.
//!
//! This module provides the income-tax and contribution calculations and the
//! resolvers that compose them into gross-to-net breakdowns and back.

pub mod common;
pub mod contribution;
pub mod income_tax;
pub mod resolver;

pub use common::AmountError;
pub use contribution::{Contribution, ContributionDetail, ContributionTerm};
pub use income_tax::IncomeTax;
pub use resolver::{GrossResolver, NetOracle, NetResolver, ResolveError, SearchConfig};
