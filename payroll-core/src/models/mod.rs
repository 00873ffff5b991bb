mod breakdown;
mod bracket_row;
mod contribution_constants;
mod low_income_credit;

pub use breakdown::Breakdown;
pub use bracket_row::BracketRow;
pub use contribution_constants::{ContributionConstants, ContributionRate};
pub use low_income_credit::LowIncomeCredit;
