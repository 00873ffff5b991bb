//! Loading of payroll reference data from files.

mod loader;

pub use loader::{BracketRecord, BracketTableLoader, BracketTableLoaderError};
