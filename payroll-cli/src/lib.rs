pub mod app;
pub mod logging;
pub mod period;
pub mod utils;
