//! crabcalc library: the calculator engine plus the terminal front end
//! that drives it.

pub mod app;
pub mod config;
pub mod engine;
pub mod logging;
pub mod ui;
