//! CLI library components for the CF grid mapping checker.

pub mod input;
pub mod logging;
pub mod report;
