//! Command implementations for mvnext-cli

pub mod apply;
pub mod check;
pub mod options;
mod output;

pub use apply::run_apply;
pub use check::run_check;
