//! CLI command implementations.

mod check;
mod format;
mod stats;
mod tr;

pub use check::{run_check, CheckArgs};
pub use format::{run_format, FormatArgs};
pub use stats::{run_stats, StatsArgs};
pub use tr::{run_tr, TrArgs};
