// src/rollout/mod.rs
#![forbid(unsafe_code)]

mod runner;
mod sink;
mod stats;
mod table;

pub use runner::{Runner, RunnerConfig};
pub use sink::{NoopSink, RolloutSink, TableSink};
pub use stats::{FinalReport, LiveMsg, RolloutStats};
pub use table::{ReportRow, TablePrinter};
