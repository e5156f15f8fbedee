// src/rollout/sink.rs
#![forbid(unsafe_code)]

use crate::rollout::table::{ReportRow, TablePrinter};

/// Receives the periodic report rows the runner emits. The runner computes
/// every number; implementations only decide where the row goes.
pub trait RolloutSink {
    fn on_report(&mut self, row: &ReportRow);
}

/// Discards every row. Used whenever reporting is disabled so the hot loop
/// pays nothing for the hook.
#[derive(Default)]
pub struct NoopSink;

impl RolloutSink for NoopSink {
    fn on_report(&mut self, _row: &ReportRow) {}
}

/// Formats rows as a stdout table, reprinting the header on a cadence.
pub struct TableSink {
    printer: TablePrinter,
}

impl TableSink {
    pub fn with_cadence(every_steps: u64, header_every_rows: u64) -> Self {
        Self {
            printer: TablePrinter::new(every_steps, header_every_rows),
        }
    }
}

impl RolloutSink for TableSink {
    fn on_report(&mut self, row: &ReportRow) {
        self.printer.maybe_print(row);
    }
}
