// src/rollout/table.rs
#![forbid(unsafe_code)]

/// One periodic row printed by the table reporter.
///
/// Keep this as a "transport struct": Runner/Stats compute everything,
/// TablePrinter just formats.
#[derive(Clone, Debug)]
pub struct ReportRow {
    pub step: u64,
    pub steps_total: u64,

    pub sps: f64,

    pub episodes_finished: u64,
    pub avg_ep_len: f64,
    pub max_ep_len: u64,

    pub catches: u64,
    pub catches_per_step: f64,
    pub reward_per_step: f64,
    pub total_reward: i64,
}

pub struct TablePrinter {
    every: u64,
    header_every: u64,
    rows_printed: u64,
}

impl TablePrinter {
    /// `every`: print a row every N steps. If 0 => disabled.
    /// `header_every`: re-print header every N rows.
    pub fn new(every: u64, header_every: u64) -> Self {
        Self {
            every,
            header_every: header_every.max(1),
            rows_printed: 0,
        }
    }

    pub fn maybe_print(&mut self, row: &ReportRow) {
        if self.every == 0 {
            return;
        }
        if row.step == 0 || (row.step % self.every != 0) {
            return;
        }

        if self.rows_printed % self.header_every == 0 {
            self.print_header();
        }

        self.print_row(row);
        self.rows_printed += 1;
    }

    fn print_header(&self) {
        println!(
            "{:>10} {:>9} {:>7} {:>10} {:>10} {:>9} {:>11} {:>12} {:>12}",
            "step",
            "sps",
            "eps",
            "avg_ep",
            "max_ep",
            "catches",
            "catch/step",
            "reward/step",
            "total_rew",
        );
    }

    fn print_row(&self, r: &ReportRow) {
        println!(
            "{:>10}/{:<10} {:>9.1} {:>7} {:>10.1} {:>10} {:>9} {:>11.3} {:>12.3} {:>12}",
            r.step,
            r.steps_total,
            r.sps,
            r.episodes_finished,
            r.avg_ep_len,
            r.max_ep_len,
            r.catches,
            r.catches_per_step,
            r.reward_per_step,
            r.total_reward,
        );
    }
}
