// src/rollout/runner.rs
#![forbid(unsafe_code)]

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::env::{CatchConfig, EnvError, GridWorld};
use crate::policy::Policy;

use super::sink::RolloutSink;
use super::stats::{FinalReport, RolloutStats};
use super::table::ReportRow;

#[derive(Clone, Debug)]
pub struct RunnerConfig {
    // ---------------- core rollout ----------------
    /// Total environment steps to execute across episodes.
    pub steps: u64,
    /// Base seed; episode i is reseeded with base_seed + i.
    pub base_seed: u64,
    pub env: CatchConfig,

    // ---------------- optional rendering ----------------
    pub render: bool,
    pub sleep_ms: u64,

    // ---------------- live status ----------------
    pub perf: bool,
    pub progress: bool,
    /// Update progress message/perf line every N steps.
    pub stats_every: u64,

    // ---------------- periodic table reporting ----------------
    /// Print a stats row every N steps. 0 disables reporting completely.
    pub report_every: u64,
    /// Reprint the table header every N printed rows.
    pub report_header_every: u64,

    /// Used only for the final report string.
    pub policy_name: String,
}

pub struct Runner {
    cfg: RunnerConfig,
    sink: Box<dyn RolloutSink>,
}

impl Runner {
    pub fn new(cfg: RunnerConfig, sink: Box<dyn RolloutSink>) -> Self {
        Self { cfg, sink }
    }

    pub fn run(&mut self, policy: &mut dyn Policy) -> Result<FinalReport, EnvError> {
        let cfg = self.cfg.clone();

        // Progress bar is purely UI; runner logic works without it.
        let pb = if cfg.progress {
            let pb = ProgressBar::new(cfg.steps);
            pb.set_style(
                ProgressStyle::with_template(
                    "{bar:40.cyan/blue} {pos:>9}/{len:<9}  {percent:>3}%  {elapsed_precise}  {msg}",
                )
                .unwrap()
                .progress_chars("=>-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut stats = RolloutStats::new();

        // Episode state.
        let mut episode_id: u64 = 0;
        let mut env = GridWorld::new_with_config(cfg.env, cfg.base_seed)?;
        env.reset();

        if cfg.render {
            print!("{}", env.render_ascii());
        }

        let stats_every = cfg.stats_every.max(1);

        while stats.steps_done < cfg.steps {
            // ------------------------------------------------------------
            // Episode boundary: finalize counters, then reset environment.
            // ------------------------------------------------------------
            if env.is_done() {
                stats.on_episode_end();

                episode_id += 1;
                env.seed(cfg.base_seed.wrapping_add(episode_id));
                env.reset();

                if cfg.render {
                    println!(
                        "=== reset: episodes_finished={} avg_ep_len={:.2} max_ep_len={} ===",
                        stats.episodes_finished,
                        stats.avg_ep_len(),
                        stats.episode_len_max
                    );
                    print!("{}", env.render_ascii());
                }
                continue;
            }

            // ------------------------------------------------------------
            // One step: policy chooses still/left/right.
            // ------------------------------------------------------------
            let action = policy.choose_action(&env);
            let out = env.step(action)?;

            stats.on_step(out.reward);

            if let Some(ref pb) = pb {
                pb.inc(1);
            }

            if cfg.render {
                println!(
                    "step={} action={:?} reward={} done={}",
                    stats.steps_done, action, out.reward, out.done
                );
                print!("{}", env.render_ascii());
                std::thread::sleep(Duration::from_millis(cfg.sleep_ms));
            }

            // ------------------------------------------------------------
            // Periodic table report: build a ReportRow and hand it to sink.
            // ------------------------------------------------------------
            if cfg.report_every > 0 && (stats.steps_done % cfg.report_every == 0) {
                let row = ReportRow {
                    step: stats.steps_done,
                    steps_total: cfg.steps,
                    sps: stats.steps_per_sec(),
                    episodes_finished: stats.episodes_finished,
                    avg_ep_len: stats.avg_ep_len(),
                    max_ep_len: stats.episode_len_max,
                    catches: stats.catches,
                    catches_per_step: stats.catches_per_step(),
                    reward_per_step: stats.reward_per_step(),
                    total_reward: stats.reward_sum,
                };

                self.sink.on_report(&row);
            }

            // ------------------------------------------------------------
            // Live progress message/perf line cadence.
            // ------------------------------------------------------------
            if (cfg.perf || cfg.progress) && (stats.steps_done % stats_every == 0) {
                let live = stats.live_msg();

                if let Some(ref pb) = pb {
                    pb.set_message(live.msg);
                } else if cfg.perf {
                    println!(
                        "stats: steps_done={}/{} {}",
                        stats.steps_done, cfg.steps, live.msg
                    );
                }
            }
        }

        if let Some(pb) = pb {
            pb.finish_with_message("done");
        }

        Ok(stats.final_report(&cfg.policy_name, stats.ep_len, env.is_done()))
    }
}
