// src/bin/catch_cli.rs
use clap::Parser;

use catch_env::env::{CatchConfig, EnvError};
use catch_env::policy::{Policy, RandomPolicy, TrackerPolicy};
use catch_env::rollout::{NoopSink, RolloutSink, Runner, RunnerConfig, TableSink};

#[derive(Parser, Debug)]
#[command(name = "catch_cli")]
struct Args {
    // ---------------- interactive / debug ----------------

    /// Render board as ASCII each step
    #[arg(long)]
    render: bool,

    /// Sleep ms between renders (only used with --render)
    #[arg(long, default_value_t = 100)]
    sleep_ms: u64,

    // ---------------- rollout sizing ----------------

    /// How many environment steps to run TOTAL (across episodes)
    #[arg(long, default_value_t = 200)]
    steps: u64,

    /// RNG seed (optional)
    #[arg(long)]
    seed: Option<u64>,

    /// Policy: random | tracker
    #[arg(long, default_value = "random")]
    policy: String,

    // ---------------- board dimensions ----------------

    /// Grid height (>= 2)
    #[arg(long, default_value_t = 5)]
    height: usize,

    /// Grid width
    #[arg(long, default_value_t = 5)]
    width: usize,

    /// Pad width (<= width)
    #[arg(long, default_value_t = 1)]
    pad_width: usize,

    // ---------------- live status ----------------

    /// Print periodic performance stats (steps/sec)
    #[arg(long)]
    perf: bool,

    /// Progress bar
    #[arg(long)]
    progress: bool,

    /// Update live stats message every N steps
    #[arg(long, default_value_t = 10_000)]
    stats_every: u64,

    // ---------------- periodic table reporting ----------------

    /// Print a table row every N steps (0 disables)
    #[arg(long, default_value_t = 0)]
    report_every: u64,

    /// Reprint table header every N printed rows
    #[arg(long, default_value_t = 20)]
    report_header_every: u64,
}

fn main() -> Result<(), EnvError> {
    let args = Args::parse();

    // Episode seeds are derived from this base seed.
    let base_seed = args.seed.unwrap_or(12345);
    let env_cfg = CatchConfig::new(args.height, args.width, args.pad_width);
    env_cfg.validate()?;

    // Policy instance (boxed so the CLI can switch implementations at runtime).
    let mut policy: Box<dyn Policy> = match args.policy.as_str() {
        "tracker" => Box::new(TrackerPolicy::new()),
        _ => Box::new(RandomPolicy::new(base_seed.wrapping_add(999))),
    };

    // Rollout configuration (pure data; no logic).
    let cfg = RunnerConfig {
        steps: args.steps,
        base_seed,
        env: env_cfg,

        render: args.render,
        sleep_ms: args.sleep_ms,

        perf: args.perf,
        progress: args.progress,
        stats_every: args.stats_every,

        report_every: args.report_every,
        report_header_every: args.report_header_every,

        policy_name: args.policy.clone(),
    };

    // Reporting sink: either a periodic table printer or a no-op.
    let sink: Box<dyn RolloutSink> = if args.report_every > 0 {
        Box::new(TableSink::with_cadence(
            args.report_every,
            args.report_header_every,
        ))
    } else {
        Box::new(NoopSink::default())
    };

    let mut runner = Runner::new(cfg, sink);
    let report = runner.run(&mut *policy)?;

    // Final one-line summary (useful for logs / grep).
    println!(
        "DONE: policy={} steps_done={} elapsed={:.3}s steps/s={:.1} episodes_finished={} avg_ep_len={:.2} max_ep_len={} catches={} catch/step={:.3} reward/step={:.3} total_reward={} (last_ep_len={} last_done={})",
        report.policy,
        report.steps_done,
        report.elapsed_s,
        report.steps_per_s,
        report.episodes_finished,
        report.avg_ep_len,
        report.max_ep_len,
        report.catches,
        report.catches_per_step,
        report.reward_per_step,
        report.total_reward,
        report.last_ep_len,
        report.last_done,
    );

    Ok(())
}
