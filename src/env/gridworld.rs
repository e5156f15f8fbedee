// src/env/gridworld.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use crate::env::action::Action;
use crate::env::config::CatchConfig;
use crate::env::constants::ACTION_DIM;
use crate::env::error::EnvError;
use crate::env::grid::{Ball, Grid};
use crate::env::info::Info;

/// Result of one transition. `grid` is an independent snapshot of the board
/// after the pad and the ball have both moved.
#[derive(Clone, Debug, PartialEq)]
pub struct StepOutcome {
    pub grid: Grid,
    /// +1 catch, -1 miss, 0 while the ball is airborne.
    pub reward: i32,
    /// True iff the episode ended on a miss. A catch respawns and continues.
    pub done: bool,
    pub info: Info,
}

/// The catch environment: one falling ball, one pad on the bottom row.
///
/// Episode semantics:
/// - `reset` places the pad at the left edge and a ball at a random column
///   of the top row, then returns the starting board.
/// - `step` moves the pad, drops the ball one row, and scores the post-move
///   position. A catch respawns the ball in the same step; a miss terminates.
/// - Stepping before the first reset, or after a miss, is rejected without
///   touching state.
///
/// The only randomness is the spawn column, drawn from an owned `StdRng`, so
/// identical seeds and action sequences replay identical trajectories.
#[derive(Clone, Debug)]
pub struct GridWorld {
    cfg: CatchConfig,
    grid: Grid,
    ball: Ball,
    pad_loc: usize,

    rng: StdRng,

    started: bool,
    done: bool,

    pub steps: u64,
    pub catches: u64,
}

impl GridWorld {
    /// Default 5x5 board with a single-cell pad.
    pub fn new(seed: u64) -> Self {
        Self::new_with_config(CatchConfig::default(), seed).expect("default config is valid")
    }

    /// Sets dimensions only; nothing is placed until `reset`.
    pub fn new_with_config(cfg: CatchConfig, seed: u64) -> Result<Self, EnvError> {
        cfg.validate()?;
        Ok(Self {
            grid: Grid::zeros(cfg.height, cfg.width),
            ball: Ball { col: 0, row: 0 },
            pad_loc: 0,
            rng: StdRng::seed_from_u64(seed),
            started: false,
            done: false,
            steps: 0,
            catches: 0,
            cfg,
        })
    }

    pub fn config(&self) -> &CatchConfig {
        &self.cfg
    }

    pub fn ball(&self) -> Ball {
        self.ball
    }

    pub fn pad_loc(&self) -> usize {
        self.pad_loc
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Independent copy of the current board.
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// Observation shape: (height, width), cell values in {0, 1}.
    pub fn observation_shape(&self) -> (usize, usize) {
        (self.cfg.height, self.cfg.width)
    }

    pub fn action_dim(&self) -> usize {
        ACTION_DIM
    }

    /// Replace the spawn-column RNG. Forwarded from the adapter's seed hook;
    /// takes effect on the next `place_ball`.
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    // -------------------------------------------------------------------------
    // Episode lifecycle
    // -------------------------------------------------------------------------

    /// Clear the board, pin the pad to the left edge, spawn a fresh ball.
    /// Returns a snapshot of the starting board.
    pub fn reset(&mut self) -> Grid {
        self.grid.clear();

        self.pad_loc = 0;
        self.paint_pad_row();

        self.place_ball();

        self.started = true;
        self.done = false;
        self.steps = 0;
        self.catches = 0;

        self.grid.clone()
    }

    /// One transition: pad moves, then the ball drops, then the post-move
    /// position is scored. Order matters: the reward reads the pad span
    /// after the move.
    pub fn step(&mut self, action: Action) -> Result<StepOutcome, EnvError> {
        if !self.started {
            return Err(EnvError::NotReset);
        }
        if self.done {
            return Err(EnvError::EpisodeOver);
        }

        self.move_pad(action);
        self.move_ball();
        let (reward, done) = self.score_ball();

        self.done = done;
        self.steps += 1;

        Ok(StepOutcome {
            grid: self.grid.clone(),
            reward,
            done,
            info: Info::new(),
        })
    }

    /// Raw-id entry point. Out-of-range ids are rejected before any mutation.
    pub fn step_id(&mut self, id: u8) -> Result<StepOutcome, EnvError> {
        let action = Action::from_id(id)?;
        self.step(action)
    }

    // -------------------------------------------------------------------------
    // Transition pieces
    // -------------------------------------------------------------------------

    fn move_pad(&mut self, action: Action) {
        match action {
            Action::Still => {}
            Action::Left => self.pad_loc = self.pad_loc.saturating_sub(1),
            Action::Right => self.pad_loc = (self.pad_loc + 1).min(self.cfg.pad_loc_max()),
        }
        // Repainting the whole bottom row also erases a stale ball cell left
        // there by a previous catch; the pad covered that column anyway.
        self.paint_pad_row();
    }

    fn paint_pad_row(&mut self) {
        let bottom = self.cfg.height - 1;
        self.grid.clear_row(bottom);
        for col in self.pad_loc..self.pad_loc + self.cfg.pad_width {
            self.grid.set(bottom, col, 1);
        }
    }

    fn move_ball(&mut self) {
        // score_ball always respawns or terminates once the ball is in the
        // bottom row, so the row below must exist here.
        debug_assert!(self.ball.row + 1 < self.cfg.height);
        self.grid.set(self.ball.row, self.ball.col, 0);
        self.ball.row += 1;
        self.grid.set(self.ball.row, self.ball.col, 1);
    }

    fn score_ball(&mut self) -> (i32, bool) {
        if self.ball.row != self.cfg.height - 1 {
            return (0, false); // still airborne
        }
        if self.pad_loc <= self.ball.col && self.ball.col < self.pad_loc + self.cfg.pad_width {
            self.catches += 1;
            self.place_ball();
            (1, false)
        } else {
            // Miss: leave the board as-is, ball resting in the bottom row.
            (-1, true)
        }
    }

    /// Spawn a ball at a uniformly random column of the top row. No overlap
    /// check: height >= 2 keeps the spawn row clear of the pad row.
    fn place_ball(&mut self) {
        let col = self.rng.gen_range(0..self.cfg.width);
        self.grid.set(0, col, 1);
        self.ball = Ball { col, row: 0 };
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    pub fn render_ascii(&self) -> String {
        let mut s = String::new();
        let border = format!("+{}+\n", "-".repeat(self.cfg.width));
        s.push_str(&border);
        for r in 0..self.cfg.height {
            s.push('|');
            for &v in self.grid.row(r) {
                s.push(if v == 0 { ' ' } else { '#' });
            }
            s.push_str("|\n");
        }
        s.push_str(&border);
        s.push_str(&format!(
            "ball=({},{}) pad_loc={} steps={} catches={} done={}\n",
            self.ball.col, self.ball.row, self.pad_loc, self.steps, self.catches, self.done
        ));
        s
    }
}
