// src/env/base.rs
#![forbid(unsafe_code)]

use crate::env::action::Action;
use crate::env::error::EnvError;
use crate::env::grid::Grid;
use crate::env::gridworld::{GridWorld, StepOutcome};

/// The narrow capability set an episode driver needs. `GridWorld` is the
/// only implementor; adapters (bindings, vectorized wrappers) code against
/// this instead of the concrete type.
pub trait Environment {
    /// Reinitialize and return the starting board.
    fn reset(&mut self) -> Grid;

    /// Advance one step. Rejected before the first reset and after a miss.
    fn step(&mut self, action: Action) -> Result<StepOutcome, EnvError>;

    /// Raw-id variant of `step`; validates the id first.
    fn step_id(&mut self, id: u8) -> Result<StepOutcome, EnvError>;

    /// Reseed the spawn-column RNG for reproducible episodes.
    fn seed(&mut self, seed: u64);

    /// (height, width) of the binary observation grid.
    fn observation_shape(&self) -> (usize, usize);

    /// Number of discrete actions.
    fn action_dim(&self) -> usize;

    /// Text view of the current board; the non-graphical render mode.
    fn render_ascii(&self) -> String;
}

impl Environment for GridWorld {
    fn reset(&mut self) -> Grid {
        GridWorld::reset(self)
    }

    fn step(&mut self, action: Action) -> Result<StepOutcome, EnvError> {
        GridWorld::step(self, action)
    }

    fn step_id(&mut self, id: u8) -> Result<StepOutcome, EnvError> {
        GridWorld::step_id(self, id)
    }

    fn seed(&mut self, seed: u64) {
        GridWorld::seed(self, seed)
    }

    fn observation_shape(&self) -> (usize, usize) {
        GridWorld::observation_shape(self)
    }

    fn action_dim(&self) -> usize {
        GridWorld::action_dim(self)
    }

    fn render_ascii(&self) -> String {
        GridWorld::render_ascii(self)
    }
}
