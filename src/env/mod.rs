// src/env/mod.rs
#![forbid(unsafe_code)]

mod action;
mod base;
mod config;
mod constants;
mod error;
mod grid;
mod gridworld;
mod info;

/**
 * Curated environment public API.
 *
 * Internal implementation modules remain private; only stable items are re-exported here.
 */
pub use action::Action;
pub use base::Environment;
pub use config::CatchConfig;
pub use constants::{ACTION_DIM, DEFAULT_HEIGHT, DEFAULT_PAD_WIDTH, DEFAULT_WIDTH};
pub use error::EnvError;
pub use grid::{Ball, Grid};
pub use gridworld::{GridWorld, StepOutcome};
pub use info::{Info, InfoValue};
