// src/lib.rs
#![forbid(unsafe_code)]

pub mod env;
pub mod policy;
pub mod rollout;

// Re-export the bits the CLI and downstream callers need:
pub use env::{
    Action, Ball, CatchConfig, EnvError, Environment, Grid, GridWorld, Info, StepOutcome,
    ACTION_DIM,
};
pub use policy::{Policy, RandomPolicy, TrackerPolicy};
