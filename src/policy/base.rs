// src/policy/base.rs
#![forbid(unsafe_code)]

use crate::env::{Action, GridWorld};

/// Policy chooses the pad move for the current state.
/// All three actions are always legal, so the choice is total.
pub trait Policy {
    fn choose_action(&mut self, env: &GridWorld) -> Action;
}
