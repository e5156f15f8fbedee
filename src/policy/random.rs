// src/policy/random.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use crate::env::{Action, GridWorld};

use super::base::Policy;

pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose_action(&mut self, _env: &GridWorld) -> Action {
        match self.rng.gen_range(0..3u8) {
            0 => Action::Still,
            1 => Action::Left,
            _ => Action::Right,
        }
    }
}
