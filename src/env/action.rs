// src/env/action.rs
#![forbid(unsafe_code)]

use crate::env::error::EnvError;

/// Paddle move for one step. Raw ids follow the original task layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Still = 0,
    Left = 1,
    Right = 2,
}

impl Action {
    pub fn all() -> [Action; 3] {
        [Action::Still, Action::Left, Action::Right]
    }

    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Decode a raw action id. Anything outside {0,1,2} is a contract
    /// violation and must be rejected before any state is touched.
    pub fn from_id(id: u8) -> Result<Action, EnvError> {
        match id {
            0 => Ok(Action::Still),
            1 => Ok(Action::Left),
            2 => Ok(Action::Right),
            other => Err(EnvError::InvalidAction(other)),
        }
    }
}
