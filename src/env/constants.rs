// src/env/constants.rs
#![forbid(unsafe_code)]

pub const DEFAULT_HEIGHT: usize = 5;
pub const DEFAULT_WIDTH: usize = 5;
pub const DEFAULT_PAD_WIDTH: usize = 1;

/// Discrete action count: still / left / right.
pub const ACTION_DIM: usize = 3;
