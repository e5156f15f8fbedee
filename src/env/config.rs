// src/env/config.rs
#![forbid(unsafe_code)]

use crate::env::constants::{DEFAULT_HEIGHT, DEFAULT_PAD_WIDTH, DEFAULT_WIDTH};
use crate::env::error::EnvError;

/// Static board dimensions. Pure data; validated once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatchConfig {
    pub height: usize,
    pub width: usize,
    pub pad_width: usize,
}

impl Default for CatchConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            pad_width: DEFAULT_PAD_WIDTH,
        }
    }
}

impl CatchConfig {
    pub fn new(height: usize, width: usize, pad_width: usize) -> Self {
        Self {
            height,
            width,
            pad_width,
        }
    }

    /// height >= 2 guarantees the spawn row and the pad row never overlap,
    /// so place_ball needs no collision check.
    pub fn validate(&self) -> Result<(), EnvError> {
        if self.height < 2 {
            return Err(EnvError::InvalidConfig(format!(
                "height must be >= 2, got {}",
                self.height
            )));
        }
        if self.width == 0 {
            return Err(EnvError::InvalidConfig("width must be >= 1".to_string()));
        }
        if self.pad_width < 1 || self.pad_width > self.width {
            return Err(EnvError::InvalidConfig(format!(
                "pad_width must be in [1, width={}], got {}",
                self.width, self.pad_width
            )));
        }
        Ok(())
    }

    /// Rightmost legal left-edge position for the pad.
    #[inline]
    pub fn pad_loc_max(&self) -> usize {
        self.width - self.pad_width
    }
}
