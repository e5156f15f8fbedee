// src/env/error.rs
#![forbid(unsafe_code)]

/// Contract violations surfaced to the caller. None of these mutate
/// environment state; the board is exactly what it was before the call.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Raw action id outside {0, 1, 2}.
    #[error("invalid action id {0} (expected 0=still, 1=left, 2=right)")]
    InvalidAction(u8),

    /// step() before the first reset(); dimensions are set but nothing is placed.
    #[error("environment not reset; call reset() before step()")]
    NotReset,

    /// step() after a miss ended the episode; reset() is required first.
    #[error("episode is over; call reset() before step()")]
    EpisodeOver,
}
