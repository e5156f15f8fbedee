// src/policy/mod.rs
#![forbid(unsafe_code)]

pub mod base;
pub mod random;
pub mod tracker;

// Re-exports (policy public API)
pub use base::Policy;
pub use random::RandomPolicy;
pub use tracker::TrackerPolicy;
