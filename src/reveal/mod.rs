//! Timed character-by-character reveal of a completed result.
//!
//! Field *k* starts typing `stagger × k` after the trigger and appends one character per
//! `char_interval`. Fields animate concurrently; characters within a field always arrive
//! in source order.

mod animator;
mod state;

pub use animator::{DEFAULT_CHAR_INTERVAL_MS, DEFAULT_STAGGER_MS, RevealAnimator, RevealTiming};
pub use state::{RevealState, RevealUpdate};
