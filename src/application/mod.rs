//! Application layer: Use cases orchestrating domain types and ports.

mod exploration;
mod inference;

pub use exploration::{explore, ExplorationStats};
pub use inference::{predict, InferenceError};
