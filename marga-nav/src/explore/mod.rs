//! Multi-phase exploration: bootstrap wall-follow, flood-guided search,
//! full-coverage sweep, reset, and the optimized replay run.

mod controller;
mod phase;

pub use controller::ExplorationController;
pub use phase::Phase;
