//! Per-turn planning: flood-fill distances, shortest routes, move commands.
//!
//! Everything here is recomputed from scratch each planning step: the wall
//! map may have changed since the last turn, so no distance or route data is
//! reused across steps.

mod flood;
mod moves;
mod route;

pub use flood::{center_cells, flood, Flood, FloodField};
pub use moves::{
    consolidate, plan_moves, shortest_only, Command, MovePlanner, PlanOptions, Rotation, MAX_MOVE,
};
pub use route::{extract_routes, Route};
