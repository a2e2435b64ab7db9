//! # MargaNav: Flood-Fill Maze Navigation Controller
//!
//! A maze-mapping and pathfinding engine for a micromouse-style robot that
//! discovers an unknown maze with three directional wall sensors, builds an
//! internal map, and reaches the center goal room, then repeats the
//! traversal more efficiently on a second run.
//!
//! ## Architecture
//!
//! The crate is organized into dependency-ordered layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                   harness/                          │  ← Simulation & episodes
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                   explore/                          │  ← Phase state machine
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                  planning/                          │  ← Flood fill, routes, moves
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     map/                            │  ← Wall & coverage bitmasks
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Cells, headings, sensors
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## Turn loop
//!
//! The controller is fully synchronous: one sensor reading in, one command
//! out, no state shared outside the controller instance.
//!
//! ```text
//! sensor reading -> wall map -> coverage map -> flood fill -> routes
//!                -> move planning -> (rotation, movement) command
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_nav::{ExplorationController, MazeConfig, SensorReading};
//!
//! let config = MazeConfig { dim: 12, seed: Some(1) };
//! let mut controller = ExplorationController::new(&config).unwrap();
//!
//! // Feed readings from the robot (or a simulator) turn by turn.
//! let command = controller.next_move(SensorReading::new(0, 11, 11)).unwrap();
//! println!("{command:?}");
//! ```
//!
//! ## Coordinate conventions
//!
//! Cells are `(x, y)` with the start corner `(0, 0)` at the south-west and
//! north as positive y. Wall masks put north/east/south/west at bits
//! 1/2/4/8 (1 = open). Command rotations are clockwise-positive, the
//! opposite of the planner's internal counter-clockwise convention; the
//! sign flips exactly once, at the command boundary.

// Layer 1: foundation types (no internal deps)
pub mod core;

// Layer 2: maze maps (depends on core)
pub mod map;

// Layer 3: per-turn planning (depends on core, map)
pub mod planning;

// Layer 4: exploration state machine (depends on all lower layers)
pub mod explore;

// Ambient: configuration, errors, maze files
mod config;
mod error;
pub mod io;

// Test & demo support: ground-truth simulation
pub mod harness;

pub use config::MazeConfig;
pub use error::{MargaError, Result};

// Re-export the main types at the crate root
pub use crate::core::{Cell, Heading, SensorReading, Vector};
pub use explore::{ExplorationController, Phase};
pub use map::{CoverageMap, WallMap};
pub use planning::{center_cells, flood, Command, Flood, FloodField, Route, Rotation};
