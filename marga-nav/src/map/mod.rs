//! Incrementally-built maze maps: wall openness and edge coverage.

mod coverage;
mod grid;
mod walls;

pub use coverage::CoverageMap;
pub use walls::WallMap;

pub(crate) use grid::EdgeGrid;
