//! Error types for MargaNav

use crate::core::{Cell, Heading};
use thiserror::Error;

/// MargaNav error type.
///
/// The controller runs against trusted, noiseless sensor input, so most
/// variants signal internal-consistency failures. A fatal variant aborts the
/// step; the caller must stop the episode rather than emit an undefined
/// command.
#[derive(Error, Debug)]
pub enum MargaError {
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error("sensor run of {run} cells from {position} toward {direction:?} leaves the maze")]
    SensorRunOutOfBounds {
        position: Cell,
        direction: Heading,
        run: u32,
    },

    #[error("no route from {from} to any goal cell under the known walls")]
    GoalUnreachable { from: Cell },

    #[error("distance field dead-ends at {at} during route extraction")]
    CorruptDistanceField { at: Cell },

    #[error("episode failed: {0}")]
    Episode(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("maze file error: {0}")]
    MazeFile(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for MargaError {
    fn from(e: toml::de::Error) -> Self {
        MargaError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MargaError>;
