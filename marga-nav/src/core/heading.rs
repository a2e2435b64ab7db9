//! Compass headings and their unit-vector duals.
//!
//! A heading doubles as a compass direction indexing the per-cell wall
//! bitmask: north/east/south/west occupy bits 0..4 in that fixed order.
//! Downstream code (neighbor queries, route extraction) relies on this
//! ordering matching the bitmask layout.

use serde::{Deserialize, Serialize};

use crate::core::Vector;
use crate::{MargaError, Result};

/// One of the four compass headings.
///
/// North is the positive-y direction ("up" from the start corner at the
/// south-west of the maze); the robot starts facing north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Heading {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Heading {
    /// All headings in bitmask order (north, east, south, west)
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Index into the wall bitmask (0..4)
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Bitmask bit for this direction (north=1, east=2, south=4, west=8)
    #[inline]
    pub fn bit(self) -> u8 {
        1 << self as u8
    }

    /// The canonical unit vector for this heading
    #[inline]
    pub fn vector(self) -> Vector {
        match self {
            Heading::North => Vector::new(0, 1),
            Heading::East => Vector::new(1, 0),
            Heading::South => Vector::new(0, -1),
            Heading::West => Vector::new(-1, 0),
        }
    }

    /// Recover a heading from its unit vector.
    ///
    /// The heading/vector mapping is an exact bijection; any other vector is
    /// an internal error, never a value to round.
    pub fn from_vector(v: Vector) -> Result<Heading> {
        match (v.x, v.y) {
            (0, 1) => Ok(Heading::North),
            (1, 0) => Ok(Heading::East),
            (0, -1) => Ok(Heading::South),
            (-1, 0) => Ok(Heading::West),
            _ => Err(MargaError::InvariantViolation(format!(
                "({}, {}) is not a canonical heading vector",
                v.x, v.y
            ))),
        }
    }

    /// Quarter turn counter-clockwise
    #[inline]
    pub fn left(self) -> Heading {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Quarter turn clockwise
    #[inline]
    pub fn right(self) -> Heading {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Opposite heading
    #[inline]
    pub fn reverse(self) -> Heading {
        match self {
            Heading::North => Heading::South,
            Heading::South => Heading::North,
            Heading::East => Heading::West,
            Heading::West => Heading::East,
        }
    }
}
