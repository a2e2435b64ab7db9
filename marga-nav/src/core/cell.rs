//! Cell coordinates and integer displacement vectors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Mul, Neg, Sub};

/// Maze cell coordinate (x = column, y = row), origin at the south-west
/// corner of the maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Create a new cell coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another cell
    #[inline]
    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// The cell reached by applying a displacement
    #[inline]
    pub fn offset(&self, v: Vector) -> Cell {
        Cell::new(self.x + v.x, self.y + v.y)
    }
}

impl Sub for Cell {
    type Output = Vector;

    /// Displacement from `other` to `self`
    #[inline]
    fn sub(self, other: Self) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Integer displacement vector between cells.
///
/// Headings map to the four canonical unit vectors; rotation is exact
/// (quarter turns only), so vectors never need floating-point comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Is this one of the four canonical unit vectors?
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.x.abs() + self.y.abs() == 1
    }

    /// Rotate counter-clockwise by an exact multiple of 90 degrees.
    ///
    /// The maze geometry is axis-aligned, so any other angle is an internal
    /// error. Robot commands use the opposite (clockwise-positive) sign
    /// convention; callers translating a command negate the angle at this
    /// boundary.
    pub fn rotated_ccw(self, degrees: i32) -> crate::Result<Vector> {
        if degrees % 90 != 0 {
            return Err(crate::MargaError::InvariantViolation(format!(
                "rotation of {degrees} degrees is not a quarter-turn multiple"
            )));
        }
        let rotated = match degrees.div_euclid(90).rem_euclid(4) {
            0 => self,
            1 => Vector::new(-self.y, self.x),
            2 => Vector::new(-self.x, -self.y),
            _ => Vector::new(self.y, -self.x),
        };
        Ok(rotated)
    }
}

impl Neg for Vector {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Vector::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Vector {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: i32) -> Self {
        Vector::new(self.x * scalar, self.y * scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let a = Cell::new(1, 2);
        let b = Cell::new(4, 0);
        assert_eq!(a.manhattan_distance(&b), 5);
        assert_eq!(b.manhattan_distance(&a), 5);
    }

    #[test]
    fn test_offset_and_sub_are_inverse() {
        let a = Cell::new(3, 7);
        let v = Vector::new(-2, 1);
        assert_eq!(a.offset(v) - a, v);
    }

    #[test]
    fn test_rotated_ccw_quarter_turns() {
        let east = Vector::new(1, 0);
        assert_eq!(east.rotated_ccw(90).unwrap(), Vector::new(0, 1));
        assert_eq!(east.rotated_ccw(180).unwrap(), Vector::new(-1, 0));
        assert_eq!(east.rotated_ccw(270).unwrap(), Vector::new(0, -1));
        assert_eq!(east.rotated_ccw(360).unwrap(), east);
        assert_eq!(east.rotated_ccw(-90).unwrap(), Vector::new(0, -1));
    }

    #[test]
    fn test_rotated_rejects_non_quarter_turns() {
        assert!(Vector::new(1, 0).rotated_ccw(45).is_err());
        assert!(Vector::new(1, 0).rotated_ccw(91).is_err());
    }
}
