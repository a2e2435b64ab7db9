//! Coverage map: which cell edges have been swept by a sensor run.

use crate::core::{Cell, Heading, SensorReading};
use crate::map::EdgeGrid;
use crate::{MargaError, Result};

/// Tracks which edges the robot's sensors have passed over.
///
/// Same nibble layout as the wall map, but a set bit means "this edge has
/// been sensed", independent of whether it turned out open or walled. Edges
/// against the outer perimeter are trivially known, so they start covered;
/// everything else starts uncovered. Only the full-coverage sweep phase
/// consumes this map.
#[derive(Clone, Debug)]
pub struct CoverageMap {
    grid: EdgeGrid,
}

impl CoverageMap {
    pub fn new(dim: usize) -> Self {
        Self {
            grid: EdgeGrid::with_perimeter(dim).inverted(),
        }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.grid.dim()
    }

    #[inline]
    pub fn mask(&self, cell: Cell) -> u8 {
        self.grid.mask(cell)
    }

    #[inline]
    pub fn is_covered(&self, cell: Cell, heading: Heading) -> bool {
        self.grid.mask(cell) & heading.bit() != 0
    }

    #[inline]
    pub fn is_fully_covered(&self, cell: Cell) -> bool {
        self.grid.mask(cell) == 0xF
    }

    /// Fraction of all edge-bits sensed so far, as a percentage.
    ///
    /// Non-decreasing across updates; reaches exactly 100.0 when the sweep
    /// phase has nothing left to visit.
    pub fn percent(&self) -> f32 {
        let total = (self.dim() * self.dim() * 4) as f32;
        self.grid.count_set_bits() as f32 / total * 100.0
    }

    /// Has every edge in the maze been sensed?
    pub fn complete(&self) -> bool {
        self.grid.count_set_bits() as usize == self.dim() * self.dim() * 4
    }

    /// The closest cell with at least one unsensed edge, by Manhattan
    /// distance from `from`; ties go to the first in scan order.
    pub fn nearest_uncovered(&self, from: Cell) -> Option<Cell> {
        let mut best: Option<(i32, Cell)> = None;
        for cell in self.grid.scan() {
            if self.grid.mask(cell) == 0xF {
                continue;
            }
            let distance = from.manhattan_distance(&cell);
            if best.map_or(true, |(d, _)| distance < d) {
                best = Some((distance, cell));
            }
        }
        best.map(|(_, cell)| cell)
    }

    /// Union one sensor reading into the map.
    ///
    /// Unlike the wall map this covers every edge the sweep crossed,
    /// including the terminating wall edge at the end of each run.
    pub fn merge_sensor_reading(
        &mut self,
        position: Cell,
        heading: Heading,
        reading: SensorReading,
    ) -> Result<()> {
        for (direction, run) in reading.runs(heading) {
            self.cover_run(position, direction, run)?;
        }
        Ok(())
    }

    fn cover_run(&mut self, from: Cell, direction: Heading, run: u32) -> Result<()> {
        if !self.grid.contains(from) {
            return Err(MargaError::InvariantViolation(format!(
                "sensor reading taken outside the maze at {from}"
            )));
        }
        let step = direction.vector();
        let end = from.offset(step * run as i32);
        if !self.grid.contains(end) {
            return Err(MargaError::SensorRunOutOfBounds {
                position: from,
                direction,
                run,
            });
        }

        let mut cell = from;
        for _ in 0..=run {
            self.grid.set_bits(cell, direction.bit());
            let next = cell.offset(step);
            if self.grid.contains(next) {
                self.grid.set_bits(next, direction.reverse().bit());
            }
            cell = next;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_perimeter_complement() {
        let map = CoverageMap::new(4);
        // Corner (0,0): south and west edges border the perimeter.
        assert_eq!(map.mask(Cell::new(0, 0)), 12);
        assert_eq!(map.mask(Cell::new(1, 1)), 0);
        assert_eq!(map.mask(Cell::new(1, 0)), Heading::South.bit());
    }

    #[test]
    fn test_cover_includes_terminating_edge() {
        let mut map = CoverageMap::new(6);
        map.merge_sensor_reading(Cell::new(0, 0), Heading::North, SensorReading::new(0, 2, 1))
            .unwrap();
        // Front run of 2 covers three edges: two open ones plus the wall
        // above (0,2).
        assert!(map.is_covered(Cell::new(0, 0), Heading::North));
        assert!(map.is_covered(Cell::new(0, 1), Heading::North));
        assert!(map.is_covered(Cell::new(0, 2), Heading::North));
        assert!(map.is_covered(Cell::new(0, 3), Heading::South));
        assert!(!map.is_covered(Cell::new(0, 3), Heading::North));
    }

    #[test]
    fn test_percent_monotonic() {
        let mut map = CoverageMap::new(6);
        let before = map.percent();
        map.merge_sensor_reading(Cell::new(2, 2), Heading::East, SensorReading::new(1, 1, 1))
            .unwrap();
        let after = map.percent();
        assert!(after > before);
        map.merge_sensor_reading(Cell::new(2, 2), Heading::East, SensorReading::new(1, 1, 1))
            .unwrap();
        assert_eq!(map.percent(), after);
    }

    #[test]
    fn test_nearest_uncovered_prefers_distance_then_scan_order() {
        let mut map = CoverageMap::new(4);
        // The start cell itself has unsensed edges at first.
        assert_eq!(map.nearest_uncovered(Cell::new(0, 0)), Some(Cell::new(0, 0)));

        // One reading saturates (0,0); the distance-1 candidates (0,1) and
        // (1,0) tie, and scan order (x outer, y inner) puts (0,1) first.
        map.merge_sensor_reading(Cell::new(0, 0), Heading::North, SensorReading::new(0, 1, 1))
            .unwrap();
        assert!(map.is_fully_covered(Cell::new(0, 0)));
        assert_eq!(map.nearest_uncovered(Cell::new(0, 0)), Some(Cell::new(0, 1)));
    }

    #[test]
    fn test_complete_on_tiny_saturated_map() {
        let mut map = CoverageMap::new(4);
        for x in 0..4 {
            for y in 0..4 {
                for heading in Heading::ALL {
                    map.grid.set_bits(Cell::new(x, y), heading.bit());
                }
            }
        }
        assert!(map.complete());
        assert_eq!(map.percent(), 100.0);
        assert_eq!(map.nearest_uncovered(Cell::new(0, 0)), None);
    }
}
