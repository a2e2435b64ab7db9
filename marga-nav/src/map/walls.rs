//! Wall map: per-cell 4-bit openness bitmask built from sensor evidence.

use log::trace;

use crate::core::{Cell, Heading, SensorReading};
use crate::map::EdgeGrid;
use crate::{MargaError, Result};

/// The robot's current belief about the maze walls.
///
/// Each cell holds a 4-bit mask (north=1, east=2, south=4, west=8) where a
/// set bit means the shared edge with that neighbor is open. The map starts
/// optimistic: interior edges are assumed open until a sensor run proves a
/// wall. Openness between adjacent cells is kept mutually consistent by the
/// update routine: both sides of an edge change in the same call.
#[derive(Clone, Debug)]
pub struct WallMap {
    grid: EdgeGrid,
}

impl WallMap {
    /// Create an optimistic map with only the perimeter walls known
    pub fn new(dim: usize) -> Self {
        Self {
            grid: EdgeGrid::with_perimeter(dim),
        }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.grid.dim()
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.grid.contains(cell)
    }

    /// Raw 4-bit mask of a cell (diagnostic / renderer access)
    #[inline]
    pub fn mask(&self, cell: Cell) -> u8 {
        self.grid.mask(cell)
    }

    /// Is the edge from `cell` toward `heading` open?
    #[inline]
    pub fn is_open(&self, cell: Cell, heading: Heading) -> bool {
        self.grid.mask(cell) & heading.bit() != 0
    }

    /// Open neighbors of a cell, in fixed bitmask order (north, east,
    /// south, west). Directions with a wall yield `None`.
    ///
    /// The ordering is load-bearing: route extraction and the flood engine
    /// index this array by direction.
    pub fn neighbors(&self, cell: Cell) -> [Option<Cell>; 4] {
        let mut out = [None; 4];
        for heading in Heading::ALL {
            if self.is_open(cell, heading) {
                let neighbor = cell.offset(heading.vector());
                if self.contains(neighbor) {
                    out[heading.index()] = Some(neighbor);
                }
            }
        }
        out
    }

    /// Merge one sensor reading taken at `position` facing `heading`.
    ///
    /// Each of the three sensed directions reports an open-run length L:
    /// every shared edge along the run is opened (both sides), and the edge
    /// one past the end of the run is closed, recording the wall that
    /// terminates the corridor. The direction behind the robot carries no
    /// sensor and is left untouched.
    pub fn merge_sensor_reading(
        &mut self,
        position: Cell,
        heading: Heading,
        reading: SensorReading,
    ) -> Result<()> {
        for (direction, run) in reading.runs(heading) {
            self.merge_run(position, direction, run)?;
        }
        Ok(())
    }

    fn merge_run(&mut self, from: Cell, direction: Heading, run: u32) -> Result<()> {
        if !self.contains(from) {
            return Err(MargaError::InvariantViolation(format!(
                "sensor reading taken outside the maze at {from}"
            )));
        }
        let step = direction.vector();
        let end = from.offset(step * run as i32);
        if !self.contains(end) {
            return Err(MargaError::SensorRunOutOfBounds {
                position: from,
                direction,
                run,
            });
        }

        let mut cell = from;
        for _ in 0..run {
            let next = cell.offset(step);
            self.grid.set_bits(cell, direction.bit());
            self.grid.set_bits(next, direction.reverse().bit());
            cell = next;
        }

        // Terminating wall. The near-side bit is always recorded; the
        // far-side reciprocal bit only when the cell one past the run end is
        // still inside the maze (perimeter runs have no far cell).
        self.grid.clear_bits(cell, direction.bit());
        let beyond = cell.offset(step);
        if self.contains(beyond) {
            self.grid.clear_bits(beyond, direction.reverse().bit());
        }
        trace!("wall recorded at {cell} toward {direction:?} (run {run} from {from})");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_seed_matches_format() {
        let map = WallMap::new(12);
        assert_eq!(map.mask(Cell::new(0, 0)), 3);
        assert_eq!(map.mask(Cell::new(11, 11)), 12);
        assert_eq!(map.mask(Cell::new(6, 6)), 15);
    }

    #[test]
    fn test_merge_opens_and_closes_run() {
        let mut map = WallMap::new(6);
        // Facing north at the start corner: left is the west perimeter,
        // front runs 2 cells, right runs 1 cell.
        map.merge_sensor_reading(Cell::new(0, 0), Heading::North, SensorReading::new(0, 2, 1))
            .unwrap();

        // Front run: edges (0,0)-(0,1) and (0,1)-(0,2) open, wall above (0,2).
        assert!(map.is_open(Cell::new(0, 0), Heading::North));
        assert!(map.is_open(Cell::new(0, 1), Heading::North));
        assert!(map.is_open(Cell::new(0, 1), Heading::South));
        assert!(!map.is_open(Cell::new(0, 2), Heading::North));
        assert!(!map.is_open(Cell::new(0, 3), Heading::South));

        // Right run: edge (0,0)-(1,0) open, wall east of (1,0).
        assert!(map.is_open(Cell::new(0, 0), Heading::East));
        assert!(!map.is_open(Cell::new(1, 0), Heading::East));
        assert!(!map.is_open(Cell::new(2, 0), Heading::West));
    }

    #[test]
    fn test_merge_is_mutually_consistent() {
        let mut map = WallMap::new(8);
        map.merge_sensor_reading(Cell::new(3, 3), Heading::East, SensorReading::new(2, 3, 1))
            .unwrap();
        for x in 0..8 {
            for y in 0..8 {
                let cell = Cell::new(x, y);
                for heading in Heading::ALL {
                    let neighbor = cell.offset(heading.vector());
                    if map.contains(neighbor) {
                        assert_eq!(
                            map.is_open(cell, heading),
                            map.is_open(neighbor, heading.reverse()),
                            "asymmetric edge between {cell} and {neighbor}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_run_closes_adjacent_edge() {
        let mut map = WallMap::new(6);
        map.merge_sensor_reading(Cell::new(2, 2), Heading::North, SensorReading::new(0, 0, 0))
            .unwrap();
        assert!(!map.is_open(Cell::new(2, 2), Heading::West));
        assert!(!map.is_open(Cell::new(2, 2), Heading::North));
        assert!(!map.is_open(Cell::new(2, 2), Heading::East));
        // Behind the robot stays optimistic.
        assert!(map.is_open(Cell::new(2, 2), Heading::South));
    }

    #[test]
    fn test_run_to_perimeter_skips_far_wall_bit() {
        let mut map = WallMap::new(4);
        // Front run of 3 from (0,0) ends at the north perimeter; there is no
        // cell beyond (0,3) to carry the reciprocal wall bit.
        map.merge_sensor_reading(Cell::new(0, 0), Heading::North, SensorReading::new(0, 3, 0))
            .unwrap();
        assert!(map.is_open(Cell::new(0, 2), Heading::North));
        assert!(!map.is_open(Cell::new(0, 3), Heading::North));
    }

    #[test]
    fn test_run_past_perimeter_is_rejected() {
        let mut map = WallMap::new(4);
        let err = map
            .merge_sensor_reading(Cell::new(0, 0), Heading::North, SensorReading::new(0, 4, 0))
            .unwrap_err();
        assert!(matches!(err, MargaError::SensorRunOutOfBounds { .. }));
    }

    #[test]
    fn test_neighbors_order_matches_bitmask() {
        let map = WallMap::new(4);
        let n = map.neighbors(Cell::new(1, 1));
        assert_eq!(n[0], Some(Cell::new(1, 2)));
        assert_eq!(n[1], Some(Cell::new(2, 1)));
        assert_eq!(n[2], Some(Cell::new(1, 0)));
        assert_eq!(n[3], Some(Cell::new(0, 1)));

        let corner = map.neighbors(Cell::new(0, 0));
        assert_eq!(corner[0], Some(Cell::new(0, 1)));
        assert_eq!(corner[1], Some(Cell::new(1, 0)));
        assert_eq!(corner[2], None);
        assert_eq!(corner[3], None);
    }
}
