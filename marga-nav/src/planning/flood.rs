//! Flood-fill distance engine.
//!
//! Computes, from a source cell, the minimum number of open-edge hops to
//! every cell discovered before the first goal cell is reached. The wave
//! stops the moment any goal is assigned, so the field outside the explored
//! region stays unknown; that partial result is intentional, not an error.

use std::collections::VecDeque;

use crate::core::Cell;
use crate::map::WallMap;
use crate::{MargaError, Result};

/// Per-cell hop distances from a flood source. `None` means the wave never
/// reached the cell before terminating.
#[derive(Clone, Debug)]
pub struct FloodField {
    dim: usize,
    cells: Vec<Option<u16>>,
}

impl FloodField {
    fn new(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![None; dim * dim],
        }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn distance(&self, cell: Cell) -> Option<u16> {
        if cell.x < 0 || cell.y < 0 || cell.x as usize >= self.dim || cell.y as usize >= self.dim {
            return None;
        }
        self.cells[cell.y as usize * self.dim + cell.x as usize]
    }

    #[inline]
    fn set(&mut self, cell: Cell, distance: u16) {
        self.cells[cell.y as usize * self.dim + cell.x as usize] = Some(distance);
    }
}

/// A completed flood: the partial distance field plus the goal cell the
/// wave reached first.
#[derive(Clone, Debug)]
pub struct Flood {
    pub field: FloodField,
    pub goal: Cell,
    pub distance: u16,
}

/// The four cells of the center goal room for a maze of dimension `dim`.
pub fn center_cells(dim: usize) -> [Cell; 4] {
    let cc = (dim / 2) as i32;
    [
        Cell::new(cc - 1, cc - 1),
        Cell::new(cc - 1, cc),
        Cell::new(cc, cc - 1),
        Cell::new(cc, cc),
    ]
}

/// Breadth-first flood over open edges from `source`, terminating as soon as
/// any cell in `goals` is assigned a distance.
///
/// Exhausting the maze without reaching a goal means the goal set is
/// unreachable under the currently known walls, an internal-consistency
/// failure, since a physically valid maze guarantees connectivity and the
/// map is optimistic about unknown edges.
pub fn flood(walls: &WallMap, source: Cell, goals: &[Cell]) -> Result<Flood> {
    if !walls.contains(source) {
        return Err(MargaError::InvariantViolation(format!(
            "flood source {source} outside the maze"
        )));
    }

    let mut field = FloodField::new(walls.dim());
    field.set(source, 0);
    if goals.contains(&source) {
        return Ok(Flood {
            field,
            goal: source,
            distance: 0,
        });
    }

    let mut queue = VecDeque::new();
    queue.push_back((source, 0u16));
    while let Some((cell, distance)) = queue.pop_front() {
        for neighbor in walls.neighbors(cell).into_iter().flatten() {
            if field.distance(neighbor).is_some() {
                continue;
            }
            field.set(neighbor, distance + 1);
            if goals.contains(&neighbor) {
                return Ok(Flood {
                    field,
                    goal: neighbor,
                    distance: distance + 1,
                });
            }
            queue.push_back((neighbor, distance + 1));
        }
    }

    Err(MargaError::GoalUnreachable { from: source })
}
