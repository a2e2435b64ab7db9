//! Ground-truth maze specifications and their text-file format.
//!
//! The format matches the classic micromouse test-maze files: the first line
//! is the maze dimension, followed by one comma-separated line per column x
//! giving the 4-bit openness mask of each cell for y = 0..dim (bits
//! north/east/south/west = 1/2/4/8, 1 = open).

use std::fmt::Write as _;
use std::path::Path;

use crate::core::{Cell, Heading};
use crate::map::EdgeGrid;
use crate::{MargaError, Result};

/// A complete, validated maze: the simulator's ground truth.
#[derive(Clone, Debug)]
pub struct MazeSpec {
    grid: EdgeGrid,
}

impl MazeSpec {
    /// A maze with no interior walls (perimeter only). Useful as a test
    /// fixture and as the base for programmatic maze construction.
    pub fn open_grid(dim: usize) -> Self {
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

    #[inline]
    pub fn mask(&self, cell: Cell) -> u8 {
        self.grid.mask(cell)
    }

    #[inline]
    pub fn is_open(&self, cell: Cell, heading: Heading) -> bool {
        self.grid.mask(cell) & heading.bit() != 0
    }

    /// Number of open cells from `from` toward `heading` before a wall:
    /// exactly what a range sensor pointed that way reports.
    pub fn open_run(&self, from: Cell, heading: Heading) -> u32 {
        let mut run = 0;
        let mut cell = from;
        while self.is_open(cell, heading) {
            cell = cell.offset(heading.vector());
            run += 1;
        }
        run
    }

    /// Close the edge between a cell and its neighbor (both sides).
    pub fn close_edge(&mut self, cell: Cell, heading: Heading) {
        if !self.grid.contains(cell) {
            return;
        }
        self.grid.clear_bits(cell, heading.bit());
        let neighbor = cell.offset(heading.vector());
        if self.grid.contains(neighbor) {
            self.grid.clear_bits(neighbor, heading.reverse().bit());
        }
    }

    /// Structural validation: closed perimeter and mutually consistent
    /// interior edges.
    pub fn validate(&self) -> Result<()> {
        let dim = self.dim() as i32;
        for x in 0..dim {
            for y in 0..dim {
                let cell = Cell::new(x, y);
                for heading in Heading::ALL {
                    let neighbor = cell.offset(heading.vector());
                    if !self.contains(neighbor) {
                        if self.is_open(cell, heading) {
                            return Err(MargaError::MazeFile(format!(
                                "perimeter breach at {cell} toward {heading:?}"
                            )));
                        }
                    } else if self.is_open(cell, heading)
                        != self.is_open(neighbor, heading.reverse())
                    {
                        return Err(MargaError::MazeFile(format!(
                            "inconsistent edge between {cell} and {neighbor}"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Load a maze from a text file and validate its structure.
pub fn load_maze<P: AsRef<Path>>(path: P) -> Result<MazeSpec> {
    let text = std::fs::read_to_string(&path)?;
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let dim: usize = lines
        .next()
        .ok_or_else(|| MargaError::MazeFile("empty maze file".into()))?
        .trim()
        .parse()
        .map_err(|e| MargaError::MazeFile(format!("bad dimension line: {e}")))?;
    if dim < 4 || dim % 2 != 0 {
        return Err(MargaError::MazeFile(format!(
            "unsupported maze dimension {dim}"
        )));
    }

    let mut grid = EdgeGrid::new(dim, 0);
    for x in 0..dim {
        let line = lines
            .next()
            .ok_or_else(|| MargaError::MazeFile(format!("missing column {x}")))?;
        let values: Vec<&str> = line.split(',').map(str::trim).collect();
        if values.len() != dim {
            return Err(MargaError::MazeFile(format!(
                "column {x} has {} cells, expected {dim}",
                values.len()
            )));
        }
        for (y, value) in values.iter().enumerate() {
            let mask: u8 = value
                .parse()
                .map_err(|e| MargaError::MazeFile(format!("bad cell value at ({x}, {y}): {e}")))?;
            if mask > 15 {
                return Err(MargaError::MazeFile(format!(
                    "cell value {mask} at ({x}, {y}) exceeds 4 bits"
                )));
            }
            grid.set_mask(Cell::new(x as i32, y as i32), mask);
        }
    }

    let maze = MazeSpec { grid };
    maze.validate()?;
    Ok(maze)
}

/// Write a maze in the same text format.
pub fn save_maze<P: AsRef<Path>>(path: P, maze: &MazeSpec) -> Result<()> {
    let dim = maze.dim();
    let mut out = String::new();
    let _ = writeln!(out, "{dim}");
    for x in 0..dim {
        let column: Vec<String> = (0..dim)
            .map(|y| maze.mask(Cell::new(x as i32, y as i32)).to_string())
            .collect();
        let _ = writeln!(out, "{}", column.join(","));
    }
    std::fs::write(path, out)?;
    Ok(())
}
