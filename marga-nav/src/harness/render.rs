//! ASCII rendering of a wall map for console diagnostics.

use crate::core::{Cell, Heading};
use crate::map::WallMap;

/// Render the known maze as ASCII art, optionally marking the robot.
///
/// North is up; the start corner (0,0) is bottom-left. Walls draw from the
/// map's own bitmasks, so unexplored (optimistically open) edges show as
/// gaps.
pub fn ascii_map(walls: &WallMap, robot: Option<(Cell, Heading)>) -> String {
    let dim = walls.dim() as i32;
    let marker = |cell: Cell| -> char {
        match robot {
            Some((position, heading)) if position == cell => match heading {
                Heading::North => '^',
                Heading::East => '>',
                Heading::South => 'v',
                Heading::West => '<',
            },
            _ => ' ',
        }
    };

    let mut out = String::new();
    for y in (0..dim).rev() {
        // Northern wall line of this row.
        for x in 0..dim {
            out.push('+');
            out.push_str(if walls.is_open(Cell::new(x, y), Heading::North) {
                "  "
            } else {
                "--"
            });
        }
        out.push_str("+\n");

        // Cell line with western walls.
        for x in 0..dim {
            let cell = Cell::new(x, y);
            out.push(if walls.is_open(cell, Heading::West) {
                ' '
            } else {
                '|'
            });
            out.push(marker(cell));
            out.push(' ');
        }
        out.push_str("|\n");
    }

    // Southern perimeter.
    for _ in 0..dim {
        out.push_str("+--");
    }
    out.push_str("+\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dimensions() {
        let walls = WallMap::new(4);
        let art = ascii_map(&walls, Some((Cell::new(0, 0), Heading::North)));
        let lines: Vec<&str> = art.lines().collect();
        // Two lines per row plus the closing perimeter line.
        assert_eq!(lines.len(), 9);
        // Every line spans the full maze width.
        for line in &lines {
            assert_eq!(line.len(), 4 * 3 + 1);
        }
        assert!(art.contains('^'));
    }

    #[test]
    fn test_render_marks_perimeter() {
        let walls = WallMap::new(4);
        let art = ascii_map(&walls, None);
        let lines: Vec<&str> = art.lines().collect();
        // Top and bottom lines are solid walls.
        assert_eq!(lines[0], "+--+--+--+--+");
        assert_eq!(lines[8], "+--+--+--+--+");
        // Side walls present on every cell line.
        for line in lines.iter().skip(1).step_by(2) {
            assert!(line.starts_with('|'));
            assert!(line.ends_with('|'));
        }
    }
}
