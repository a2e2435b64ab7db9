//! Ground-truth maze simulator.

use log::warn;

use crate::core::{Cell, Heading, SensorReading};
use crate::io::MazeSpec;
use crate::planning::{Command, MAX_MOVE};
use crate::Result;

/// Simulated robot in a known maze.
///
/// Follows the usual competition rules: sensors report the exact open-run
/// length on the robot's left, front, and right; commands rotate first and
/// then move, with movement truncated to the actuation limit and stopped by
/// walls.
pub struct MazeSim {
    maze: MazeSpec,
    position: Cell,
    heading: Heading,
}

impl MazeSim {
    /// Place the robot at the start corner facing north.
    pub fn new(maze: MazeSpec) -> Self {
        Self {
            maze,
            position: Cell::new(0, 0),
            heading: Heading::North,
        }
    }

    pub fn maze(&self) -> &MazeSpec {
        &self.maze
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// The three directional sensor readings at the current pose.
    pub fn reading(&self) -> SensorReading {
        SensorReading::new(
            self.maze.open_run(self.position, self.heading.left()),
            self.maze.open_run(self.position, self.heading),
            self.maze.open_run(self.position, self.heading.right()),
        )
    }

    /// Execute one command against the ground truth.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Reset => {
                self.position = Cell::new(0, 0);
                self.heading = Heading::North;
            }
            Command::Move { rotation, movement } => {
                let vector = self.heading.vector().rotated_ccw(-rotation.degrees())?;
                self.heading = Heading::from_vector(vector)?;

                let movement = movement.clamp(-MAX_MOVE, MAX_MOVE);
                let direction = if movement >= 0 {
                    self.heading
                } else {
                    self.heading.reverse()
                };
                for _ in 0..movement.abs() {
                    if !self.maze.is_open(self.position, direction) {
                        warn!(
                            "move blocked by wall at {} toward {:?}",
                            self.position, direction
                        );
                        break;
                    }
                    self.position = self.position.offset(direction.vector());
                }
            }
        }
        Ok(())
    }
}
