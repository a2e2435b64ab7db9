//! Exploration controller: one `(sensor reading) -> (command)` step per turn.

use log::{debug, info};

use crate::config::MazeConfig;
use crate::core::{Cell, Heading, SensorReading};
use crate::explore::Phase;
use crate::map::{CoverageMap, WallMap};
use crate::planning::{
    center_cells, extract_routes, flood, Command, MovePlanner, PlanOptions, Rotation,
};
use crate::{MargaError, Result};

/// Turn-by-turn maze exploration controller.
///
/// Owns the wall and coverage maps, the robot's believed pose, and the phase
/// state machine. Fully synchronous: each call to [`next_move`] resolves one
/// simulation step, and the maps persist across the mid-episode reset.
///
/// The controller assumes every emitted move succeeds exactly as commanded;
/// there is no collision feedback. Position and heading are dead-reckoned by
/// applying the previous turn's command at the start of the next turn.
///
/// [`next_move`]: ExplorationController::next_move
pub struct ExplorationController {
    dim: usize,
    start: Cell,
    initial_heading: Heading,
    walls: WallMap,
    coverage: CoverageMap,
    planner: MovePlanner,
    phase: Phase,
    position: Cell,
    heading: Heading,
    turn: u32,
    pending: Option<Command>,
}

impl ExplorationController {
    /// Create a controller for a maze of the configured dimension, starting
    /// at the south-west corner facing north.
    pub fn new(config: &MazeConfig) -> Result<Self> {
        config.validate()?;
        let planner = match config.seed {
            Some(seed) => MovePlanner::seeded(seed),
            None => MovePlanner::new(),
        };
        Ok(Self {
            dim: config.dim,
            start: Cell::new(0, 0),
            initial_heading: Heading::North,
            walls: WallMap::new(config.dim),
            coverage: CoverageMap::new(config.dim),
            planner,
            phase: Phase::Bootstrap,
            position: Cell::new(0, 0),
            heading: Heading::North,
            turn: 0,
            pending: None,
        })
    }

    /// Decide the next command from one sensor reading.
    ///
    /// Sequence per turn: apply the previous command to the believed pose,
    /// merge the reading into both maps, evaluate phase transitions, then
    /// dispatch the current phase.
    pub fn next_move(&mut self, reading: SensorReading) -> Result<Command> {
        self.apply_pending()?;
        self.walls
            .merge_sensor_reading(self.position, self.heading, reading)?;
        self.coverage
            .merge_sensor_reading(self.position, self.heading, reading)?;
        self.advance_phase();

        let command = match self.phase {
            Phase::Bootstrap => self.bootstrap_step(reading),
            Phase::Search => self.guided_step(PlanOptions::search())?,
            Phase::Sweep { destination } => self.sweep_step(destination)?,
            Phase::Reset => self.reset_step(),
            Phase::Replay => self.replay_step()?,
        };

        debug!(
            "turn {} [{}] at {} facing {:?} -> {:?}",
            self.turn,
            self.phase.name(),
            self.position,
            self.heading,
            command
        );
        self.turn += 1;
        self.pending = Some(command);
        Ok(command)
    }

    // Diagnostic access for external renderers.

    pub fn walls(&self) -> &WallMap {
        &self.walls
    }

    pub fn coverage(&self) -> &CoverageMap {
        &self.coverage
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Dead-reckon the previous turn's command into the believed pose.
    fn apply_pending(&mut self) -> Result<()> {
        let Some(Command::Move { rotation, movement }) = self.pending.take() else {
            return Ok(());
        };
        // Command rotations are clockwise-positive; vector rotation is
        // counter-clockwise-positive. Negate at the boundary.
        let vector = self.heading.vector().rotated_ccw(-rotation.degrees())?;
        self.heading = Heading::from_vector(vector)?;
        self.position = self
            .position
            .offset(self.heading.vector() * movement as i32);
        if !self.walls.contains(self.position) {
            return Err(MargaError::InvariantViolation(format!(
                "believed position {} left the maze",
                self.position
            )));
        }
        Ok(())
    }

    fn at_center(&self) -> bool {
        center_cells(self.dim).contains(&self.position)
    }

    fn advance_phase(&mut self) {
        match self.phase {
            Phase::Bootstrap => {
                // Reaching the goal room outranks the loop-closure check.
                if self.at_center() {
                    info!(
                        "goal room reached during bootstrap at turn {}, sweeping for coverage",
                        self.turn
                    );
                    self.phase = Phase::Sweep { destination: None };
                } else if self.position == self.start && self.turn > 2 {
                    info!(
                        "wall-follow loop closed at the start after {} turns, flood search begins",
                        self.turn
                    );
                    self.phase = Phase::Search;
                }
            }
            Phase::Search if self.at_center() => {
                info!(
                    "goal room entered at turn {}, sweeping for coverage",
                    self.turn
                );
                self.phase = Phase::Sweep { destination: None };
            }
            _ => {}
        }
    }

    /// Left-hand-on-wall heuristic, straight from the raw reading.
    fn bootstrap_step(&self, reading: SensorReading) -> Command {
        if reading.left > 0 {
            Command::step(Rotation::Left, 1)
        } else if reading.front > 0 {
            Command::step(Rotation::None, 1)
        } else if reading.right > 0 {
            Command::step(Rotation::Right, 1)
        } else {
            // Boxed in: quarter turn in place, reverse over two turns.
            Command::step(Rotation::Right, 0)
        }
    }

    /// Flood toward the goal room and execute the first command of a
    /// randomly chosen optimal sequence.
    fn guided_step(&mut self, options: PlanOptions) -> Result<Command> {
        let result = flood(&self.walls, self.position, &center_cells(self.dim))?;
        let routes = extract_routes(&self.walls, &result)?;
        let sequence = self.planner.plan(&routes, self.heading, options)?;
        sequence.first().copied().ok_or_else(|| {
            MargaError::InvariantViolation("planned an empty command sequence".into())
        })
    }

    /// Drive toward the nearest cell with unsensed edges until none remain.
    fn sweep_step(&mut self, destination: Option<Cell>) -> Result<Command> {
        let destination = match destination {
            Some(cell) if !self.coverage.is_fully_covered(cell) => Some(cell),
            _ => {
                let next = self.coverage.nearest_uncovered(self.position);
                if let Some(cell) = next {
                    debug!(
                        "sweep target {} ({:.1}% covered)",
                        cell,
                        self.coverage.percent()
                    );
                }
                next
            }
        };
        self.phase = Phase::Sweep { destination };

        let Some(destination) = destination else {
            // Every edge is sensed; idle this turn and reset on the next.
            info!("coverage complete at turn {}, arming reset", self.turn);
            self.phase = Phase::Reset;
            return Ok(Command::step(Rotation::None, 0));
        };

        if destination == self.position {
            // Standing on the target: turn in place so the remaining edges
            // pass under the sensors.
            return Ok(Command::step(Rotation::Right, 0));
        }

        let result = flood(&self.walls, self.position, &[destination])?;
        let routes = extract_routes(&self.walls, &result)?;
        let sequence = self
            .planner
            .plan(&routes, self.heading, PlanOptions::optimized())?;
        sequence.first().copied().ok_or_else(|| {
            MargaError::InvariantViolation("planned an empty command sequence".into())
        })
    }

    /// Emit the reset signal once and restore the start pose; the maps are
    /// kept for the replay run.
    fn reset_step(&mut self) -> Command {
        info!(
            "run 1 complete after {} turns with {:.1}% coverage",
            self.turn,
            self.coverage.percent()
        );
        self.position = self.start;
        self.heading = self.initial_heading;
        self.phase = Phase::Replay;
        Command::Reset
    }

    /// Optimized run on the completed map.
    fn replay_step(&mut self) -> Result<Command> {
        if self.at_center() {
            // Episode end is the harness's call; hold position until then.
            return Ok(Command::step(Rotation::None, 0));
        }
        self.guided_step(PlanOptions::optimized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(dim: usize) -> ExplorationController {
        let config = MazeConfig {
            dim,
            seed: Some(42),
        };
        ExplorationController::new(&config).unwrap()
    }

    #[test]
    fn test_starts_at_origin_facing_north() {
        let c = controller(12);
        assert_eq!(c.position(), Cell::new(0, 0));
        assert_eq!(c.heading(), Heading::North);
        assert_eq!(c.phase(), Phase::Bootstrap);
        assert_eq!(c.turn(), 0);
    }

    #[test]
    fn test_bootstrap_prefers_left_then_straight_then_right() {
        let c = controller(12);
        assert_eq!(
            c.bootstrap_step(SensorReading::new(2, 3, 1)),
            Command::step(Rotation::Left, 1)
        );
        assert_eq!(
            c.bootstrap_step(SensorReading::new(0, 3, 1)),
            Command::step(Rotation::None, 1)
        );
        assert_eq!(
            c.bootstrap_step(SensorReading::new(0, 0, 1)),
            Command::step(Rotation::Right, 1)
        );
    }

    #[test]
    fn test_boxed_in_turns_in_place() {
        // Walk one cell forward into a dead end, then report walls on all
        // three sides: the controller must turn 90 clockwise without moving.
        let mut c = controller(12);
        let first = c.next_move(SensorReading::new(0, 1, 2)).unwrap();
        assert_eq!(first, Command::step(Rotation::None, 1));
        let second = c.next_move(SensorReading::new(0, 0, 0)).unwrap();
        assert_eq!(second, Command::step(Rotation::Right, 0));
        assert_eq!(c.position(), Cell::new(0, 1));
    }

    #[test]
    fn test_dead_reckoning_applies_previous_command() {
        let mut c = controller(12);
        c.next_move(SensorReading::new(0, 3, 2)).unwrap();
        // Position still start during the first call; applied before the
        // second.
        c.next_move(SensorReading::new(0, 2, 2)).unwrap();
        assert_eq!(c.position(), Cell::new(0, 1));
        assert_eq!(c.heading(), Heading::North);
    }

    #[test]
    fn test_rotation_command_updates_heading_clockwise() {
        let mut c = controller(12);
        c.next_move(SensorReading::new(0, 1, 2)).unwrap();
        c.next_move(SensorReading::new(0, 0, 0)).unwrap(); // (Right, 0)
        c.next_move(SensorReading::new(0, 0, 1)).unwrap();
        assert_eq!(c.heading(), Heading::East);
    }
}
