//! Move planning: turning cell routes into actuation commands.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::Heading;
use crate::planning::Route;
use crate::{MargaError, Result};

/// Maximum cells the robot may move in a single command; the external
/// harness truncates anything larger.
pub const MAX_MOVE: i8 = 3;

/// Commanded rotation, in the robot's clockwise-positive convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    /// 90 degrees counter-clockwise (-90)
    Left,
    /// No rotation (0)
    None,
    /// 90 degrees clockwise (+90)
    Right,
}

impl Rotation {
    /// Signed degrees, clockwise positive
    #[inline]
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::Left => -90,
            Rotation::None => 0,
            Rotation::Right => 90,
        }
    }

    pub fn from_degrees(degrees: i32) -> Result<Rotation> {
        match degrees {
            -90 => Ok(Rotation::Left),
            0 => Ok(Rotation::None),
            90 => Ok(Rotation::Right),
            _ => Err(MargaError::InvariantViolation(format!(
                "{degrees} degrees is not a single-step rotation"
            ))),
        }
    }
}

/// One turn's output: rotate-then-move, or the distinguished reset signal
/// that ends the exploration run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move { rotation: Rotation, movement: i8 },
    Reset,
}

impl Command {
    /// Shorthand for a move command
    #[inline]
    pub fn step(rotation: Rotation, movement: i8) -> Self {
        Command::Move { rotation, movement }
    }
}

/// Convert a route (stored goal -> source) into the command sequence that
/// drives the robot source -> goal, starting from `start_heading`.
///
/// Each displacement is reconciled against the planner's running heading
/// vector: the sign of their cross product picks the quarter turn (the
/// planner works counter-clockwise-positive and negates at the boundary to
/// the robot's clockwise-positive commands), and a displacement exactly
/// reversing the heading becomes a backward move with no rotation.
pub fn plan_moves(route: &Route, start_heading: Heading) -> Result<Vec<Command>> {
    let mut heading = start_heading.vector();
    let mut commands = Vec::with_capacity(route.len());

    for pair in route.windows(2).rev() {
        let displacement = pair[0] - pair[1];
        if !displacement.is_unit() {
            return Err(MargaError::InvariantViolation(format!(
                "route step from {} to {} is not a unit displacement",
                pair[1], pair[0]
            )));
        }

        if displacement == -heading {
            commands.push(Command::step(Rotation::None, -1));
            continue;
        }

        let cross = heading.x * displacement.y - heading.y * displacement.x;
        let ccw_degrees = if displacement == heading { 0 } else { 90 * cross.signum() };
        let rotation = Rotation::from_degrees(-ccw_degrees)?;
        heading = heading.rotated_ccw(ccw_degrees)?;
        commands.push(Command::step(rotation, 1));
    }

    Ok(commands)
}

/// Merge consecutive straight segments: a rotation-free command folds into
/// its predecessor while the signs agree and the combined magnitude stays
/// within the actuation limit.
pub fn consolidate(commands: &[Command]) -> Vec<Command> {
    let mut merged: Vec<Command> = Vec::with_capacity(commands.len());
    for &command in commands {
        let folded = match (merged.last_mut(), command) {
            (
                Some(Command::Move { movement: prev, .. }),
                Command::Move {
                    rotation: Rotation::None,
                    movement,
                },
            ) if prev.signum() == movement.signum()
                && (*prev + movement).abs() <= MAX_MOVE =>
            {
                *prev += movement;
                true
            }
            _ => false,
        };
        if !folded {
            merged.push(command);
        }
    }
    merged
}

/// Keep only the sequences tied for the minimum command count.
pub fn shortest_only(sequences: Vec<Vec<Command>>) -> Vec<Vec<Command>> {
    let Some(min) = sequences.iter().map(Vec::len).min() else {
        return sequences;
    };
    sequences.into_iter().filter(|s| s.len() == min).collect()
}

/// Which optional passes a planning call applies.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlanOptions {
    pub consolidate: bool,
    pub shortest_only: bool,
}

impl PlanOptions {
    /// Plain single-step planning, used while searching for the goal
    pub fn search() -> Self {
        Self::default()
    }

    /// Consolidated, shortest-filtered planning for the sweep and the
    /// optimized replay run
    pub fn optimized() -> Self {
        Self {
            consolidate: true,
            shortest_only: true,
        }
    }
}

/// Plans command sequences over route sets and breaks ties at random.
///
/// Several routes are often equally optimal; choosing uniformly among them
/// is deliberate policy, not an error condition, so the planner owns a
/// seedable RNG for reproducible runs.
pub struct MovePlanner {
    rng: StdRng,
}

impl MovePlanner {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Planner with a fixed seed, for deterministic tests and replays
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Plan every route, apply the optional passes, and return one of the
    /// surviving sequences chosen uniformly at random.
    pub fn plan(
        &mut self,
        routes: &[Route],
        heading: Heading,
        options: PlanOptions,
    ) -> Result<Vec<Command>> {
        if routes.is_empty() {
            return Err(MargaError::InvariantViolation(
                "no routes to plan over".into(),
            ));
        }

        let mut sequences = routes
            .iter()
            .map(|route| plan_moves(route, heading))
            .collect::<Result<Vec<_>>>()?;
        if options.consolidate {
            sequences = sequences.iter().map(|s| consolidate(s)).collect();
        }
        if options.shortest_only {
            sequences = shortest_only(sequences);
        }

        let pick = self.rng.random_range(0..sequences.len());
        Ok(sequences.swap_remove(pick))
    }
}

impl Default for MovePlanner {
    fn default() -> Self {
        Self::new()
    }
}
