//! Full two-run episode driver.

use log::info;

use crate::config::MazeConfig;
use crate::explore::ExplorationController;
use crate::harness::MazeSim;
use crate::io::MazeSpec;
use crate::planning::{center_cells, Command};
use crate::{MargaError, Result};

/// Generous per-run turn budget; a run that exceeds it has stalled.
pub const MAX_TURNS: u32 = 5_000;

/// Outcome of a complete two-run episode.
#[derive(Clone, Copy, Debug)]
pub struct EpisodeReport {
    /// Turns spent exploring (up to and including the reset command)
    pub run1_turns: u32,
    /// Turns spent on the optimized run to the goal room
    pub run2_turns: u32,
    /// Coverage percentage when run 1 ended
    pub coverage_percent: f32,
    /// Episode score: run-2 turns plus one thirtieth of run-1 turns
    pub score: f32,
}

/// Run a controller through a full episode: explore until the reset
/// command, then replay until the robot enters the goal room.
pub fn run_episode(maze: MazeSpec, config: &MazeConfig) -> Result<EpisodeReport> {
    if maze.dim() != config.dim {
        return Err(MargaError::Config(format!(
            "maze dimension {} does not match configured dimension {}",
            maze.dim(),
            config.dim
        )));
    }

    let mut sim = MazeSim::new(maze);
    let mut controller = ExplorationController::new(config)?;

    let mut run1_turns = 0;
    loop {
        if run1_turns >= MAX_TURNS {
            return Err(MargaError::Episode(format!(
                "exploration run exceeded {MAX_TURNS} turns"
            )));
        }
        let command = controller.next_move(sim.reading())?;
        run1_turns += 1;
        sim.apply(command)?;
        if command == Command::Reset {
            break;
        }
    }
    let coverage_percent = controller.coverage().percent();
    info!("run 1 finished in {run1_turns} turns ({coverage_percent:.1}% coverage)");

    let goals = center_cells(config.dim);
    let mut run2_turns = 0;
    while !goals.contains(&sim.position()) {
        if run2_turns >= MAX_TURNS {
            return Err(MargaError::Episode(format!(
                "replay run exceeded {MAX_TURNS} turns"
            )));
        }
        let command = controller.next_move(sim.reading())?;
        run2_turns += 1;
        sim.apply(command)?;
    }
    info!("run 2 finished in {run2_turns} turns");

    Ok(EpisodeReport {
        run1_turns,
        run2_turns,
        coverage_percent,
        score: run2_turns as f32 + run1_turns as f32 / 30.0,
    })
}
