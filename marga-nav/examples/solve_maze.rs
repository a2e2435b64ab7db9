//! Run a full two-run episode against a maze file and print the result.
//!
//! Usage (from the repository root):
//!   cargo run --example solve_maze -- --maze marga-nav/mazes/open_12.txt
//!   cargo run --example solve_maze -- --dim 16          # open maze, no file
//!
//! Enable logging to watch phase transitions:
//!   RUST_LOG=debug cargo run --example solve_maze

use clap::Parser;

use marga_nav::harness::{ascii_map, MazeSim, MAX_TURNS};
use marga_nav::io::{load_maze, MazeSpec};
use marga_nav::planning::Command;
use marga_nav::{center_cells, ExplorationController, MazeConfig};

/// Maze exploration demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze file to load (see mazes/ for the format)
    #[arg(short, long)]
    maze: Option<String>,

    /// Run on a generated open maze of this dimension instead of a file
    #[arg(short, long, default_value = "12")]
    dim: usize,

    /// RNG seed for reproducible tie-breaking
    #[arg(short, long)]
    seed: Option<u64>,

    /// Optional TOML config file (overridden by --dim/--seed)
    #[arg(short, long)]
    config: Option<String>,
}

fn main() -> marga_nav::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let maze = match &args.maze {
        Some(path) => load_maze(path)?,
        None => MazeSpec::open_grid(args.dim),
    };

    let mut config = match &args.config {
        Some(path) => MazeConfig::from_file(path)?,
        None => MazeConfig::new(maze.dim()),
    };
    config.dim = maze.dim();
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut sim = MazeSim::new(maze);
    let mut controller = ExplorationController::new(&config)?;

    // Run 1: explore until the controller asks for the reset.
    let mut run1_turns = 0;
    loop {
        assert!(run1_turns < MAX_TURNS, "exploration stalled");
        let command = controller.next_move(sim.reading())?;
        run1_turns += 1;
        sim.apply(command)?;
        if command == Command::Reset {
            break;
        }
    }

    println!("map after exploration ({run1_turns} turns):");
    print!("{}", ascii_map(controller.walls(), None));
    println!(
        "coverage: {:.1}%",
        controller.coverage().percent()
    );

    // Run 2: optimized replay to the goal room.
    let goals = center_cells(config.dim);
    let mut run2_turns = 0;
    while !goals.contains(&sim.position()) {
        assert!(run2_turns < MAX_TURNS, "replay stalled");
        let command = controller.next_move(sim.reading())?;
        run2_turns += 1;
        sim.apply(command)?;
        println!("run 2 turn {run2_turns}: {command:?} -> {}", sim.position());
    }

    let score = run2_turns as f32 + run1_turns as f32 / 30.0;
    println!("run 1: {run1_turns} turns, run 2: {run2_turns} turns, score {score:.2}");
    Ok(())
}
