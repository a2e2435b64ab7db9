//! Maze file format support.

mod maze_file;

pub use maze_file::{load_maze, save_maze, MazeSpec};
