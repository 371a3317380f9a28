//! # maze_astar
//!
//! Finds minimum-cost paths through text mazes with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm). Mazes are read one character per
//! cell: `#` is a wall, `x` the start, `o` the goal and anything else open floor. Moves go
//! to any of the eight neighbouring cells; cardinal moves cost 1.0 and diagonal moves 1.7.
//! The heuristic is the Euclidean distance, which is admissible for these costs.
//!
//! Connected components are computed when a maze is loaded so that an unreachable goal is
//! reported without flood-filling the maze.
//!
//! ```
//! use maze_astar::{render, solve, Maze};
//!
//! let maze: Maze = "x.#\n.#.\n#.o".parse().unwrap();
//! let path = solve(&maze).unwrap();
//! assert_eq!(path.steps().first().map(|s| s.coordinate), Some(maze.start()));
//! println!("{}", render(&maze, &path));
//! ```
pub mod astar;
pub mod cost;
pub mod direction;
pub mod error;
pub mod maze;
pub mod path;
pub mod render;
pub mod solver;

pub use crate::cost::CostModel;
pub use crate::direction::Direction;
pub use crate::error::{MazeError, Result};
pub use crate::maze::{Maze, Symbols, Tile};
pub use crate::path::{Path, Step};
pub use crate::render::{render, render_with};
pub use crate::solver::{MazeSolver, SolverConfig};
pub use grid_util::point::Point;

/// Inline capacity of successor lists, one slot per compass direction.
pub const N_SMALLVEC_SIZE: usize = 8;

/// Solves `maze` with the default costs and no expansion budget.
pub fn solve(maze: &Maze) -> Result<Path> {
    MazeSolver::default().solve(maze)
}
