use grid_util::point::Point;
use log::{info, warn};
use smallvec::SmallVec;

use crate::{
    astar::{astar, SearchFailure, SearchProblem},
    cost::CostModel,
    direction::Direction,
    error::{MazeError, Result},
    maze::Maze,
    path::{Path, Step},
    N_SMALLVEC_SIZE,
};

pub mod heuristic;
pub mod moves;

/// Settings for a [MazeSolver].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SolverConfig {
    pub costs: CostModel,
    /// Abort with [MazeError::SearchAborted] after expanding this many cells.
    pub max_expansions: Option<usize>,
}

/// A [Maze] seen as a search problem: cells are states and compass moves are actions.
#[derive(Clone, Copy, Debug)]
pub struct MazeProblem<'a> {
    maze: &'a Maze,
    costs: &'a CostModel,
}

impl<'a> MazeProblem<'a> {
    pub fn new(maze: &'a Maze, costs: &'a CostModel) -> MazeProblem<'a> {
        MazeProblem { maze, costs }
    }
}

impl SearchProblem for MazeProblem<'_> {
    type State = Point;
    type Action = Direction;
    type Cost = f64;
    type Actions = SmallVec<[Direction; N_SMALLVEC_SIZE]>;

    fn initial_state(&self) -> Point {
        self.maze.start()
    }

    fn actions(&self, state: &Point) -> Self::Actions {
        moves::actions(self.maze, *state)
    }

    fn result(&self, state: &Point, action: Direction) -> Point {
        moves::result(*state, action)
    }

    fn cost(&self, _: &Point, action: Direction, _: &Point) -> f64 {
        self.costs.cost(action)
    }

    fn heuristic(&self, state: &Point) -> f64 {
        heuristic::estimate(*state, self.maze.goal(), self.costs)
    }

    fn is_goal(&self, state: &Point) -> bool {
        *state == self.maze.goal()
    }
}

/// Solves mazes with A*. A solver holds only configuration; every call to
/// [solve](Self::solve) uses fresh search state, so one solver and one [Maze] can be
/// shared between threads.
#[derive(Clone, Debug, Default)]
pub struct MazeSolver {
    pub config: SolverConfig,
}

impl MazeSolver {
    pub fn new(config: SolverConfig) -> MazeSolver {
        MazeSolver { config }
    }

    pub fn problem<'a>(&'a self, maze: &'a Maze) -> MazeProblem<'a> {
        MazeProblem::new(maze, &self.config.costs)
    }

    /// Computes a minimum-cost path from the maze's start to its goal. Returns
    /// [MazeError::NoPathFound] without searching if the two lie on different
    /// connected components.
    pub fn solve(&self, maze: &Maze) -> Result<Path> {
        let start = maze.start();
        let goal = maze.goal();
        if !maze.reachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Err(MazeError::NoPathFound { start, goal });
        }
        info!("{} is reachable from {}, computing path", goal, start);
        self.search(maze)
    }

    /// Runs the search without the connected component check.
    pub fn search(&self, maze: &Maze) -> Result<Path> {
        let start = maze.start();
        let goal = maze.goal();
        match astar(&self.problem(maze), self.config.max_expansions) {
            Ok(solution) => {
                info!(
                    "Found path of {} steps with cost {:.3} after expanding {} cells",
                    solution.steps.len(),
                    solution.cost,
                    solution.expanded
                );
                let steps = solution
                    .steps
                    .into_iter()
                    .map(|(action, coordinate)| Step { action, coordinate })
                    .collect();
                Ok(Path::new(steps, solution.cost, solution.expanded))
            }
            Err(SearchFailure::Exhausted { expanded }) => {
                warn!(
                    "No path from {} to {} after expanding {} cells",
                    start, goal, expanded
                );
                Err(MazeError::NoPathFound { start, goal })
            }
            Err(SearchFailure::BudgetExceeded { expanded, limit }) => {
                Err(MazeError::SearchAborted { expanded, limit })
            }
        }
    }
}
