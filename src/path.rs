use grid_util::point::Point;
use itertools::Itertools;

use crate::{cost::CostModel, direction::Direction, maze::Maze, solver::moves};

/// A single entry of a [Path]: the cell reached and the move that reached it. Only the
/// first step has no move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub action: Option<Direction>,
    pub coordinate: Point,
}

/// Ordered steps from start to goal, both included.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    steps: Vec<Step>,
    cost: f64,
    expanded: usize,
}

impl Path {
    pub(crate) fn new(steps: Vec<Step>, cost: f64, expanded: usize) -> Path {
        Path {
            steps,
            cost,
            expanded,
        }
    }

    /// The full path including start and goal.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The steps strictly between start and goal.
    pub fn interior(&self) -> &[Step] {
        if self.steps.len() < 2 {
            &[]
        } else {
            &self.steps[1..self.steps.len() - 1]
        }
    }

    pub fn coordinates(&self) -> impl Iterator<Item = Point> + '_ {
        self.steps.iter().map(|s| s.coordinate)
    }

    pub fn actions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.steps.iter().filter_map(|s| s.action)
    }

    /// Cost accumulated by the search.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of states the search expanded to find this path.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of the per-move costs under `costs`.
    pub fn total_cost(&self, costs: &CostModel) -> f64 {
        self.actions().map(|d| costs.cost(d)).sum()
    }

    /// Checks that every step is a legal single move onto a passable cell of `maze`.
    pub fn is_contiguous(&self, maze: &Maze) -> bool {
        self.steps.iter().tuple_windows().all(|(prev, next)| {
            next.action.is_some_and(|dir| {
                moves::result(prev.coordinate, dir) == next.coordinate
                    && maze.is_passable(next.coordinate)
            })
        })
    }
}
