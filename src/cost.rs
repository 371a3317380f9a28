use crate::direction::Direction;
use crate::error::{MazeError, Result};
use std::f64::consts::SQRT_2;

/// Cardinal moves cost 1.0. Diagonal moves cost 1.7, which is deliberately more than
/// the geometric 1.414 but still cheaper than two cardinal steps.
pub const CARDINAL_COST: f64 = 1.0;
pub const DIAGONAL_COST: f64 = 1.7;

/// Traversal cost per move direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostModel {
    cardinal: f64,
    diagonal: f64,
}

impl Default for CostModel {
    fn default() -> CostModel {
        CostModel {
            cardinal: CARDINAL_COST,
            diagonal: DIAGONAL_COST,
        }
    }
}

impl CostModel {
    pub fn new(cardinal: f64, diagonal: f64) -> Result<CostModel> {
        let valid = |c: f64| c.is_finite() && c > 0.0;
        if valid(cardinal) && valid(diagonal) {
            Ok(CostModel { cardinal, diagonal })
        } else {
            Err(MazeError::InvalidCost { cardinal, diagonal })
        }
    }

    pub fn cost(&self, direction: Direction) -> f64 {
        if direction.is_diagonal() {
            self.diagonal
        } else {
            self.cardinal
        }
    }

    pub fn cardinal(&self) -> f64 {
        self.cardinal
    }

    pub fn diagonal(&self) -> f64 {
        self.diagonal
    }

    /// Cheapest cost per unit of straight-line distance over all directions. Scaling
    /// the Euclidean distance by this keeps the heuristic admissible.
    pub fn unit_cost(&self) -> f64 {
        self.cardinal.min(self.diagonal / SQRT_2)
    }
}
