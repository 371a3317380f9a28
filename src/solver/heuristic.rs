use grid_util::point::Point;

use crate::cost::CostModel;

/// Straight-line distance between two cells.
pub fn euclidean(p1: Point, p2: Point) -> f64 {
    let dx = (p1.x - p2.x) as f64;
    let dy = (p1.y - p2.y) as f64;
    dx.hypot(dy)
}

/// Euclidean distance times the cheapest cost per unit of distance. Never overestimates
/// and satisfies the triangle inequality for any valid [CostModel]; for the default model
/// it is the plain Euclidean distance.
pub fn estimate(state: Point, goal: Point, costs: &CostModel) -> f64 {
    euclidean(state, goal) * costs.unit_cost()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_only_at_goal() {
        let costs = CostModel::default();
        let goal = Point::new(2, 2);
        assert_eq!(estimate(goal, goal, &costs), 0.0);
        assert!(estimate(Point::new(2, 3), goal, &costs) > 0.0);
    }

    #[test]
    fn default_model_is_euclidean() {
        let costs = CostModel::default();
        let h = estimate(Point::new(0, 0), Point::new(3, 4), &costs);
        assert!((h - 5.0).abs() < 1e-12);
    }

    #[test]
    fn single_moves_never_overestimated() {
        let costs = CostModel::new(1.0, 1.2).unwrap();
        let origin = Point::new(0, 0);
        for (target, cost) in [(Point::new(1, 0), 1.0), (Point::new(1, 1), 1.2)] {
            assert!(estimate(origin, target, &costs) <= cost + 1e-12);
        }
    }
}
