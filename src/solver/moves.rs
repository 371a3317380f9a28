use grid_util::point::Point;
use smallvec::SmallVec;

use crate::{direction::Direction, maze::Maze, N_SMALLVEC_SIZE};

/// Directions that lead from `state` to an in-bounds, non-wall cell, in [Direction::ALL]
/// order. Moves may cut past wall corners.
pub fn actions(maze: &Maze, state: Point) -> SmallVec<[Direction; N_SMALLVEC_SIZE]> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| maze.is_passable(result(state, dir)))
        .collect()
}

/// Applies a move without checking it; only directions from [actions] are valid.
pub fn result(state: Point, direction: Direction) -> Point {
    let (dx, dy) = direction.delta();
    Point::new(state.x + dx, state.y + dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_only_moves_inwards() {
        let maze = Maze::parse("open", "x..\n...\n..o").unwrap();
        let moves = actions(&maze, maze.start());
        assert_eq!(moves.as_slice(), &[Direction::S, Direction::E, Direction::SE]);
    }

    #[test]
    fn centre_has_full_neighbourhood_in_fixed_order() {
        let maze = Maze::parse("open", "x..\n...\n..o").unwrap();
        let moves = actions(&maze, Point::new(1, 1));
        assert_eq!(moves.as_slice(), &Direction::ALL);
    }

    #[test]
    fn walls_and_short_rows_are_excluded() {
        // x.#
        // .#
        // ..o
        let maze = Maze::parse("ragged", "x.#\n.#\n..o").unwrap();
        let moves = actions(&maze, Point::new(1, 2));
        // (2, 1) lies past the end of the middle row and (1, 1) is a wall
        assert_eq!(
            moves.as_slice(),
            &[Direction::W, Direction::E, Direction::NW]
        );
        for dir in moves {
            assert!(maze.is_passable(result(Point::new(1, 2), dir)));
        }
    }

    #[test]
    fn result_applies_delta() {
        let p = Point::new(4, 7);
        assert_eq!(result(p, Direction::N), Point::new(4, 6));
        assert_eq!(result(p, Direction::SW), Point::new(3, 8));
        assert_eq!(result(p, Direction::NE), Point::new(5, 6));
    }
}
