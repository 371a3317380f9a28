use core::fmt;
use grid_util::point::Point;

/// One of the eight compass moves. North decreases the row, east increases the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    S,
    W,
    E,
    NW,
    NE,
    SW,
    SE,
}

impl Direction {
    /// Fixed enumeration order used by the move generator. Expansion order and
    /// therefore tie-breaking depend on it.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::W,
        Direction::E,
        Direction::NW,
        Direction::NE,
        Direction::SW,
        Direction::SE,
    ];

    /// Column and row offset of a single step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::N => (0, -1),
            Direction::S => (0, 1),
            Direction::W => (-1, 0),
            Direction::E => (1, 0),
            Direction::NW => (-1, -1),
            Direction::NE => (1, -1),
            Direction::SW => (-1, 1),
            Direction::SE => (1, 1),
        }
    }

    pub fn is_diagonal(self) -> bool {
        let (dx, dy) = self.delta();
        dx != 0 && dy != 0
    }

    /// The direction of a single step from `from` to `to`, if they are Moore neighbours.
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        let delta = (to.x - from.x, to.y - from.y);
        Direction::ALL.into_iter().find(|d| d.delta() == delta)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::N => "N",
            Direction::S => "S",
            Direction::W => "W",
            Direction::E => "E",
            Direction::NW => "NW",
            Direction::NE => "NE",
            Direction::SW => "SW",
            Direction::SE => "SE",
        };
        f.pad(name)
    }
}
