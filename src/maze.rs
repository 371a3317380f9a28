use crate::error::{MazeError, Result};
use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Characters with a special meaning in maze sources. Any other character is passable
/// terrain and is kept as-is for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symbols {
    pub wall: char,
    pub start: char,
    pub goal: char,
    pub breadcrumb: char,
}

impl Default for Symbols {
    fn default() -> Symbols {
        Symbols {
            wall: '#',
            start: 'x',
            goal: 'o',
            breadcrumb: '.',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Passable(char),
    Blocked,
    Start,
    Goal,
}

impl Tile {
    pub fn symbol(self, symbols: &Symbols) -> char {
        match self {
            Tile::Passable(c) => c,
            Tile::Blocked => symbols.wall,
            Tile::Start => symbols.start,
            Tile::Goal => symbols.goal,
        }
    }
}

/// An immutable maze read from text. Rows may differ in length; a coordinate past the end
/// of its row is outside the maze. [Maze] keeps a [BoolGrid] of walls padded to the longest
/// row and a [UnionFind] over passable cells so reachability can be answered without search.
#[derive(Clone, Debug)]
pub struct Maze {
    rows: Vec<Vec<Tile>>,
    walls: BoolGrid,
    components: UnionFind<usize>,
    start: Point,
    goal: Point,
    symbols: Symbols,
    source_name: String,
}

impl Maze {
    /// Reads a maze file using the default [Symbols].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Maze> {
        Maze::load_with(path, Symbols::default())
    }

    pub fn load_with<P: AsRef<Path>>(path: P, symbols: Symbols) -> Result<Maze> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MazeError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Maze::parse_with(path.display().to_string(), &text, symbols)
    }

    /// Parses maze text using the default [Symbols]. `source_name` identifies the
    /// input in errors and logs.
    pub fn parse(source_name: impl Into<String>, text: &str) -> Result<Maze> {
        Maze::parse_with(source_name, text, Symbols::default())
    }

    pub fn parse_with(source_name: impl Into<String>, text: &str, symbols: Symbols) -> Result<Maze> {
        let source_name = source_name.into();
        let mut start = None;
        let mut goal = None;
        let mut rows = Vec::new();
        for (y, line) in text.lines().enumerate() {
            let mut row = Vec::new();
            for (x, c) in line.trim_end().chars().enumerate() {
                let point = Point::new(x as i32, y as i32);
                let tile = if c == symbols.wall {
                    Tile::Blocked
                } else if c == symbols.start {
                    if let Some(first) = start {
                        return Err(MazeError::DuplicateStart { first, second: point });
                    }
                    start = Some(point);
                    Tile::Start
                } else if c == symbols.goal {
                    if let Some(first) = goal {
                        return Err(MazeError::DuplicateGoal { first, second: point });
                    }
                    goal = Some(point);
                    Tile::Goal
                } else {
                    Tile::Passable(c)
                };
                row.push(tile);
            }
            rows.push(row);
        }
        let start = start.ok_or_else(|| MazeError::MissingStart {
            source_name: source_name.clone(),
        })?;
        let goal = goal.ok_or_else(|| MazeError::MissingGoal {
            source_name: source_name.clone(),
        })?;

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let height = rows.len();
        // Cells past the end of a short row count as walls
        let mut walls = BoolGrid::new(width, height, true);
        for (y, row) in rows.iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                walls.set(x, y, *tile == Tile::Blocked);
            }
        }
        let mut maze = Maze {
            rows,
            walls,
            components: UnionFind::new(width * height),
            start,
            goal,
            symbols,
            source_name,
        };
        maze.generate_components();
        info!(
            "Loaded {}x{} maze from {} with start {} and goal {}",
            width, height, maze.source_name, start, goal
        );
        Ok(maze)
    }

    pub fn at(&self, coordinate: Point) -> Result<Tile> {
        self.tile(coordinate)
            .ok_or(MazeError::OutOfBounds { coordinate })
    }

    fn tile(&self, coordinate: Point) -> Option<Tile> {
        if coordinate.x < 0 || coordinate.y < 0 {
            return None;
        }
        self.rows
            .get(coordinate.y as usize)?
            .get(coordinate.x as usize)
            .copied()
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// `(width, height)`, where width is the length of the longest row.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.walls.width(), self.walls.height())
    }

    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn contains(&self, coordinate: Point) -> bool {
        self.tile(coordinate).is_some()
    }

    /// In bounds and not a wall.
    pub fn is_passable(&self, coordinate: Point) -> bool {
        self.contains(coordinate) && !self.walls.get(coordinate.x as usize, coordinate.y as usize)
    }

    fn get_ix_point(&self, point: &Point) -> usize {
        point.y as usize * self.walls.width() + point.x as usize
    }

    /// Checks if both points are passable and on the same connected component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        self.is_passable(*start)
            && self.is_passable(*goal)
            && self
                .components
                .equiv(self.get_ix_point(start), self.get_ix_point(goal))
    }

    /// Links up passable cells that are a single move apart. Only the forward half of the
    /// Moore neighbourhood is visited since moves are symmetric.
    fn generate_components(&mut self) {
        let (w, h) = self.dimensions();
        self.components = UnionFind::new(w * h);
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let point = Point::new(x, y);
                if !self.is_passable(point) {
                    continue;
                }
                let parent_ix = self.get_ix_point(&point);
                let neighbours = [
                    Point::new(x + 1, y - 1),
                    Point::new(x + 1, y),
                    Point::new(x + 1, y + 1),
                    Point::new(x, y + 1),
                ];
                for p in neighbours {
                    if self.is_passable(p) {
                        let ix = self.get_ix_point(&p);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Maze> {
        Maze::parse("<string>", s)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            let line: String = row.iter().map(|t| t.symbol(&self.symbols)).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tiles_and_markers() {
        let maze: Maze = "x.#\n.#.\n#.o\n".parse().unwrap();
        assert_eq!(maze.dimensions(), (3, 3));
        assert_eq!(maze.start(), Point::new(0, 0));
        assert_eq!(maze.goal(), Point::new(2, 2));
        assert_eq!(maze.at(Point::new(2, 0)).unwrap(), Tile::Blocked);
        assert_eq!(maze.at(Point::new(1, 0)).unwrap(), Tile::Passable('.'));
        assert_eq!(maze.at(Point::new(0, 0)).unwrap(), Tile::Start);
        assert_eq!(maze.at(Point::new(2, 2)).unwrap(), Tile::Goal);
        assert_eq!(maze.to_string(), "x.#\n.#.\n#.o\n");
    }

    #[test]
    fn trims_trailing_whitespace_and_allows_ragged_rows() {
        let maze = Maze::parse("ragged", "x  \r\n   \t\n#####o  \n").unwrap();
        assert_eq!(maze.dimensions(), (6, 3));
        assert_eq!(maze.row_len(0), 1);
        assert_eq!(maze.row_len(1), 0);
        assert_eq!(maze.row_len(2), 6);
        assert!(!maze.contains(Point::new(1, 0)));
        assert!(!maze.is_passable(Point::new(1, 0)));
        assert!(maze.contains(Point::new(5, 2)));
        assert!(matches!(
            maze.at(Point::new(3, 1)),
            Err(MazeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn rejects_missing_markers() {
        match Maze::parse("no-start", "..o\n...") {
            Err(MazeError::MissingStart { source_name }) => assert_eq!(source_name, "no-start"),
            other => panic!("unexpected {:?}", other),
        }
        match Maze::parse("no-goal", "x..\n...") {
            Err(MazeError::MissingGoal { source_name }) => assert_eq!(source_name, "no-goal"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            Maze::parse("empty", ""),
            Err(MazeError::MissingStart { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_markers() {
        match Maze::parse("two-starts", "x.o\n..x") {
            Err(MazeError::DuplicateStart { first, second }) => {
                assert_eq!(first, Point::new(0, 0));
                assert_eq!(second, Point::new(2, 1));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            Maze::parse("two-goals", "xoo"),
            Err(MazeError::DuplicateGoal { .. })
        ));
    }

    #[test]
    fn custom_symbols() {
        let symbols = Symbols {
            wall: 'W',
            start: 'S',
            goal: 'G',
            breadcrumb: '*',
        };
        let maze = Maze::parse_with("custom", "S#W\n..G", symbols).unwrap();
        assert_eq!(maze.at(Point::new(1, 0)).unwrap(), Tile::Passable('#'));
        assert_eq!(maze.at(Point::new(2, 0)).unwrap(), Tile::Blocked);
        assert_eq!(maze.goal(), Point::new(2, 1));
    }

    #[test]
    fn missing_file_is_reported() {
        let result = Maze::load("/definitely/not/here/maze.txt");
        assert!(matches!(result, Err(MazeError::SourceNotFound { .. })));
    }

    /// Tests whether cells are mapped to the expected connected components
    #[test]
    fn test_component_generation() {
        // x.#..
        // ..#.o
        // ..#..
        let maze = Maze::parse("split", "x.#..\n..#.o\n..#..").unwrap();
        let start = maze.start();
        assert!(maze.reachable(&start, &Point::new(1, 2)));
        assert!(!maze.reachable(&start, &maze.goal()));
        assert!(!maze.reachable(&start, &Point::new(2, 0)));
        assert!(maze.reachable(&Point::new(3, 0), &maze.goal()));
    }

    #[test]
    fn diagonal_gaps_connect() {
        // x#
        // #o
        let maze = Maze::parse("diagonal", "x#\n#o").unwrap();
        assert!(maze.reachable(&maze.start(), &maze.goal()));
    }
}
