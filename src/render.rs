use crate::{
    maze::{Maze, Tile},
    path::Path,
};

/// Draws the interior of `path` onto a copy of `maze` with the maze's breadcrumb symbol.
pub fn render(maze: &Maze, path: &Path) -> String {
    render_with(maze, path, maze.symbols().breadcrumb)
}

/// Like [render] but with an explicit breadcrumb. Start and goal keep their symbols and
/// the maze itself is left untouched.
pub fn render_with(maze: &Maze, path: &Path, breadcrumb: char) -> String {
    let symbols = maze.symbols();
    let mut canvas: Vec<Vec<char>> = maze
        .rows()
        .iter()
        .map(|row| row.iter().map(|t| t.symbol(symbols)).collect())
        .collect();
    for step in path.interior() {
        let p = step.coordinate;
        if let Ok(Tile::Passable(_)) = maze.at(p) {
            canvas[p.y as usize][p.x as usize] = breadcrumb;
        }
    }
    let mut out = String::new();
    for row in canvas {
        out.extend(row);
        out.push('\n');
    }
    out
}
