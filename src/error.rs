//! Error types for maze loading and solving.

use grid_util::point::Point;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MazeError {
    #[error("could not read maze source {}: {source}", .path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no start symbol found in {source_name}")]
    MissingStart { source_name: String },

    #[error("no goal symbol found in {source_name}")]
    MissingGoal { source_name: String },

    #[error("second start symbol at {second}, first one is at {first}")]
    DuplicateStart { first: Point, second: Point },

    #[error("second goal symbol at {second}, first one is at {first}")]
    DuplicateGoal { first: Point, second: Point },

    /// Only surfaces if a caller queries outside the maze; the move generator never
    /// offers such coordinates to the search.
    #[error("coordinate {coordinate} is outside the maze")]
    OutOfBounds { coordinate: Point },

    #[error("no path from {start} to {goal}")]
    NoPathFound { start: Point, goal: Point },

    #[error("search aborted after expanding {expanded} nodes (limit {limit})")]
    SearchAborted { expanded: usize, limit: usize },

    #[error("move costs must be finite and positive (cardinal {cardinal}, diagonal {diagonal})")]
    InvalidCost { cardinal: f64, diagonal: f64 },
}

pub type Result<T> = std::result::Result<T, MazeError>;
