use maze_astar::{render, solve, Maze, MazeError};
use std::process::ExitCode;

// Solves a maze file and prints it with the path drawn in:
//
//     cargo run --example solve_maze -- demos/mazes/turtle.txt
//
// Set RUST_LOG=info to see the solver's progress.
fn main() -> ExitCode {
    env_logger::init();
    let source = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/mazes/turtle.txt".to_owned());
    let maze = match Maze::load(&source) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    println!("{}", maze);
    match solve(&maze) {
        Ok(path) => {
            println!("{}", render(&maze, &path));
            println!(
                "Path of {} moves with cost {:.1}",
                path.len() - 1,
                path.cost()
            );
            for step in path.steps() {
                match step.action {
                    Some(dir) => println!("{:>2} -> {}", dir, step.coordinate),
                    None => println!("   {}", step.coordinate),
                }
            }
        }
        Err(MazeError::NoPathFound { start, goal }) => {
            println!("No path from {start} to {goal}");
        }
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
