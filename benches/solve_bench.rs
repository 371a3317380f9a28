use criterion::{criterion_group, criterion_main, Criterion};
use maze_astar::{Maze, MazeSolver};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_maze(n: usize, density: f64, rng: &mut StdRng) -> Maze {
    let mut text = String::with_capacity(n * (n + 1));
    for y in 0..n {
        for x in 0..n {
            let c = if (x, y) == (0, 0) {
                'x'
            } else if (x, y) == (n - 1, n - 1) {
                'o'
            } else if rng.gen_bool(density) {
                '#'
            } else {
                '.'
            };
            text.push(c);
        }
        text.push('\n');
    }
    Maze::parse(format!("random {n}x{n}"), &text).unwrap()
}

fn solve_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let solver = MazeSolver::default();
    for (n, density) in [(64, 0.0), (64, 0.2), (256, 0.2)] {
        let mut maze = random_maze(n, density, &mut rng);
        while !maze.reachable(&maze.start(), &maze.goal()) {
            maze = random_maze(n, density, &mut rng);
        }
        c.bench_function(format!("{n}x{n}, wall density {density}").as_str(), |b| {
            b.iter(|| black_box(solver.solve(&maze)))
        });
    }
}

criterion_group!(benches, solve_bench);
criterion_main!(benches);
