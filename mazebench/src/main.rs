//! mazebench — generate a solvable maze and race the search algorithms.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::Parser;
use mazebench_core::Point;
use mazebench_gen::MazeGen;
use mazebench_paths::{QueryError, SearchRange};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

#[derive(Parser)]
#[command(name = "mazebench", version, about)]
struct Args {
    /// Maze side length.
    #[arg(long, default_value_t = 10)]
    size: i32,
    /// Seed for deterministic maze generation.
    #[arg(long)]
    seed: Option<u64>,
    /// Skip the menu: generate one maze, run all algorithms, exit.
    #[arg(long)]
    bench: bool,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::rng().random()),
    };
    let mut mazegen = MazeGen::new(rng);

    if args.bench {
        run_benchmark(&mut mazegen, args.size);
        return Ok(());
    }

    menu_loop(&mut mazegen, args.size)
}

fn menu_loop(mazegen: &mut MazeGen<StdRng>, mut size: i32) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to the maze search benchmark!");
    loop {
        println!();
        println!("Choose an option:");
        println!("1. Set the maze size (currently {size}x{size})");
        println!("2. Generate a maze and run the search algorithms");
        println!("3. Quit");
        print!("Option: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        match line?.trim() {
            "1" => {
                print!("Enter the maze size (e.g. 10, 50, 100): ");
                io::stdout().flush()?;
                let Some(line) = lines.next() else {
                    break;
                };
                match line?.trim().parse::<i32>() {
                    Ok(n) if n >= 2 => {
                        size = n;
                        println!("A {size}x{size} maze is ready to generate.");
                    }
                    _ => println!("The size must be an integer of at least 2."),
                }
            }
            "2" => run_benchmark(mazegen, size),
            "3" => {
                println!("Goodbye!");
                break;
            }
            other => println!("Unknown option {other:?}. Try again."),
        }
    }
    Ok(())
}

fn run_benchmark(mazegen: &mut MazeGen<StdRng>, size: i32) {
    let maze = match mazegen.generate(size) {
        Ok(maze) => maze,
        Err(err) => {
            eprintln!("maze generation failed: {err}");
            return;
        }
    };

    println!();
    println!("Generated maze:");
    print!("{maze}");

    let start = Point::ZERO;
    let goal = Point::new(size - 1, size - 1);
    let mut range = SearchRange::new(size);

    report("DFS", |r| r.dfs_path(&maze, start, goal), &mut range);
    report("BFS", |r| r.bfs_path(&maze, start, goal), &mut range);
    report("A*", |r| r.astar_path(&maze, start, goal), &mut range);
}

fn report<F>(name: &str, search: F, range: &mut SearchRange)
where
    F: FnOnce(&mut SearchRange) -> Result<Option<Vec<Point>>, QueryError>,
{
    println!("Running {name}...");
    let timer = Instant::now();
    let result = search(range);
    let secs = timer.elapsed().as_secs_f64();
    match result {
        Ok(Some(path)) => {
            println!("  {name}: path found ({} steps) in {secs:.6} s", path.len() - 1)
        }
        Ok(None) => println!("  {name}: no path found in {secs:.6} s"),
        Err(err) => println!("  {name}: invalid query: {err}"),
    }
}
