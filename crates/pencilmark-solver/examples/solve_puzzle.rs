//! Example running the propagation solver on a puzzle.
//!
//! This example shows how to:
//! - Parse a puzzle from its 81-cell text form
//! - Configure and run a `PropagationSolver`
//! - Inspect the report: result grid, per-rule deduction counts, outcome
//!
//! # Usage
//!
//! Solve the built-in demo puzzle:
//!
//! ```sh
//! cargo run --example solve_puzzle
//! ```
//!
//! Solve a puzzle given on the command line (`0`, `.`, or `_` for blanks,
//! whitespace ignored):
//!
//! ```sh
//! cargo run --example solve_puzzle -- "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//! ```
//!
//! Disable the pointing-pair rule or cap the number of deduction steps:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --no-pointing-pairs --max-steps 20
//! ```
//!
//! Set `RUST_LOG=trace` to see every deduction as it happens.

use std::process;

use clap::Parser;
use pencilmark_core::DigitGrid;
use pencilmark_solver::{PropagationSolver, SolveReport, rule::ForcedRule};

const DEMO_PUZZLE: &str = "
    53. .7. ...
    6.. 195 ...
    .98 ... .6.
    8.. .6. ..3
    4.. 8.3 ..1
    7.. .2. ..6
    .6. ... 28.
    ... 419 ..5
    ... .8. .79
";

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle as 81 cells in row-major order; omit for the demo puzzle.
    #[arg(value_name = "PUZZLE")]
    puzzle: Option<String>,

    /// Solve with hidden and naked singles only.
    #[arg(long)]
    no_pointing_pairs: bool,

    /// Maximum number of deduction steps.
    #[arg(long, value_name = "COUNT", default_value_t = PropagationSolver::DEFAULT_STEP_BUDGET)]
    max_steps: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let text = args.puzzle.as_deref().unwrap_or(DEMO_PUZZLE);
    let grid: DigitGrid = match text.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Invalid puzzle: {err}");
            process::exit(2);
        }
    };

    let solver = PropagationSolver::new()
        .with_pointing_pairs(!args.no_pointing_pairs)
        .with_step_budget(args.max_steps);
    let report = solver.solve(&grid);

    println!("Problem ({} clues):", grid.filled_count());
    print_grid(&grid);
    println!();
    println!("Result:");
    print_grid(report.grid());
    println!();
    print_report(&report);

    if report.contradiction() {
        process::exit(1);
    }
}

fn print_grid(grid: &DigitGrid) {
    for line in grid.to_string().lines() {
        println!("  {line}");
    }
}

fn print_report(report: &SolveReport) {
    let count_of = |rule| report.fixes().iter().filter(|f| f.rule == rule).count();

    println!("Deductions:");
    for rule in [ForcedRule::HiddenSingle, ForcedRule::NakedSingle] {
        println!("  {rule}: {}", count_of(rule));
    }
    println!("  total: {}", report.fixes().len());
    println!();

    if report.is_solved() {
        println!("Solved.");
    } else if report.contradiction() {
        println!("Contradiction: the puzzle has no solution.");
    } else {
        println!("Stalled with {} cells still open.", report.open_cells());
    }
}
