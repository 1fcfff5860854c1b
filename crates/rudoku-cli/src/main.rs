//! Command-line Sudoku solver.

use clap::Parser;
use rudoku_core::Board;
use rudoku_solver::Backtracker;

mod render;

/// Solve a 9x9 Sudoku given as a seed string.
///
/// The seed maps characters onto the grid row by row: '1'-'9' place a given,
/// any other character leaves the cell empty, and a short seed leaves the
/// remaining cells empty.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed string (up to 81 characters). Omit to solve the empty grid.
    seed: Option<String>,
}

// The exit status is always successful, even for an unsolvable seed; in that
// case the printed grid is simply the seeded state. Callers that need the
// outcome as a value should use rudoku_solver::solve directly.
fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let mut board = Board::new();
    if let Some(seed) = &args.seed {
        board.load(seed);
        log::debug!("seed loaded, {} empty cells", board.empty_count());
    }

    let mut solver = Backtracker::new();
    let solved = solver.solve(&mut board);
    log::debug!(
        "solved: {solved} ({} placements, {} backtracks)",
        solver.stats().placements(),
        solver.stats().backtracks()
    );

    println!("{}", render::pretty(&board));
}
