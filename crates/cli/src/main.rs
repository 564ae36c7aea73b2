//! tessel - enumerate every exact polyomino tiling of a rectangular board.

mod puzzle;

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use tessel_core::{Glyphs, PieceSet, Solution};
use tessel_search::Solver;

use crate::puzzle::Puzzle;

#[derive(Parser)]
#[command(name = "tessel")]
#[command(about = "Enumerate every tiling of a rectangular board by polyomino pieces")]
struct Cli {
    /// Puzzle file: a `W H` header followed by piece blocks
    puzzle: PathBuf,

    /// Render each tiling as a letter grid
    #[arg(short, long)]
    print: bool,

    /// Emit the full result as JSON
    #[arg(short, long)]
    json: bool,

    /// Character standing for an empty cell in silhouettes
    #[arg(long, default_value_t = '0')]
    zero: char,

    /// Character standing for a filled cell in silhouettes
    #[arg(long, default_value_t = '1')]
    one: char,
}

#[derive(Serialize)]
struct Report<'a> {
    width: usize,
    height: usize,
    piece_types: usize,
    total_pieces: usize,
    solution_count: usize,
    solutions: &'a [Solution],
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let text = std::fs::read_to_string(&cli.puzzle)?;
    let puzzle = Puzzle::parse(&text)?;
    let glyphs = Glyphs::new(cli.zero, cli.one);

    let set = PieceSet::build(&puzzle.inputs(), glyphs)?;
    let board_cells = puzzle.width * puzzle.height;
    if set.total_area() != board_cells {
        eprintln!(
            "note: pieces cover {} cells, the board has {board_cells}; tilings will leave gaps",
            set.total_area()
        );
    }

    let mut solver = Solver::new(set.clone(), puzzle.width, puzzle.height);
    let solutions = solver.solve();

    if cli.json {
        let report = Report {
            width: puzzle.width,
            height: puzzle.height,
            piece_types: set.types().len(),
            total_pieces: set.total_pieces(),
            solution_count: solutions.len(),
            solutions: &solutions,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match solutions.len() {
        1 => println!("1 solution"),
        n => println!("{n} solutions"),
    }
    if cli.print {
        for solution in &solutions {
            println!();
            println!("{}", render(&set, solution, puzzle.width, puzzle.height));
        }
    }
    Ok(())
}

/// Replay a solution onto a letter grid, one letter per placed piece.
fn render(set: &PieceSet, solution: &Solution, width: usize, height: usize) -> String {
    let mut grid = vec!['.'; width * height];
    for (index, p) in solution.placements().iter().enumerate() {
        let store = set.types()[p.type_index].rotation(p.rotation).store();
        let letter = (b'a' + (index % 26) as u8) as char;
        for (x, y, bit) in store.bit_reader() {
            if bit {
                grid[(p.y + y) * width + p.x + x] = letter;
            }
        }
    }
    let mut out = String::with_capacity(height * (width + 1));
    for y in 0..height {
        if y > 0 {
            out.push('\n');
        }
        out.extend(&grid[y * width..(y + 1) * width]);
    }
    out
}
