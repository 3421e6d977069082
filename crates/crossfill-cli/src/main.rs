//! Command-line crossword filler.
//!
//! Reads a grid structure and a word list, fills the grid and prints it.
//!
//! # Usage
//!
//! ```sh
//! crossfill data/structure0.txt data/words0.txt
//! ```
//!
//! Write the filled grid to a file as well, maintaining arc consistency during
//! search. An `OUTPUT` ending in `.png` receives an image of the grid, any
//! other path the text rendering:
//!
//! ```sh
//! crossfill data/structure1.txt data/words1.txt out.png --inference mac
//! ```
//!
//! Set `RUST_LOG=debug` to see what preprocessing removed, or
//! `RUST_LOG=trace` to follow the search.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use crossfill_core::{Crossword, CrosswordError, LetterGrid};
use crossfill_solver::{BacktrackSolver, Inference, SolverOptions, SolverStats};
use image::ImageFormat;

mod png;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum InferenceKind {
    /// Plain backtracking.
    #[default]
    None,
    /// Re-run arc consistency after every trial binding.
    Mac,
}

impl From<InferenceKind> for Inference {
    fn from(kind: InferenceKind) -> Self {
        match kind {
            InferenceKind::None => Self::None,
            InferenceKind::Mac => Self::MaintainArcConsistency,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid structure: one line per row, `_` for open cells.
    #[arg(value_name = "STRUCTURE")]
    structure: PathBuf,

    /// Word list: one word per line.
    #[arg(value_name = "WORDS")]
    words: PathBuf,

    /// File to write the filled grid to; `.png` files get an image.
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Propagation performed during search.
    #[arg(long, value_name = "KIND", default_value = "none")]
    inference: InferenceKind,

    /// Search the first slot's candidates in parallel.
    #[arg(long)]
    parallel: bool,

    /// Print solver statistics.
    #[arg(long, conflicts_with = "parallel")]
    stats: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[display("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: io::Error,
    },
    #[display("failed to write image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
    #[display("failed to write to standard output: {_0}")]
    #[from]
    Stdout(io::Error),
    #[display("invalid puzzle: {_0}")]
    #[from]
    Crossword(CrosswordError),
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let structure = read(&args.structure)?;
    let words = read(&args.words)?;
    let crossword = Crossword::parse(&structure, &words)?;
    log::debug!(
        "{}x{} grid with {} slots and {} words",
        crossword.width(),
        crossword.height(),
        crossword.num_variables(),
        crossword.words().len()
    );

    let options = SolverOptions {
        inference: args.inference.into(),
    };
    let mut solver = BacktrackSolver::new(&crossword).with_options(options);
    let solution = if args.parallel {
        solver.solve_parallel()
    } else {
        let (solution, stats) = solver.solve();
        if args.stats {
            print_stats(out, &stats)?;
        }
        solution
    };

    let Some(solution) = solution else {
        writeln!(out, "No solution.")?;
        return Ok(());
    };
    let grid = crossword.letter_grid(&solution);
    write!(out, "{grid}")?;
    if let Some(output) = &args.output {
        save(output, &grid)?;
        log::info!("wrote {}", output.display());
    }
    Ok(())
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

fn save(path: &Path, grid: &LetterGrid) -> Result<(), CliError> {
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("png")) {
        png::render(grid)
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| CliError::Image {
                path: path.to_owned(),
                source,
            })
    } else {
        fs::write(path, grid.to_string()).map_err(|source| CliError::Write {
            path: path.to_owned(),
            source,
        })
    }
}

fn print_stats(out: &mut impl Write, stats: &SolverStats) -> io::Result<()> {
    writeln!(out, "Stats:")?;
    writeln!(out, "  pruned: {}", stats.pruned())?;
    writeln!(out, "  revisions: {}", stats.revisions())?;
    writeln!(out, "  nodes: {}", stats.nodes())?;
    writeln!(out, "  backtracks: {}", stats.backtracks())?;
    writeln!(out, "  wipeouts: {}", stats.wipeouts())
}
