//! Constraint propagation and backtracking search for crossword filling.
//!
//! A [`Crossword`](crossfill_core::Crossword) is solved by treating every slot
//! as a variable whose domain is a set of words:
//!
//! - [`Domains`] holds the candidates left for each slot;
//! - [`consistency`] applies the length constraint and revises single arcs;
//! - [`ac3`] propagates letter agreement across every crossing;
//! - [`BacktrackSolver`] searches the remaining space.
//!
//! # Examples
//!
//! ```
//! use crossfill_core::Crossword;
//! use crossfill_solver::{BacktrackSolver, Inference, SolverOptions};
//!
//! let crossword = Crossword::parse("___\n_#_\n___", "CAT\nCOW\nTEN\nWIN\nDOG")?;
//! let options = SolverOptions {
//!     inference: Inference::MaintainArcConsistency,
//! };
//! let mut solver = BacktrackSolver::new(&crossword).with_options(options);
//!
//! match solver.solve() {
//!     (Some(solution), _) => print!("{}", crossword.letter_grid(&solution)),
//!     (None, _) => println!("No solution."),
//! }
//! # Ok::<(), crossfill_core::CrosswordError>(())
//! ```

pub use self::{
    ac3::{ArcQueue, ConstraintArc, Propagation},
    backtrack_solver::*,
    domain::Domains,
    stats::SolverStats,
};

pub mod ac3;
mod backtrack_solver;
pub mod consistency;
mod domain;
mod stats;

#[cfg(test)]
mod testing;
