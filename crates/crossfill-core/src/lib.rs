//! Core data structures for crossword filling.
//!
//! This crate describes a crossword puzzle as a read-only constraint graph that
//! solvers consume. It is organized around a few concepts:
//!
//! 1. **Grid geometry**
//!    - [`structure`]: open and blocked cells of the grid
//!    - [`variable`]: slots ([`Variable`]), their direction and the
//!      [`Overlap`] between two crossing slots
//!
//! 2. **Lexicon**
//!    - [`word`]: the deduplicated, ordered word list and [`WordId`] handles
//!
//! 3. **Puzzle description**
//!    - [`crossword`]: [`Crossword`] ties the grid, the slots, the lexicon and
//!      the overlap table together; slots are referenced by [`VariableId`]
//!
//! 4. **Results**
//!    - [`assignment`]: a partial or complete mapping from slots to words
//!    - [`render`]: turning an assignment into a printable [`LetterGrid`]
//!
//! # Examples
//!
//! ```
//! use crossfill_core::{Assignment, Crossword};
//!
//! let crossword = Crossword::parse("___\n_##\n_##\n", "CAT\nCOW\n")?;
//! assert_eq!(crossword.num_variables(), 2);
//!
//! let mut assignment = Assignment::for_crossword(&crossword);
//! let across = crossword.variable_ids().next().unwrap();
//! assignment.assign(across, crossword.words().find("CAT").unwrap());
//! assert!(!assignment.is_complete());
//! # Ok::<(), crossfill_core::CrosswordError>(())
//! ```

pub mod assignment;
pub mod crossword;
pub mod error;
pub mod render;
pub mod structure;
pub mod variable;
pub mod word;

// Re-export commonly used types
pub use self::{
    assignment::Assignment,
    crossword::Crossword,
    error::CrosswordError,
    render::LetterGrid,
    structure::Structure,
    variable::{Direction, Overlap, Variable, VariableId},
    word::{Word, WordId, WordList},
};
