//! Errors raised while building a puzzle description.

use crate::{Variable, VariableId};

/// Errors produced while building a crossword description.
///
/// These reject geometry that cannot describe a real puzzle, so solvers can
/// assume every slot and overlap they see is well formed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CrosswordError {
    /// The structure text contained no rows.
    #[display("structure is empty")]
    EmptyStructure,
    /// The number of cell flags does not match the grid size.
    #[display("expected {expected} cells, got {actual}")]
    CellCountMismatch {
        /// `width * height`.
        expected: usize,
        /// Number of flags supplied.
        actual: usize,
    },
    /// A slot reaches past the edge of the grid.
    #[display("variable {variable} does not fit in a {width}x{height} grid")]
    VariableOutOfBounds {
        /// The offending slot.
        variable: Variable,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
    /// A slot covers a blocked cell.
    #[display("variable {variable} covers blocked cell ({row}, {col})")]
    BlockedCell {
        /// The offending slot.
        variable: Variable,
        /// Row of the blocked cell.
        row: usize,
        /// Column of the blocked cell.
        col: usize,
    },
    /// The same slot was listed twice.
    #[display("variable {variable} is listed more than once")]
    DuplicateVariable {
        /// The repeated slot.
        variable: Variable,
    },
    /// Two slots share more than one cell, which a single overlap cannot express.
    #[display("variables {first} and {second} share more than one cell")]
    SharedCells {
        /// One of the slots.
        first: Variable,
        /// The other slot.
        second: Variable,
    },
    /// An overlap names a variable that does not exist.
    #[display("overlap references unknown variable {id}")]
    UnknownVariable {
        /// The unknown handle.
        id: VariableId,
    },
    /// An overlap relates a variable to itself.
    #[display("variable {id} cannot overlap itself")]
    SelfOverlap {
        /// The variable.
        id: VariableId,
    },
    /// An overlap index lies outside a slot.
    #[display("overlap between {first} and {second} is out of range")]
    OverlapOutOfRange {
        /// First variable of the overlap.
        first: VariableId,
        /// Second variable of the overlap.
        second: VariableId,
    },
}
