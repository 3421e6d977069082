//! Crossword slots and the overlaps between them.

/// The direction a slot is read in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum Direction {
    /// Left to right along a row.
    #[display("across")]
    Across,
    /// Top to bottom along a column.
    #[display("down")]
    Down,
}

/// A slot in the grid that receives one word.
///
/// A variable is identified purely by its geometry: two variables with the
/// same start cell, direction and length are the same slot. The derived
/// ordering is row-major, with across slots before down slots that start in
/// the same cell.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Direction, Variable};
///
/// let var = Variable::new(1, 2, Direction::Down, 3);
/// let cells: Vec<_> = var.cells().collect();
/// assert_eq!(cells, [(1, 2), (2, 2), (3, 2)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("({row}, {col}) {direction} : {length}")]
pub struct Variable {
    row: usize,
    col: usize,
    direction: Direction,
    length: usize,
}

impl Variable {
    /// Creates a slot starting at `(row, col)`.
    #[must_use]
    pub const fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    /// Returns the row of the first cell.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of the first cell.
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Returns the reading direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the number of letters the slot holds.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns the `(row, col)` of the `k`-th letter.
    ///
    /// `k` is not checked against [`length`](Self::length).
    #[must_use]
    pub const fn cell(&self, k: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.row, self.col + k),
            Direction::Down => (self.row + k, self.col),
        }
    }

    /// Returns an iterator over the cells of the slot, first letter first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(|k| self.cell(k))
    }

    /// Returns the index of `cell` within this slot, if the slot covers it.
    #[must_use]
    pub fn index_of(&self, (row, col): (usize, usize)) -> Option<usize> {
        let k = match self.direction {
            Direction::Across if row == self.row && col >= self.col => col - self.col,
            Direction::Down if col == self.col && row >= self.row => row - self.row,
            _ => return None,
        };
        (k < self.length).then_some(k)
    }
}

/// A handle to a variable within a [`Crossword`](crate::Crossword).
///
/// Variables are enumerated once when the crossword is built, so solvers can
/// key their state by a dense index instead of hashing [`Variable`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("v{_0}")]
pub struct VariableId(usize);

impl VariableId {
    /// Creates a handle from a raw index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// The letter positions at which two crossing slots must agree.
///
/// For an ordered pair `(x, y)`, `x` is the index into the word placed in
/// `x` and `y` is the index into the word placed in `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Overlap {
    /// Letter index within the first slot's word.
    pub x: usize,
    /// Letter index within the second slot's word.
    pub y: usize,
}

impl Overlap {
    /// Creates an overlap.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the same overlap seen from the other slot.
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }
}
