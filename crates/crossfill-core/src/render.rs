//! Text rendering of a filled grid.

use std::fmt;

use crate::{Assignment, Crossword};

/// Character printed for blocked cells.
pub const BLOCKED: char = '█';

/// The letters an assignment places in the grid.
///
/// `Display` prints one line per row: the letter of a filled cell, a space for
/// an open cell no word covers, and [`BLOCKED`] for a blocked cell.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Assignment, Crossword};
///
/// let crossword = Crossword::parse("___\n_##", "CAT\nCO")?;
/// let mut assignment = Assignment::for_crossword(&crossword);
/// let ids: Vec<_> = crossword.variable_ids().collect();
/// assignment.assign(ids[0], crossword.words().find("CAT").unwrap());
///
/// let grid = crossword.letter_grid(&assignment);
/// assert_eq!(grid.get(0, 2), Some('T'));
/// assert_eq!(grid.to_string(), "CAT\n ██\n");
/// # Ok::<(), crossfill_core::CrosswordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    width: usize,
    height: usize,
    open: Vec<bool>,
    letters: Vec<Option<char>>,
}

impl LetterGrid {
    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the cell exists and takes a letter.
    #[must_use]
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.open[row * self.width + col]
    }

    /// Returns the letter at a cell, if one was placed there.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.height && col < self.width {
            self.letters[row * self.width + col]
        } else {
            None
        }
    }
}

impl fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let i = row * self.width + col;
                let c = if self.open[i] {
                    self.letters[i].unwrap_or(' ')
                } else {
                    BLOCKED
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Crossword {
    /// Lays the words of an assignment out on the grid.
    ///
    /// Where two slots disagree on a cell, the slot with the higher
    /// [`VariableId`](crate::VariableId) wins.
    #[must_use]
    pub fn letter_grid(&self, assignment: &Assignment) -> LetterGrid {
        let (width, height) = (self.width(), self.height());
        let structure = self.structure();
        let open = (0..height)
            .flat_map(|row| (0..width).map(move |col| structure.is_open(row, col)))
            .collect();
        let mut letters = vec![None; width * height];
        for (var, word) in assignment.iter() {
            let variable = self.variable(var);
            for ((row, col), letter) in variable.cells().zip(self.word(word).letters()) {
                letters[row * width + col] = Some(*letter);
            }
        }
        LetterGrid {
            width,
            height,
            open,
            letters,
        }
    }
}
