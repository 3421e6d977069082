//! Grid structure: which cells take letters.

use std::{fmt, str::FromStr};

use crate::{CrosswordError, Direction, Variable};

/// The shape of a crossword grid.
///
/// Each cell is either open (receives a letter) or blocked.
///
/// # Text format
///
/// One line per row. `_` marks an open cell and any other character a blocked
/// cell. Rows shorter than the widest row are padded with blocked cells.
///
/// # Examples
///
/// ```
/// use crossfill_core::Structure;
///
/// let structure: Structure = "#___#\n#_##_\n#_##_".parse()?;
/// assert_eq!((structure.width(), structure.height()), (5, 3));
/// assert!(structure.is_open(0, 1));
/// assert!(!structure.is_open(0, 0));
/// assert!(!structure.is_open(9, 9));
/// # Ok::<(), crossfill_core::CrosswordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Structure {
    /// Creates a structure from row-major cell flags (`true` = open).
    ///
    /// # Errors
    ///
    /// Returns [`CrosswordError::CellCountMismatch`] if `cells` does not hold
    /// exactly `width * height` entries.
    pub fn new(width: usize, height: usize, cells: Vec<bool>) -> Result<Self, CrosswordError> {
        let expected = width * height;
        if cells.len() != expected {
            return Err(CrosswordError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

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
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }

    /// Enumerates every slot of the grid.
    ///
    /// A slot is a maximal horizontal or vertical run of at least two open
    /// cells. Slots are returned row-major, with the across slot first when
    /// two slots start in the same cell.
    #[must_use]
    pub fn variables(&self) -> Vec<Variable> {
        let mut variables = vec![];
        for row in 0..self.height {
            for col in 0..self.width {
                if !self.is_open(row, col) {
                    continue;
                }
                if col == 0 || !self.is_open(row, col - 1) {
                    let length = (col..self.width)
                        .take_while(|&c| self.is_open(row, c))
                        .count();
                    if length > 1 {
                        variables.push(Variable::new(row, col, Direction::Across, length));
                    }
                }
                if row == 0 || !self.is_open(row - 1, col) {
                    let length = (row..self.height)
                        .take_while(|&r| self.is_open(r, col))
                        .count();
                    if length > 1 {
                        variables.push(Variable::new(row, col, Direction::Down, length));
                    }
                }
            }
        }
        variables
    }
}

impl FromStr for Structure {
    type Err = CrosswordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s.lines().map(|line| line.chars().collect::<Vec<_>>()).collect::<Vec<_>>();
        if rows.is_empty() {
            return Err(CrosswordError::EmptyStructure);
        }
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let cells = rows
            .iter()
            .flat_map(|row| (0..width).map(move |col| row.get(col) == Some(&'_')))
            .collect();
        Self::new(width, height, cells)
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let c = if self.is_open(row, col) { '_' } else { '#' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pads_short_rows() {
        let structure: Structure = "___\n_\n".parse().unwrap();
        assert_eq!(structure.width(), 3);
        assert_eq!(structure.height(), 2);
        assert!(structure.is_open(1, 0));
        assert!(!structure.is_open(1, 1));
        assert!(!structure.is_open(1, 2));
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert_eq!("".parse::<Structure>(), Err(CrosswordError::EmptyStructure));
    }

    #[test]
    fn test_new_checks_cell_count() {
        assert_eq!(
            Structure::new(2, 2, vec![true; 3]),
            Err(CrosswordError::CellCountMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_display_round_trips_shape() {
        let text = "#___#\n#_##_\n";
        let structure: Structure = text.parse().unwrap();
        assert_eq!(structure.to_string(), text);
    }

    #[test]
    fn test_variables() {
        let structure: Structure = "\
#___#
#_##_
#_##_
#_##_
#____"
            .parse()
            .unwrap();
        assert_eq!(
            structure.variables(),
            [
                Variable::new(0, 1, Direction::Across, 3),
                Variable::new(0, 1, Direction::Down, 5),
                Variable::new(1, 4, Direction::Down, 4),
                Variable::new(4, 1, Direction::Across, 4),
            ]
        );
    }

    #[test]
    fn test_single_cells_are_not_slots() {
        let structure: Structure = "_#_\n###\n_#_".parse().unwrap();
        assert!(structure.variables().is_empty());
    }
}
