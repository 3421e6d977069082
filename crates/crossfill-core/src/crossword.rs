//! The read-only puzzle description consumed by solvers.

use std::collections::HashSet;

use crate::{CrosswordError, Overlap, Structure, Variable, VariableId, Word, WordId, WordList};

/// A crossword puzzle described as a constraint graph.
///
/// A `Crossword` owns the grid [`Structure`], the slots ([`Variable`]s), the
/// shared lexicon and the overlap table between slots. Slots are enumerated
/// once and referenced by [`VariableId`]; every per-slot query is an index
/// lookup.
///
/// The description never changes after construction. Solvers keep their own
/// mutable state (domains, assignments) keyed by [`VariableId`].
///
/// # Examples
///
/// ```
/// use crossfill_core::{Crossword, Overlap};
///
/// let crossword = Crossword::parse("___\n_##\n_##\n", "cat\ncow\n")?;
/// let [across, down] = [0, 1].map(|i| crossword.variable_ids().nth(i).unwrap());
///
/// assert_eq!(crossword.overlap(across, down), Some(Overlap::new(0, 0)));
/// assert_eq!(crossword.neighbors(across), [down]);
/// assert_eq!(crossword.words().len(), 2);
/// # Ok::<(), crossfill_core::CrosswordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossword {
    structure: Structure,
    variables: Vec<Variable>,
    words: WordList,
    /// Dense `n * n` table indexed by `(x, y)`.
    overlaps: Vec<Option<Overlap>>,
    neighbors: Vec<Vec<VariableId>>,
}

impl Crossword {
    /// Builds a crossword whose slots and overlaps are derived from the grid.
    ///
    /// See [`Structure::variables`] for how slots are found.
    #[must_use]
    pub fn new(structure: Structure, words: WordList) -> Self {
        let variables = structure.variables();
        let overlaps = geometric_overlaps(&variables);
        Self::from_table(structure, variables, words, overlaps)
    }

    /// Parses a structure file and a word file.
    ///
    /// See [`Structure`] and [`WordList`] for the formats.
    ///
    /// # Errors
    ///
    /// Returns [`CrosswordError::EmptyStructure`] if the structure has no rows.
    pub fn parse(structure: &str, words: &str) -> Result<Self, CrosswordError> {
        let structure = structure.parse()?;
        let words = match words.parse() {
            Ok(words) => words,
            Err(never) => match never {},
        };
        Ok(Self::new(structure, words))
    }

    /// Builds a crossword from explicitly listed slots.
    ///
    /// Overlaps are derived from the cells the slots share.
    ///
    /// # Errors
    ///
    /// Returns an error if a slot leaves the grid, covers a blocked cell, is
    /// listed twice, or shares more than one cell with another slot.
    pub fn with_variables(
        structure: Structure,
        variables: Vec<Variable>,
        words: WordList,
    ) -> Result<Self, CrosswordError> {
        validate_variables(&structure, &variables)?;
        for (i, first) in variables.iter().enumerate() {
            let cells = first.cells().collect::<HashSet<_>>();
            for second in &variables[i + 1..] {
                if second.cells().filter(|cell| cells.contains(cell)).count() > 1 {
                    return Err(CrosswordError::SharedCells {
                        first: *first,
                        second: *second,
                    });
                }
            }
        }
        let overlaps = geometric_overlaps(&variables);
        Ok(Self::from_table(structure, variables, words, overlaps))
    }

    /// Builds a crossword from slots and an explicit overlap table.
    ///
    /// Each entry `(x, y, overlap)` constrains letter `overlap.x` of `x` to
    /// equal letter `overlap.y` of `y`; the reverse pair is filled in
    /// automatically. Geometry is only used for rendering, so this accepts
    /// constraint graphs a grid cannot express. A later entry for the same
    /// pair replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns an error if a slot leaves the grid, covers a blocked cell or is
    /// listed twice, or if an entry names an unknown variable, relates a
    /// variable to itself, or indexes past the end of a slot.
    pub fn from_overlaps<I>(
        structure: Structure,
        variables: Vec<Variable>,
        words: WordList,
        overlaps: I,
    ) -> Result<Self, CrosswordError>
    where
        I: IntoIterator<Item = (VariableId, VariableId, Overlap)>,
    {
        validate_variables(&structure, &variables)?;
        let n = variables.len();
        let mut table = vec![None; n * n];
        for (x, y, overlap) in overlaps {
            for id in [x, y] {
                if id.index() >= n {
                    return Err(CrosswordError::UnknownVariable { id });
                }
            }
            if x == y {
                return Err(CrosswordError::SelfOverlap { id: x });
            }
            if overlap.x >= variables[x.index()].length()
                || overlap.y >= variables[y.index()].length()
            {
                return Err(CrosswordError::OverlapOutOfRange {
                    first: x,
                    second: y,
                });
            }
            table[x.index() * n + y.index()] = Some(overlap);
            table[y.index() * n + x.index()] = Some(overlap.swapped());
        }
        Ok(Self::from_table(structure, variables, words, table))
    }

    fn from_table(
        structure: Structure,
        variables: Vec<Variable>,
        words: WordList,
        overlaps: Vec<Option<Overlap>>,
    ) -> Self {
        let n = variables.len();
        let neighbors = (0..n)
            .map(|x| {
                (0..n)
                    .filter(|&y| overlaps[x * n + y].is_some())
                    .map(VariableId::new)
                    .collect()
            })
            .collect();
        Self {
            structure,
            variables,
            words,
            overlaps,
            neighbors,
        }
    }

    /// Returns the grid structure.
    #[must_use]
    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Returns the grid width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.structure.width()
    }

    /// Returns the grid height.
    #[must_use]
    pub fn height(&self) -> usize {
        self.structure.height()
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Returns all slots, indexed by [`VariableId`].
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Returns the slot behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this crossword.
    #[must_use]
    pub fn variable(&self, id: VariableId) -> Variable {
        self.variables[id.index()]
    }

    /// Returns all slot handles in ascending order.
    pub fn variable_ids(&self) -> impl Iterator<Item = VariableId> + use<> {
        (0..self.variables.len()).map(VariableId::new)
    }

    /// Looks up the handle of a slot.
    #[must_use]
    pub fn find_variable(&self, variable: &Variable) -> Option<VariableId> {
        self.variables
            .iter()
            .position(|v| v == variable)
            .map(VariableId::new)
    }

    /// Returns the lexicon.
    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Returns the word behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this crossword's lexicon.
    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        self.words.get(id)
    }

    /// Returns the overlap between `x` and `y`, or `None` if they do not cross.
    #[must_use]
    pub fn overlap(&self, x: VariableId, y: VariableId) -> Option<Overlap> {
        self.overlaps[x.index() * self.variables.len() + y.index()]
    }

    /// Returns the slots crossing `x`, in ascending order.
    #[must_use]
    pub fn neighbors(&self, x: VariableId) -> &[VariableId] {
        &self.neighbors[x.index()]
    }

    /// Returns the number of slots crossing `x`.
    #[must_use]
    pub fn degree(&self, x: VariableId) -> usize {
        self.neighbors[x.index()].len()
    }
}

fn validate_variables(structure: &Structure, variables: &[Variable]) -> Result<(), CrosswordError> {
    let mut seen = HashSet::new();
    for variable in variables {
        if !seen.insert(*variable) {
            return Err(CrosswordError::DuplicateVariable {
                variable: *variable,
            });
        }
        if variable.length() == 0 {
            continue;
        }
        let (last_row, last_col) = variable.cell(variable.length() - 1);
        if last_row >= structure.height() || last_col >= structure.width() {
            return Err(CrosswordError::VariableOutOfBounds {
                variable: *variable,
                width: structure.width(),
                height: structure.height(),
            });
        }
        if let Some((row, col)) = variable.cells().find(|&(r, c)| !structure.is_open(r, c)) {
            return Err(CrosswordError::BlockedCell {
                variable: *variable,
                row,
                col,
            });
        }
    }
    Ok(())
}

fn geometric_overlaps(variables: &[Variable]) -> Vec<Option<Overlap>> {
    let n = variables.len();
    let mut table = vec![None; n * n];
    for (i, x) in variables.iter().enumerate() {
        for (j, y) in variables.iter().enumerate() {
            if i == j {
                continue;
            }
            table[i * n + j] = x
                .cells()
                .enumerate()
                .find_map(|(ix, cell)| y.index_of(cell).map(|iy| Overlap::new(ix, iy)));
        }
    }
    table
}
