//! Mapping from slots to words.

use crate::{Crossword, VariableId, WordId};

/// A partial or complete mapping from slots to words.
///
/// Bindings are stored densely by [`VariableId`], so assigning and undoing a
/// binding is constant time. Search code pushes a trial binding with
/// [`assign`](Self::assign) and pops it with [`unassign`](Self::unassign)
/// when the branch fails.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Assignment, VariableId, WordId};
///
/// let mut assignment = Assignment::new(2);
/// assignment.assign(VariableId::new(1), WordId::new(0));
/// assert_eq!(assignment.len(), 1);
/// assert!(!assignment.is_complete());
///
/// assignment.assign(VariableId::new(0), WordId::new(3));
/// assert!(assignment.is_complete());
///
/// assignment.unassign(VariableId::new(0));
/// assert_eq!(assignment.get(VariableId::new(0)), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Assignment {
    values: Vec<Option<WordId>>,
    assigned: usize,
}

impl Assignment {
    /// Creates an empty assignment for `num_variables` slots.
    #[must_use]
    pub fn new(num_variables: usize) -> Self {
        Self {
            values: vec![None; num_variables],
            assigned: 0,
        }
    }

    /// Creates an empty assignment sized for a crossword.
    #[must_use]
    pub fn for_crossword(crossword: &Crossword) -> Self {
        Self::new(crossword.num_variables())
    }

    /// Returns the number of slots this assignment covers, bound or not.
    #[must_use]
    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    /// Returns the number of bound slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assigned
    }

    /// Returns `true` if no slot is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned == 0
    }

    /// Returns `true` if every slot is bound.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.assigned == self.values.len()
    }

    /// Returns the word bound to `var`.
    #[must_use]
    pub fn get(&self, var: VariableId) -> Option<WordId> {
        self.values[var.index()]
    }

    /// Returns `true` if `var` is bound.
    #[must_use]
    pub fn contains(&self, var: VariableId) -> bool {
        self.values[var.index()].is_some()
    }

    /// Binds `var` to `word`, returning the previous binding.
    pub fn assign(&mut self, var: VariableId, word: WordId) -> Option<WordId> {
        let previous = self.values[var.index()].replace(word);
        if previous.is_none() {
            self.assigned += 1;
        }
        previous
    }

    /// Removes the binding of `var`, returning it.
    pub fn unassign(&mut self, var: VariableId) -> Option<WordId> {
        let previous = self.values[var.index()].take();
        if previous.is_some() {
            self.assigned -= 1;
        }
        previous
    }

    /// Returns the bound slots with their words, in ascending slot order.
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, WordId)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, word)| word.map(|word| (VariableId::new(i), word)))
    }
}
