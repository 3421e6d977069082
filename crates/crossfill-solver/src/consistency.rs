//! Unary and binary consistency checks.
//!
//! These are the building blocks of propagation and search:
//!
//! - [`enforce_node_consistency`] applies each slot's length constraint;
//! - [`revise`] makes one slot arc consistent with one neighbor;
//! - [`is_consistent`], [`find_conflict`] and [`value_is_consistent`] check
//!   assignments against every constraint of the puzzle.

use std::collections::HashSet;

use crossfill_core::{Assignment, Crossword, VariableId, WordId};

use crate::Domains;

/// Removes every candidate whose length differs from its slot's length.
///
/// Returns the number of candidates removed. Calling it again removes
/// nothing.
pub fn enforce_node_consistency(crossword: &Crossword, domains: &mut Domains) -> usize {
    let before = domains.total_len();
    for var in crossword.variable_ids() {
        let length = crossword.variable(var).length();
        domains.retain(var, |word| crossword.word(word).len() == length);
    }
    before - domains.total_len()
}

/// Makes `x` arc consistent with `y`.
///
/// Removes every candidate of `x` whose letter at the overlap matches no
/// candidate of `y` at the corresponding position, judged against the
/// current domain of `y`. Does nothing if the slots do not cross.
///
/// Returns `true` if a candidate was removed.
pub fn revise(crossword: &Crossword, domains: &mut Domains, x: VariableId, y: VariableId) -> bool {
    let Some(overlap) = crossword.overlap(x, y) else {
        return false;
    };
    let supported = domains
        .get(y)
        .iter()
        .filter_map(|&word| crossword.word(word).letter(overlap.y))
        .collect::<HashSet<_>>();
    domains.retain(x, |word| {
        crossword
            .word(word)
            .letter(overlap.x)
            .is_some_and(|letter| supported.contains(&letter))
    })
}

/// A violated constraint in an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Conflict {
    /// The word bound to a slot has the wrong number of letters.
    #[display("word bound to {var} has the wrong length")]
    Length {
        /// The slot.
        var: VariableId,
    },
    /// Two slots are bound to the same word.
    #[display("{first} and {second} are bound to the same word")]
    DuplicateWord {
        /// The lower slot.
        first: VariableId,
        /// The higher slot.
        second: VariableId,
    },
    /// Two crossing slots disagree on their shared letter.
    #[display("{first} and {second} disagree on their shared letter")]
    Mismatch {
        /// The lower slot.
        first: VariableId,
        /// The higher slot.
        second: VariableId,
    },
}

/// Returns the first constraint the assignment violates, if any.
///
/// Slots are checked in ascending order; for each slot its length, then
/// every higher bound slot for duplicate words and letter agreement.
#[must_use]
pub fn find_conflict(crossword: &Crossword, assignment: &Assignment) -> Option<Conflict> {
    let bound = assignment.iter().collect::<Vec<_>>();
    for (i, &(first, first_word)) in bound.iter().enumerate() {
        if crossword.word(first_word).len() != crossword.variable(first).length() {
            return Some(Conflict::Length { var: first });
        }
        for &(second, second_word) in &bound[i + 1..] {
            if first_word == second_word {
                return Some(Conflict::DuplicateWord { first, second });
            }
            if !letters_agree(crossword, first, first_word, second, second_word) {
                return Some(Conflict::Mismatch { first, second });
            }
        }
    }
    None
}

/// Returns `true` if the assignment satisfies every constraint.
///
/// Every bound word has its slot's length, no word is used twice, and every
/// pair of bound crossing slots agrees on the shared letter.
#[must_use]
pub fn is_consistent(crossword: &Crossword, assignment: &Assignment) -> bool {
    find_conflict(crossword, assignment).is_none()
}

/// Returns `true` if binding `var` to `word` keeps a consistent assignment
/// consistent.
///
/// Only constraints involving `var` are checked, so for a consistent
/// `assignment` in which `var` is unbound this equals checking the extended
/// assignment with [`is_consistent`].
#[must_use]
pub fn value_is_consistent(
    crossword: &Crossword,
    assignment: &Assignment,
    var: VariableId,
    word: WordId,
) -> bool {
    if crossword.word(word).len() != crossword.variable(var).length() {
        return false;
    }
    assignment.iter().all(|(other, other_word)| {
        other == var
            || (other_word != word && letters_agree(crossword, var, word, other, other_word))
    })
}

fn letters_agree(
    crossword: &Crossword,
    x: VariableId,
    x_word: WordId,
    y: VariableId,
    y_word: WordId,
) -> bool {
    crossword.overlap(x, y).is_none_or(|overlap| {
        crossword.word(x_word).letter(overlap.x) == crossword.word(y_word).letter(overlap.y)
    })
}
