//! Test utilities for the solver.
//!
//! [`SolverTester`] drives propagation and search on a small puzzle with
//! fluent assertions. [`brute_force_solutions`] enumerates every solution
//! without any of the solver's machinery and serves as the reference the
//! solver is checked against.

use std::collections::HashSet;

use crossfill_core::{
    Assignment, Crossword, Direction, Structure, Variable, VariableId, WordId, WordList,
};

use crate::{
    BacktrackSolver, ConstraintArc, Domains, Propagation, SolverOptions, SolverStats, ac3,
    consistency,
};

/// A test harness for propagation and search.
///
/// All methods return `self`, enabling fluent method chaining. Assertion
/// methods panic with `#[track_caller]` so failures point at the test.
#[derive(Debug)]
pub struct SolverTester {
    crossword: Crossword,
    domains: Domains,
    options: SolverOptions,
    solution: Option<Option<Assignment>>,
    stats: SolverStats,
}

impl SolverTester {
    /// Creates a tester where every slot starts with the whole lexicon.
    pub fn new(crossword: Crossword) -> Self {
        let domains = Domains::new(&crossword);
        Self {
            crossword,
            domains,
            options: SolverOptions::default(),
            solution: None,
            stats: SolverStats::default(),
        }
    }

    /// Creates a tester from a structure string and a word list.
    ///
    /// Words keep their case.
    ///
    /// # Panics
    ///
    /// Panics if the structure cannot be parsed.
    #[track_caller]
    pub fn parse(structure: &str, words: &[&str]) -> Self {
        let structure = structure.parse::<Structure>().unwrap();
        Self::new(Crossword::new(structure, WordList::new(words)))
    }

    /// Replaces the options used by [`solve`](Self::solve).
    pub fn with_options(mut self, options: SolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn crossword(&self) -> &Crossword {
        &self.crossword
    }

    /// Returns the statistics of the last [`solve`](Self::solve).
    pub fn stats(&self) -> SolverStats {
        self.stats
    }

    /// Returns the id of the slot starting at `(row, col)` in `direction`.
    ///
    /// # Panics
    ///
    /// Panics if there is no such slot.
    #[track_caller]
    pub fn var(&self, row: usize, col: usize, direction: Direction) -> VariableId {
        self.crossword
            .variables()
            .iter()
            .position(|v| v.row() == row && v.col() == col && v.direction() == direction)
            .map(VariableId::new)
            .unwrap_or_else(|| panic!("no {direction} slot at ({row}, {col})"))
    }

    #[track_caller]
    fn word(&self, text: &str) -> WordId {
        self.crossword
            .words()
            .find(text)
            .unwrap_or_else(|| panic!("{text:?} is not in the word list"))
    }

    /// Intersects the domain of `var` with the given words.
    #[track_caller]
    pub fn restrict(mut self, var: VariableId, words: &[&str]) -> Self {
        let ids = words.iter().map(|w| self.word(w)).collect::<Vec<_>>();
        self.domains.restrict(var, ids);
        self
    }

    pub fn enforce_node_consistency(mut self) -> Self {
        consistency::enforce_node_consistency(&self.crossword, &mut self.domains);
        self
    }

    /// Runs AC-3 and asserts that no domain was wiped out.
    #[track_caller]
    pub fn ac3_consistent(mut self) -> Self {
        let propagation = ac3::ac3(&self.crossword, &mut self.domains);
        assert!(
            propagation.is_consistent(),
            "expected arc consistency, got {propagation:?}"
        );
        assert_arc_consistent(&self.crossword, &self.domains);
        self
    }

    /// Runs AC-3 and asserts that the domain of `var` was wiped out.
    #[track_caller]
    pub fn ac3_wipeout(mut self, var: VariableId) -> Self {
        let propagation = ac3::ac3(&self.crossword, &mut self.domains);
        assert_eq!(propagation, Propagation::Wipeout { var });
        self
    }

    /// Asserts that the domain of `var` holds exactly the given words.
    #[track_caller]
    pub fn assert_domain(self, var: VariableId, words: &[&str]) -> Self {
        let actual = self
            .domains
            .get(var)
            .iter()
            .map(|&w| self.crossword.word(w).as_str())
            .collect::<HashSet<_>>();
        let expected = words.iter().copied().collect::<HashSet<_>>();
        assert_eq!(actual, expected, "domain of {var}");
        self
    }

    /// Solves from the current domains, checking any solution found.
    #[track_caller]
    pub fn solve(mut self) -> Self {
        let mut stats = SolverStats::default();
        let solution = BacktrackSolver::with_domains(&self.crossword, self.domains.clone())
            .with_options(self.options)
            .solve_with_stats(&mut stats);
        if let Some(solution) = &solution {
            assert_valid_solution(&self.crossword, solution);
        }
        self.solution = Some(solution);
        self.stats = stats;
        self
    }

    #[track_caller]
    fn solved(&self) -> Option<&Assignment> {
        self.solution
            .as_ref()
            .expect("solve() must be called before asserting on the result")
            .as_ref()
    }

    /// Asserts that a solution was found.
    #[track_caller]
    pub fn assert_solvable(self) -> Self {
        assert!(self.solved().is_some(), "expected a solution");
        self
    }

    /// Asserts that the solution binds exactly the given slots to the given
    /// words.
    #[track_caller]
    pub fn assert_solution(self, expected: &[(VariableId, &str)]) -> Self {
        let solution = self.solved().expect("expected a solution");
        let actual = solution
            .iter()
            .map(|(var, word)| (var, self.crossword.word(word).as_str()))
            .collect::<HashSet<_>>();
        let expected = expected.iter().copied().collect::<HashSet<_>>();
        assert_eq!(actual, expected);
        self
    }

    /// Asserts that no solution was found.
    #[track_caller]
    pub fn assert_unsolvable(self) -> Self {
        if let Some(solution) = self.solved() {
            panic!(
                "expected no solution, got\n{}",
                self.crossword.letter_grid(solution)
            );
        }
        self
    }
}

/// Asserts that every arc of the crossword is consistent under `domains`.
#[track_caller]
pub fn assert_arc_consistent(crossword: &Crossword, domains: &Domains) {
    for ConstraintArc { x, y } in ConstraintArc::all(crossword) {
        let Some(overlap) = crossword.overlap(x, y) else {
            panic!("{x} and {y} are neighbors without an overlap");
        };
        for &w in domains.get(x) {
            let letter = crossword.word(w).letter(overlap.x);
            assert!(
                domains
                    .get(y)
                    .iter()
                    .any(|&v| crossword.word(v).letter(overlap.y) == letter),
                "{} in {x} has no support in {y}",
                crossword.word(w)
            );
        }
    }
}

/// Asserts that `solution` is a complete assignment satisfying every
/// constraint.
#[track_caller]
pub fn assert_valid_solution(crossword: &Crossword, solution: &Assignment) {
    assert_eq!(solution.num_variables(), crossword.num_variables());
    assert!(solution.is_complete(), "solution is incomplete");

    let mut used = HashSet::new();
    for (var, word) in solution.iter() {
        let variable: Variable = crossword.variable(var);
        let text = crossword.word(word);
        assert_eq!(text.len(), variable.length(), "{text} does not fit {variable}");
        assert!(used.insert(word), "{text} is used twice");
    }
    for (x, x_word) in solution.iter() {
        for (y, y_word) in solution.iter() {
            if let Some(overlap) = crossword.overlap(x, y) {
                assert_eq!(
                    crossword.word(x_word).letter(overlap.x),
                    crossword.word(y_word).letter(overlap.y),
                    "{x} and {y} disagree"
                );
            }
        }
    }
}

/// Enumerates every solution whose words are drawn from `domains`.
///
/// Slots are filled in id order and candidates in domain order; a partial
/// assignment is extended only while it satisfies every constraint among its
/// bound slots.
pub fn brute_force_solutions(crossword: &Crossword, domains: &Domains) -> Vec<Assignment> {
    fn fill(
        crossword: &Crossword,
        domains: &Domains,
        assignment: &mut Assignment,
        next: usize,
        solutions: &mut Vec<Assignment>,
    ) {
        if next == crossword.num_variables() {
            solutions.push(assignment.clone());
            return;
        }
        let var = VariableId::new(next);
        for &word in domains.get(var) {
            let text = crossword.word(word);
            if text.len() != crossword.variable(var).length() {
                continue;
            }
            let fits = assignment.iter().all(|(other, other_word)| {
                other_word != word
                    && crossword.overlap(var, other).is_none_or(|overlap| {
                        text.letter(overlap.x) == crossword.word(other_word).letter(overlap.y)
                    })
            });
            if fits {
                assignment.assign(var, word);
                fill(crossword, domains, assignment, next + 1, solutions);
                assignment.unassign(var);
            }
        }
    }

    let mut solutions = Vec::new();
    let mut assignment = Assignment::for_crossword(crossword);
    fill(crossword, domains, &mut assignment, 0, &mut solutions);
    solutions
}
