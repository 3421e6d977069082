use std::cmp::Reverse;

use crossfill_core::{Assignment, Crossword, VariableId, WordId};
use rayon::prelude::*;

use crate::{ConstraintArc, Domains, Propagation, SolverStats, ac3, consistency};

/// How much propagation the search performs after each trial binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum Inference {
    /// Only check the extended assignment for consistency.
    #[default]
    None,
    /// Also re-run AC-3 from the bound slot on a copy of the branch's
    /// domains, rejecting the binding if any domain empties.
    MaintainArcConsistency,
}

/// Tuning knobs for [`BacktrackSolver`].
///
/// Options only affect how fast a solution is found, never whether one is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverOptions {
    /// Propagation performed during search.
    pub inference: Inference,
}

/// A solver that fills a crossword by constraint propagation and
/// backtracking search.
///
/// Solving runs in three stages:
///
/// 1. node consistency drops words of the wrong length;
/// 2. AC-3 prunes words that cannot cross any remaining neighbor word;
/// 3. depth-first search binds one slot at a time, choosing the slot with
///    the fewest candidates (ties: most neighbors, then lowest id) and trying
///    its words in least-constraining order.
///
/// The first complete, consistent assignment found is returned. A wiped-out
/// domain during preprocessing and an exhausted search both yield `None`.
///
/// # Examples
///
/// ```
/// use crossfill_core::Crossword;
/// use crossfill_solver::BacktrackSolver;
///
/// let crossword = Crossword::parse("___\n_#_\n___", "CAT\nCOW\nTEN\nWIN\nDOG")?;
/// let mut solver = BacktrackSolver::new(&crossword);
///
/// let (solution, stats) = solver.solve();
/// let solution = solution.expect("puzzle is solvable");
/// assert!(solution.is_complete());
/// println!("{}", crossword.letter_grid(&solution));
/// println!("search nodes: {}", stats.nodes());
/// # Ok::<(), crossfill_core::CrosswordError>(())
/// ```
///
/// # Step-by-step solving
///
/// ```
/// use crossfill_core::{Assignment, Crossword};
/// use crossfill_solver::BacktrackSolver;
///
/// let crossword = Crossword::parse("___\n_##\n_##", "CAT\nCOW\nDOG\nDO")?;
/// let mut solver = BacktrackSolver::new(&crossword);
///
/// assert_eq!(solver.enforce_node_consistency(), 2);
/// assert!(solver.ac3().is_consistent());
/// let solution = solver.backtrack(Assignment::for_crossword(&crossword));
/// assert!(solution.is_some());
/// # Ok::<(), crossfill_core::CrosswordError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BacktrackSolver<'a> {
    crossword: &'a Crossword,
    domains: Domains,
    options: SolverOptions,
}

impl<'a> BacktrackSolver<'a> {
    /// Creates a solver where every slot starts with the whole lexicon.
    #[must_use]
    pub fn new(crossword: &'a Crossword) -> Self {
        Self::with_domains(crossword, Domains::new(crossword))
    }

    /// Creates a solver starting from the given domains.
    ///
    /// The domains must belong to `crossword`.
    #[must_use]
    pub fn with_domains(crossword: &'a Crossword, domains: Domains) -> Self {
        debug_assert_eq!(domains.num_variables(), crossword.num_variables());
        Self {
            crossword,
            domains,
            options: SolverOptions::default(),
        }
    }

    /// Replaces the solver options.
    #[must_use]
    pub fn with_options(mut self, options: SolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the puzzle being solved.
    #[must_use]
    pub fn crossword(&self) -> &'a Crossword {
        self.crossword
    }

    /// Returns the current domains.
    #[must_use]
    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    /// Returns the solver options.
    #[must_use]
    pub fn options(&self) -> SolverOptions {
        self.options
    }

    /// Drops every candidate whose length differs from its slot's.
    ///
    /// Returns the number of candidates removed.
    pub fn enforce_node_consistency(&mut self) -> usize {
        consistency::enforce_node_consistency(self.crossword, &mut self.domains)
    }

    /// Makes `x` arc consistent with `y`; see [`consistency::revise`].
    pub fn revise(&mut self, x: VariableId, y: VariableId) -> bool {
        consistency::revise(self.crossword, &mut self.domains, x, y)
    }

    /// Runs AC-3 over every arc; see [`ac3::ac3`].
    pub fn ac3(&mut self) -> Propagation {
        ac3::ac3(self.crossword, &mut self.domains)
    }

    /// Runs AC-3 from the given arcs; see [`ac3::ac3_with_arcs`].
    pub fn ac3_with_arcs<I>(&mut self, arcs: I) -> Propagation
    where
        I: IntoIterator<Item = ConstraintArc>,
    {
        ac3::ac3_with_arcs(self.crossword, &mut self.domains, arcs)
    }

    /// Returns `true` if the assignment satisfies every constraint.
    #[must_use]
    pub fn is_consistent(&self, assignment: &Assignment) -> bool {
        consistency::is_consistent(self.crossword, assignment)
    }

    /// Chooses the next slot to bind.
    ///
    /// Picks the unbound slot with the fewest remaining candidates, breaking
    /// ties by the most neighbors and then by the lowest [`VariableId`].
    /// Returns `None` if every slot is bound.
    #[must_use]
    pub fn select_unassigned_variable(&self, assignment: &Assignment) -> Option<VariableId> {
        select_unassigned_variable(self.crossword, &self.domains, assignment)
    }

    /// Returns the candidates of `var`, least constraining first.
    ///
    /// A candidate's cost is the number of words it rules out across the
    /// unbound neighbors of `var`: neighbor candidates whose letter at the
    /// overlap differs from the candidate's. Equal costs keep word order.
    #[must_use]
    pub fn order_domain_values(&self, var: VariableId, assignment: &Assignment) -> Vec<WordId> {
        order_domain_values(self.crossword, &self.domains, var, assignment)
    }

    /// Completes a consistent partial assignment by backtracking search.
    ///
    /// Uses the current domains as they are; call
    /// [`enforce_node_consistency`](Self::enforce_node_consistency) and
    /// [`ac3`](Self::ac3) first, or use [`solve`](Self::solve).
    ///
    /// Every word already bound in `assignment` must still be a candidate of
    /// its slot. The domain of each bound slot is reduced to its word before
    /// searching, so inference prunes neighbors against the bound word only.
    ///
    /// Returns `None` if no completion exists.
    #[must_use]
    pub fn backtrack(&self, mut assignment: Assignment) -> Option<Assignment> {
        let mut domains = self.domains.clone();
        for (var, word) in assignment.iter() {
            debug_assert!(
                domains.contains(var, word),
                "{var} is bound to a word outside its domain"
            );
            domains.assign(var, word);
        }
        let mut stats = SolverStats::default();
        self.search(&domains, &mut assignment, &mut stats)
            .then_some(assignment)
    }

    /// Preprocesses the domains and searches for a solution.
    ///
    /// Returns the solution, or `None` if the puzzle has none, together with
    /// the statistics of this run.
    pub fn solve(&mut self) -> (Option<Assignment>, SolverStats) {
        let mut stats = SolverStats::default();
        let solution = self.solve_with_stats(&mut stats);
        (solution, stats)
    }

    /// Like [`solve`](Self::solve), accumulating into existing statistics.
    pub fn solve_with_stats(&mut self, stats: &mut SolverStats) -> Option<Assignment> {
        if !self.preprocess(stats) {
            return None;
        }
        let mut assignment = Assignment::for_crossword(self.crossword);
        if self.search(&self.domains, &mut assignment, stats) {
            log::debug!(
                "solution found after {} nodes and {} backtracks",
                stats.nodes,
                stats.backtracks
            );
            Some(assignment)
        } else {
            log::info!("no solution: search exhausted after {} nodes", stats.nodes);
            None
        }
    }

    /// Preprocesses the domains and searches the branches of the first slot
    /// in parallel.
    ///
    /// Branches are explored on the rayon thread pool and the solution of the
    /// earliest branch in value order wins, so the result is identical to
    /// [`solve`](Self::solve).
    pub fn solve_parallel(&mut self) -> Option<Assignment> {
        let mut stats = SolverStats::default();
        if !self.preprocess(&mut stats) {
            return None;
        }
        let this = &*self;
        let root = Assignment::for_crossword(this.crossword);
        let Some(var) = select_unassigned_variable(this.crossword, &this.domains, &root) else {
            return Some(root);
        };
        let solution = order_domain_values(this.crossword, &this.domains, var, &root)
            .into_par_iter()
            .find_map_first(|word| {
                let mut assignment = root.clone();
                let mut stats = SolverStats::default();
                this.try_value(&this.domains, &mut assignment, var, word, &mut stats)
                    .then_some(assignment)
            });
        if solution.is_none() {
            log::info!("no solution: every branch of {var} exhausted");
        }
        solution
    }

    fn preprocess(&mut self, stats: &mut SolverStats) -> bool {
        let pruned = self.enforce_node_consistency();
        stats.pruned += pruned;
        log::debug!("node consistency removed {pruned} candidates");

        if let Some(var) = self.crossword.variable_ids().find(|&v| self.domains.is_empty(v)) {
            log::info!(
                "no solution: no word fits {} ({var})",
                self.crossword.variable(var)
            );
            return false;
        }

        match self.ac3() {
            Propagation::Consistent { revisions } => {
                stats.revisions += revisions;
                log::debug!(
                    "arc consistency reached after {revisions} revisions, {} candidates left",
                    self.domains.total_len()
                );
                true
            }
            Propagation::Wipeout { var } => {
                stats.wipeouts += 1;
                log::info!(
                    "no solution: arc consistency emptied the domain of {} ({var})",
                    self.crossword.variable(var)
                );
                false
            }
        }
    }

    fn search(
        &self,
        domains: &Domains,
        assignment: &mut Assignment,
        stats: &mut SolverStats,
    ) -> bool {
        let Some(var) = select_unassigned_variable(self.crossword, domains, assignment) else {
            debug_assert!(consistency::is_consistent(self.crossword, assignment));
            return true;
        };
        stats.nodes += 1;
        log::trace!(
            "depth {}: branching on {var} with {} candidates",
            assignment.len(),
            domains.len(var)
        );
        order_domain_values(self.crossword, domains, var, assignment)
            .into_iter()
            .any(|word| self.try_value(domains, assignment, var, word, stats))
    }

    /// Binds `var` to `word` and searches below it, undoing the binding on
    /// failure.
    fn try_value(
        &self,
        domains: &Domains,
        assignment: &mut Assignment,
        var: VariableId,
        word: WordId,
        stats: &mut SolverStats,
    ) -> bool {
        if !consistency::value_is_consistent(self.crossword, assignment, var, word) {
            return false;
        }
        assignment.assign(var, word);
        let found = match self.options.inference {
            Inference::None => self.search(domains, assignment, stats),
            Inference::MaintainArcConsistency => {
                let mut branch = domains.clone();
                branch.assign(var, word);
                let arcs = self
                    .crossword
                    .neighbors(var)
                    .iter()
                    .map(|&z| ConstraintArc::new(z, var));
                match ac3::ac3_with_arcs(self.crossword, &mut branch, arcs) {
                    Propagation::Consistent { revisions } => {
                        stats.revisions += revisions;
                        self.search(&branch, assignment, stats)
                    }
                    Propagation::Wipeout { .. } => {
                        stats.wipeouts += 1;
                        false
                    }
                }
            }
        };
        if !found {
            assignment.unassign(var);
            stats.backtracks += 1;
        }
        found
    }
}

fn select_unassigned_variable(
    crossword: &Crossword,
    domains: &Domains,
    assignment: &Assignment,
) -> Option<VariableId> {
    crossword
        .variable_ids()
        .filter(|&var| !assignment.contains(var))
        .min_by_key(|&var| (domains.len(var), Reverse(crossword.degree(var)), var))
}

fn order_domain_values(
    crossword: &Crossword,
    domains: &Domains,
    var: VariableId,
    assignment: &Assignment,
) -> Vec<WordId> {
    let neighbors = crossword
        .neighbors(var)
        .iter()
        .filter(|&&n| !assignment.contains(n))
        .filter_map(|&n| crossword.overlap(var, n).map(|overlap| (n, overlap)))
        .collect::<Vec<_>>();
    let mut scored = domains
        .get(var)
        .iter()
        .map(|&word| {
            let candidate = crossword.word(word);
            let ruled_out = neighbors
                .iter()
                .map(|&(n, overlap)| {
                    let letter = candidate.letter(overlap.x);
                    domains
                        .get(n)
                        .iter()
                        .filter(|&&other| crossword.word(other).letter(overlap.y) != letter)
                        .count()
                })
                .sum::<usize>();
            (ruled_out, word)
        })
        .collect::<Vec<_>>();
    scored.sort_unstable();
    scored.into_iter().map(|(_, word)| word).collect()
}
