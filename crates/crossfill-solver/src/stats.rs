/// Counters collected while solving.
///
/// # Examples
///
/// ```
/// use crossfill_core::Crossword;
/// use crossfill_solver::BacktrackSolver;
///
/// let crossword = Crossword::parse("___\n_##\n_##", "CAT\nCOW")?;
/// let (solution, stats) = BacktrackSolver::new(&crossword).solve();
/// assert!(solution.is_some());
/// assert!(stats.nodes() >= 2);
/// # Ok::<(), crossfill_core::CrosswordError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    pub(crate) pruned: usize,
    pub(crate) revisions: usize,
    pub(crate) nodes: usize,
    pub(crate) backtracks: usize,
    pub(crate) wipeouts: usize,
}

impl SolverStats {
    /// Returns the number of candidates removed by node consistency.
    #[must_use]
    pub fn pruned(&self) -> usize {
        self.pruned
    }

    /// Returns the number of arc revisions that removed a candidate.
    ///
    /// Includes revisions made while maintaining arc consistency during
    /// search.
    #[must_use]
    pub fn revisions(&self) -> usize {
        self.revisions
    }

    /// Returns the number of search nodes, i.e. slots selected for branching.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the number of trial bindings that were undone.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Returns the number of times propagation emptied a domain.
    #[must_use]
    pub fn wipeouts(&self) -> usize {
        self.wipeouts
    }
}
