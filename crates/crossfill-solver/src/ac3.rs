//! Arc consistency propagation (AC-3).

use std::collections::{HashSet, VecDeque};

use crossfill_core::{Crossword, VariableId};

use crate::{Domains, consistency};

/// An ordered pair of crossing slots.
///
/// Revising the arc `(x, y)` prunes `x` against `y`; `y` is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({x}, {y})")]
pub struct ConstraintArc {
    /// The slot whose domain is pruned.
    pub x: VariableId,
    /// The slot providing support.
    pub y: VariableId,
}

impl ConstraintArc {
    /// Creates an arc.
    #[must_use]
    pub const fn new(x: VariableId, y: VariableId) -> Self {
        Self { x, y }
    }

    /// Returns every arc of the crossword: both orders of every crossing pair.
    pub fn all(crossword: &Crossword) -> impl Iterator<Item = Self> + '_ {
        crossword.variable_ids().flat_map(move |x| {
            crossword
                .neighbors(x)
                .iter()
                .map(move |&y| Self::new(x, y))
        })
    }
}

/// FIFO worklist of arcs that holds each arc at most once.
#[derive(Debug, Default, Clone)]
pub struct ArcQueue {
    queue: VecDeque<ConstraintArc>,
    queued: HashSet<ConstraintArc>,
}

impl ArcQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an arc unless it is already waiting.
    ///
    /// Returns `true` if the arc was added.
    pub fn push(&mut self, arc: ConstraintArc) -> bool {
        if !self.queued.insert(arc) {
            return false;
        }
        self.queue.push_back(arc);
        true
    }

    /// Removes the oldest arc.
    pub fn pop(&mut self) -> Option<ConstraintArc> {
        let arc = self.queue.pop_front()?;
        self.queued.remove(&arc);
        Some(arc)
    }

    /// Returns the number of waiting arcs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if no arc is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Extend<ConstraintArc> for ArcQueue {
    fn extend<I: IntoIterator<Item = ConstraintArc>>(&mut self, iter: I) {
        for arc in iter {
            self.push(arc);
        }
    }
}

impl FromIterator<ConstraintArc> for ArcQueue {
    fn from_iter<I: IntoIterator<Item = ConstraintArc>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

/// Outcome of running AC-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Propagation {
    /// The worklist drained and every domain is non-empty.
    Consistent {
        /// Number of revisions that removed at least one candidate.
        revisions: usize,
    },
    /// A domain became empty; the puzzle has no solution from this state.
    Wipeout {
        /// The slot left without candidates.
        var: VariableId,
    },
}

/// Enforces arc consistency over every arc of the crossword.
///
/// See [`ac3_with_arcs`].
pub fn ac3(crossword: &Crossword, domains: &mut Domains) -> Propagation {
    ac3_with_arcs(crossword, domains, ConstraintArc::all(crossword))
}

/// Enforces arc consistency starting from the given arcs.
///
/// Arcs are revised in FIFO order. Whenever revising `(x, y)` shrinks `x`,
/// every arc `(z, x)` with `z` a neighbor of `x` other than `y` is queued
/// again. Stops at the first empty domain, including one that was already
/// empty on entry.
///
/// # Examples
///
/// ```
/// use crossfill_core::{Crossword, VariableId};
/// use crossfill_solver::{Domains, ac3, consistency};
///
/// let crossword = Crossword::parse("___\n#_#\n#_#", "CAT\nART\nDOG")?;
/// let [across, down] = [0, 1].map(VariableId::new);
/// let mut domains = Domains::new(&crossword);
/// consistency::enforce_node_consistency(&crossword, &mut domains);
///
/// let propagation = ac3::ac3(&crossword, &mut domains);
/// assert!(propagation.is_consistent());
/// // The second letter of the across word starts the down word.
/// let words = crossword.words();
/// assert_eq!(domains.get(across), [words.find("CAT").unwrap()]);
/// assert_eq!(domains.get(down), [words.find("ART").unwrap()]);
/// # Ok::<(), crossfill_core::CrosswordError>(())
/// ```
pub fn ac3_with_arcs<I>(crossword: &Crossword, domains: &mut Domains, arcs: I) -> Propagation
where
    I: IntoIterator<Item = ConstraintArc>,
{
    if let Some(var) = crossword.variable_ids().find(|&v| domains.is_empty(v)) {
        return Propagation::Wipeout { var };
    }
    let mut queue = arcs.into_iter().collect::<ArcQueue>();
    let mut revisions = 0;
    while let Some(ConstraintArc { x, y }) = queue.pop() {
        if !consistency::revise(crossword, domains, x, y) {
            continue;
        }
        revisions += 1;
        if domains.is_empty(x) {
            log::trace!("ac3: domain of {x} wiped out by {y}");
            return Propagation::Wipeout { var: x };
        }
        queue.extend(
            crossword
                .neighbors(x)
                .iter()
                .filter(|&&z| z != y)
                .map(|&z| ConstraintArc::new(z, x)),
        );
    }
    Propagation::Consistent { revisions }
}

#[cfg(test)]
mod tests {
    use crossfill_core::{Crossword, Direction, Overlap, Structure, Variable, WordList};

    use super::*;
    use crate::consistency::enforce_node_consistency;

    #[test]
    fn test_queue_deduplicates() {
        let [a, b] = [0, 1].map(VariableId::new);
        let mut queue = ArcQueue::new();
        assert!(queue.push(ConstraintArc::new(a, b)));
        assert!(!queue.push(ConstraintArc::new(a, b)));
        assert!(queue.push(ConstraintArc::new(b, a)));
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.pop(), Some(ConstraintArc::new(a, b)));
        // Popped arcs may be queued again.
        assert!(queue.push(ConstraintArc::new(a, b)));
        assert_eq!(queue.pop(), Some(ConstraintArc::new(b, a)));
        assert_eq!(queue.pop(), Some(ConstraintArc::new(a, b)));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_all_arcs_cover_both_orders() {
        let crossword = Crossword::parse("___\n_#_\n___", "").unwrap();
        let arcs = ConstraintArc::all(&crossword).collect::<HashSet<_>>();
        assert_eq!(arcs.len(), 8);
        for arc in &arcs {
            assert!(arcs.contains(&ConstraintArc::new(arc.y, arc.x)));
            assert!(crossword.overlap(arc.x, arc.y).is_some());
        }
    }

    #[test]
    fn test_propagates_along_a_chain() {
        // a - b - c chained by explicit overlaps: a[0] = b[0], b[1] = c[0].
        let structure = Structure::new(2, 3, vec![true; 6]).unwrap();
        let variables = (0..3)
            .map(|row| Variable::new(row, 0, Direction::Across, 2))
            .collect();
        let [a, b, c] = [0, 1, 2].map(VariableId::new);
        let crossword = Crossword::from_overlaps(
            structure,
            variables,
            WordList::new(["AX", "BY", "XQ", "YR", "AB"]),
            [(a, b, Overlap::new(0, 0)), (b, c, Overlap::new(1, 0))],
        )
        .unwrap();
        let words = crossword.words();
        let mut domains = Domains::new(&crossword);
        domains.restrict(c, [words.find("XQ").unwrap()]);

        // Revising only (b, c) must ripple out to a through re-queued arcs.
        let propagation = ac3_with_arcs(&crossword, &mut domains, [ConstraintArc::new(b, c)]);
        assert!(propagation.is_consistent());
        assert_eq!(domains.get(b), [words.find("AX").unwrap()]);
        assert_eq!(
            domains.get(a),
            [words.find("AB").unwrap(), words.find("AX").unwrap()]
        );
    }

    #[test]
    fn test_wipeout_stops_early() {
        let crossword = Crossword::parse("_##\n_##\n___", "ABC\nXYZ").unwrap();
        let mut domains = Domains::new(&crossword);
        enforce_node_consistency(&crossword, &mut domains);

        let propagation = ac3(&crossword, &mut domains);
        assert!(propagation.is_wipeout());
        let Propagation::Wipeout { var } = propagation else {
            unreachable!()
        };
        assert!(domains.is_empty(var));
    }

    #[test]
    fn test_empty_domain_without_neighbors_is_wipeout() {
        let crossword = Crossword::parse("___\n###\n____", "CAT").unwrap();
        let long = crossword
            .find_variable(&Variable::new(2, 0, Direction::Across, 4))
            .unwrap();
        let mut domains = Domains::new(&crossword);
        enforce_node_consistency(&crossword, &mut domains);
        assert!(domains.is_empty(long));

        assert_eq!(ac3(&crossword, &mut domains), Propagation::Wipeout { var: long });
        assert_eq!(
            ac3_with_arcs(&crossword, &mut domains, []),
            Propagation::Wipeout { var: long }
        );
    }

    #[test]
    fn test_result_is_arc_consistent() {
        let crossword = Crossword::parse(
            "____\n_##_\n____",
            "CART\nEARN\nBARN\nCUE\nTIN\nTOE\nCAT",
        )
        .unwrap();
        let mut domains = Domains::new(&crossword);
        enforce_node_consistency(&crossword, &mut domains);
        assert!(ac3(&crossword, &mut domains).is_consistent());

        for ConstraintArc { x, y } in ConstraintArc::all(&crossword) {
            let overlap = crossword.overlap(x, y).unwrap();
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
}
