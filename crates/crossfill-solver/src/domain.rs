use std::collections::BTreeSet;

use crossfill_core::{Crossword, VariableId, WordId};

/// Candidate words for every slot of a crossword.
///
/// Each domain is kept sorted by [`WordId`], which fixes the iteration order
/// every heuristic sees. Domains only ever shrink: there is no way to add a
/// word back once it has been removed. Search branches that need to prune
/// speculatively work on a clone.
///
/// # Examples
///
/// ```
/// use crossfill_core::Crossword;
/// use crossfill_solver::Domains;
///
/// let crossword = Crossword::parse("___", "CAT\nDOG\nOX")?;
/// let mut domains = Domains::new(&crossword);
/// let var = crossword.variable_ids().next().unwrap();
/// assert_eq!(domains.len(var), 3);
///
/// let removed = domains.retain(var, |word| crossword.word(word).len() == 3);
/// assert!(removed);
/// assert_eq!(domains.len(var), 2);
/// # Ok::<(), crossfill_core::CrosswordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domains {
    domains: Vec<Vec<WordId>>,
}

impl Domains {
    /// Creates domains where every slot may take every word of the lexicon.
    #[must_use]
    pub fn new(crossword: &Crossword) -> Self {
        let all = crossword.words().ids().collect::<Vec<_>>();
        Self {
            domains: vec![all; crossword.num_variables()],
        }
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn num_variables(&self) -> usize {
        self.domains.len()
    }

    /// Returns the candidates of `var` in ascending order.
    #[must_use]
    pub fn get(&self, var: VariableId) -> &[WordId] {
        &self.domains[var.index()]
    }

    /// Returns the number of candidates left for `var`.
    #[must_use]
    pub fn len(&self, var: VariableId) -> usize {
        self.domains[var.index()].len()
    }

    /// Returns `true` if `var` has no candidates left.
    #[must_use]
    pub fn is_empty(&self, var: VariableId) -> bool {
        self.domains[var.index()].is_empty()
    }

    /// Returns `true` if `word` is still a candidate for `var`.
    #[must_use]
    pub fn contains(&self, var: VariableId, word: WordId) -> bool {
        self.domains[var.index()].binary_search(&word).is_ok()
    }

    /// Returns the total number of candidates over all slots.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.domains.iter().map(Vec::len).sum()
    }

    /// Returns every slot with its candidates.
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &[WordId])> {
        self.domains
            .iter()
            .enumerate()
            .map(|(i, words)| (VariableId::new(i), words.as_slice()))
    }

    /// Keeps only the candidates of `var` for which `keep` returns `true`.
    ///
    /// Returns `true` if any candidate was removed.
    pub fn retain<F>(&mut self, var: VariableId, mut keep: F) -> bool
    where
        F: FnMut(WordId) -> bool,
    {
        let domain = &mut self.domains[var.index()];
        let before = domain.len();
        domain.retain(|&word| keep(word));
        domain.len() != before
    }

    /// Intersects the candidates of `var` with `words`.
    ///
    /// Returns `true` if any candidate was removed.
    pub fn restrict<I>(&mut self, var: VariableId, words: I) -> bool
    where
        I: IntoIterator<Item = WordId>,
    {
        let allowed = words.into_iter().collect::<BTreeSet<_>>();
        self.retain(var, |word| allowed.contains(&word))
    }

    /// Reduces the candidates of `var` to `word` alone.
    ///
    /// If `word` was not a candidate the domain becomes empty.
    pub fn assign(&mut self, var: VariableId, word: WordId) -> bool {
        self.retain(var, |w| w == word)
    }
}
