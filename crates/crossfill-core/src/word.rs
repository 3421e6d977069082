//! The lexicon shared by every slot.

use std::{collections::BTreeSet, convert::Infallible, fmt, str::FromStr};

/// A handle to a word within a [`WordList`].
///
/// Handles follow the list's lexicographic order, so sorting by `WordId`
/// sorts alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("w{_0}")]
pub struct WordId(usize);

impl WordId {
    /// Creates a handle from a raw index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A candidate word with its letters split out for indexed access.
///
/// Letters are Unicode scalar values; the length of a word is its number of
/// letters, not its byte length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: Box<str>,
    letters: Box<[char]>,
}

impl Word {
    fn new(text: &str) -> Self {
        Self {
            text: text.into(),
            letters: text.chars().collect(),
        }
    }

    /// Returns the word as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns `true` if the word has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns the letter at `index`, or `None` past the end of the word.
    #[must_use]
    pub fn letter(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    /// Returns all letters in order.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A deduplicated, lexicographically sorted list of words.
///
/// # Examples
///
/// ```
/// use crossfill_core::WordList;
///
/// let words = WordList::new(["dog", "cat", " dog ", ""]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words.iter().map(|(_, w)| w.as_str()).collect::<Vec<_>>(), ["cat", "dog"]);
///
/// // Word files are normalized to upper case.
/// let words: WordList = "dog\ncat\n\nDOG\n".parse().unwrap();
/// assert_eq!(words.iter().map(|(_, w)| w.as_str()).collect::<Vec<_>>(), ["CAT", "DOG"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Builds a word list from arbitrary strings.
    ///
    /// Each string is trimmed; empty strings and duplicates are dropped.
    /// Case is preserved.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_owned())
            .filter(|w| !w.is_empty())
            .collect::<BTreeSet<_>>();
        Self {
            words: unique.iter().map(|w| Word::new(w)).collect(),
        }
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the word behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this list.
    #[must_use]
    pub fn get(&self, id: WordId) -> &Word {
        &self.words[id.0]
    }

    /// Looks up the handle of a word by its exact text.
    #[must_use]
    pub fn find(&self, text: &str) -> Option<WordId> {
        self.words
            .binary_search_by(|w| w.as_str().cmp(text))
            .ok()
            .map(WordId)
    }

    /// Returns all handles in lexicographic order.
    pub fn ids(&self) -> impl Iterator<Item = WordId> + use<> {
        (0..self.words.len()).map(WordId)
    }

    /// Returns all words with their handles in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> {
        self.words.iter().enumerate().map(|(i, w)| (WordId(i), w))
    }
}

impl FromStr for WordList {
    type Err = Infallible;

    /// Parses a word file: one word per line, upper-cased.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.lines().map(str::to_uppercase)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_and_dedups() {
        let words = WordList::new(["zebra", "apple", "apple", "  mango\t"]);
        let texts: Vec<_> = words.iter().map(|(_, w)| w.as_str()).collect();
        assert_eq!(texts, ["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_find() {
        let words = WordList::new(["abc", "xyc", "zzz"]);
        assert_eq!(words.find("xyc"), Some(WordId::new(1)));
        assert_eq!(words.find("XYC"), None);
        assert_eq!(words.find("nope"), None);
    }

    #[test]
    fn test_letters_are_chars() {
        let words = WordList::new(["ÉTÉ"]);
        let word = words.get(WordId::new(0));
        assert_eq!(word.len(), 3);
        assert_eq!(word.letter(0), Some('É'));
        assert_eq!(word.letter(3), None);
    }

    #[test]
    fn test_from_str_uppercases_and_skips_blank_lines() {
        let words: WordList = "one\n\n  two\r\nOne\n".parse().unwrap();
        let texts: Vec<_> = words.iter().map(|(_, w)| w.as_str()).collect();
        assert_eq!(texts, ["ONE", "TWO"]);
    }

    #[test]
    fn test_ids_follow_order() {
        let words = WordList::new(["b", "a"]);
        let ids: Vec<_> = words.ids().collect();
        assert_eq!(ids, [WordId::new(0), WordId::new(1)]);
        assert_eq!(words.get(ids[0]).as_str(), "a");
    }
}
