//! Prefix-compressed dictionary store
//!
//! Maps surface word forms to candidate (lemma, tag) readings. Word
//! forms share prefixes in a radix trie; lemmas at terminal nodes are
//! stored as (cut, suffix) instructions relative to the looked-up form
//! so that inflection families compress well. The store is built once
//! and read-only afterward; lookups never fail.

mod builder;
mod trie;

pub use builder::DictionaryBuilder;

use crate::analysis::Reading;
use trie::Trie;

/// Immutable word-form dictionary.
///
/// Safe for unsynchronized concurrent reads; there is no mutation API.
#[derive(Debug, Clone)]
pub struct Dictionary {
    trie: Trie,
}

impl Dictionary {
    pub(crate) fn from_trie(trie: Trie) -> Self {
        Self { trie }
    }

    /// Look up a word form exactly as given. Unknown forms yield an
    /// empty vector; case folding is the caller's concern.
    pub fn lookup(&self, form: &str) -> Vec<Reading> {
        self.trie
            .readings(form)
            .map(|encoded| encoded.iter().map(|e| e.decode(form)).collect())
            .unwrap_or_default()
    }

    /// Whether the given form has at least one entry.
    pub fn contains(&self, form: &str) -> bool {
        self.trie.readings(form).is_some_and(|r| !r.is_empty())
    }

    /// Number of distinct word forms stored.
    pub fn form_count(&self) -> usize {
        self.trie.form_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        let mut builder = DictionaryBuilder::new();
        builder.insert("walks", "walk", "VBZ");
        builder.insert("walks", "walk", "NNS");
        builder.insert("walked", "walk", "VBD");
        builder.insert("walking", "walk", "VBG");
        builder.insert("cat", "cat", "NN");
        builder.insert("cats", "cat", "NNS");
        builder.build()
    }

    #[test]
    fn lookup_returns_inserted_pairs() {
        let dict = sample();
        let readings = dict.lookup("walks");
        assert_eq!(readings.len(), 2);
        assert!(readings.contains(&Reading::new("walk", "VBZ")));
        assert!(readings.contains(&Reading::new("walk", "NNS")));
    }

    #[test]
    fn lookup_decodes_shared_prefix_lemmas() {
        let dict = sample();
        assert_eq!(dict.lookup("walked"), vec![Reading::new("walk", "VBD")]);
        assert_eq!(dict.lookup("cats"), vec![Reading::new("cat", "NNS")]);
    }

    #[test]
    fn unknown_form_yields_empty() {
        let dict = sample();
        assert!(dict.lookup("xyzzy").is_empty());
        assert!(dict.lookup("").is_empty());
        // Prefix of a stored form is not itself a form
        assert!(dict.lookup("walk").is_empty());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let dict = sample();
        assert!(dict.lookup("Cat").is_empty());
        assert!(!dict.lookup("cat").is_empty());
    }

    #[test]
    fn duplicate_entries_deduplicated() {
        let mut builder = DictionaryBuilder::new();
        builder.insert("run", "run", "VB");
        builder.insert("run", "run", "VB");
        let dict = builder.build();
        assert_eq!(dict.lookup("run").len(), 1);
    }

    #[test]
    fn form_count_counts_distinct_forms() {
        assert_eq!(sample().form_count(), 5);
    }
}
