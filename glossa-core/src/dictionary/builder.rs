//! One-shot dictionary construction

use super::trie::{EncodedReading, Trie};
use super::Dictionary;

/// Accumulates (form, lemma, tag) entries and builds the immutable
/// [`Dictionary`]. Entries may arrive in any order; duplicates are
/// dropped.
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    entries: Vec<(String, EncodedReading)>,
}

impl DictionaryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one dictionary entry.
    pub fn insert(&mut self, form: &str, lemma: &str, tag: &str) -> &mut Self {
        self.entries
            .push((form.to_owned(), EncodedReading::encode(form, lemma, tag)));
        self
    }

    /// Add many entries at once.
    pub fn extend<'a, I>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    {
        for (form, lemma, tag) in entries {
            self.insert(form, lemma, tag);
        }
        self
    }

    /// Build the read-only dictionary. Inserting forms in sorted order
    /// keeps edge splits to a minimum, so the entries are sorted first.
    pub fn build(mut self) -> Dictionary {
        self.entries.sort_by(|a, b| a.0.cmp(&b.0));
        let mut trie = Trie::new();
        for (form, encoded) in self.entries {
            trie.insert(&form, encoded);
        }
        Dictionary::from_trie(trie)
    }
}
