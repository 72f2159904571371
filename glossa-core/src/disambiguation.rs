//! Contextual reading disambiguation
//!
//! Applies an ordered rule list to an analyzed sentence, each rule
//! narrowing (or enriching) the reading sets of the tokens its pattern
//! matched. Later rules observe the cumulative effect of earlier ones;
//! the list order is part of the contract.

use tracing::debug;

use crate::analysis::{AnalyzedSentence, Reading, TokenReadings};
use crate::error::{CoreError, Result};
use crate::pattern::{PatternElement, PatternMatcher, TagMatcher};

/// Selects readings for removal or filtering.
#[derive(Debug, Clone, Default)]
pub struct ReadingSpec {
    lemma: Option<String>,
    tag: Option<TagMatcher>,
}

impl ReadingSpec {
    /// Select readings whose tag matches the anchored pattern.
    pub fn tag(pattern: &str) -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            lemma: None,
            tag: Some(TagMatcher::new(pattern)?),
        })
    }

    /// Additionally require an exact lemma.
    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    /// Test one reading against this spec.
    pub fn matches(&self, reading: &Reading) -> bool {
        if let Some(lemma) = &self.lemma {
            if reading.lemma() != Some(lemma.as_str()) {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !reading.tag().is_some_and(|t| tag.matches(t)) {
                return false;
            }
        }
        true
    }
}

/// What a disambiguation rule does to the tokens its pattern matched.
///
/// A closed set; dispatch is exhaustive so new kinds are
/// compiler-visible additions.
#[derive(Debug, Clone)]
pub enum DisambiguationAction {
    /// Remove readings matching the spec.
    Remove(ReadingSpec),
    /// Keep only readings matching the spec.
    Filter(ReadingSpec),
    /// Add readings (duplicates are dropped).
    Add(Vec<Reading>),
    /// Replace all readings with the given ones.
    Replace(Vec<Reading>),
}

/// A contextual disambiguation rule: pattern plus action.
#[derive(Debug, Clone)]
pub struct DisambiguationRule {
    id: String,
    elements: Vec<PatternElement>,
    action: DisambiguationAction,
}

impl DisambiguationRule {
    /// Create a rule; the element sequence must be non-empty.
    pub fn new(
        id: impl Into<String>,
        elements: Vec<PatternElement>,
        action: DisambiguationAction,
    ) -> Result<Self> {
        let id = id.into();
        if elements.is_empty() {
            return Err(CoreError::EmptyPattern { rule_id: id });
        }
        for element in &elements {
            if element.min() > element.max() {
                return Err(CoreError::InvalidRepetition {
                    min: element.min(),
                    max: element.max(),
                });
            }
        }
        Ok(Self {
            id,
            elements,
            action,
        })
    }

    /// Rule identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Pattern elements in order.
    pub fn elements(&self) -> &[PatternElement] {
        &self.elements
    }

    /// The action applied to matched tokens.
    pub fn action(&self) -> &DisambiguationAction {
        &self.action
    }
}

/// Applies disambiguation rule lists in order.
#[derive(Debug, Clone, Default)]
pub struct Disambiguator {
    matcher: PatternMatcher,
}

impl Disambiguator {
    /// Disambiguator with an unbounded matcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disambiguator sharing a configured matcher (e.g. one carrying a
    /// step budget).
    pub fn with_matcher(matcher: PatternMatcher) -> Self {
        Self { matcher }
    }

    /// Apply every rule, in slice order, to the sentence in place.
    ///
    /// An action that would leave a token with zero readings is skipped
    /// for that token; the token keeps its prior readings.
    pub fn disambiguate(
        &self,
        sentence: &mut AnalyzedSentence,
        rules: &[DisambiguationRule],
    ) -> Result<()> {
        for rule in rules {
            let spans = self.matcher.find_spans(sentence, rule.elements())?;
            for span in spans {
                for &(start, end) in span.element_spans() {
                    for token in &mut sentence.tokens_mut()[start..end] {
                        apply_action(rule, token);
                    }
                }
            }
        }
        Ok(())
    }
}

fn apply_action(rule: &DisambiguationRule, token: &mut TokenReadings) {
    let applied = match rule.action() {
        DisambiguationAction::Remove(spec) => token.retain_readings(|r| !spec.matches(r)),
        DisambiguationAction::Filter(spec) => token.retain_readings(|r| spec.matches(r)),
        DisambiguationAction::Add(readings) => {
            for reading in readings {
                token.push_reading(reading.clone());
            }
            true
        }
        DisambiguationAction::Replace(readings) => token.replace_readings(readings.iter().cloned()),
    };
    if !applied {
        debug!(
            rule = rule.id(),
            token = token.form(),
            "disambiguation action skipped: would empty the reading set"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::InputToken;
    use crate::dictionary::DictionaryBuilder;
    use crate::tagger::Tagger;
    use std::sync::Arc;

    fn ambiguous_sentence() -> AnalyzedSentence {
        let mut builder = DictionaryBuilder::new();
        builder
            .insert("the", "the", "DT")
            .insert("walk", "walk", "VB")
            .insert("walk", "walk", "NN");
        let tagger = Tagger::new(Arc::new(builder.build()));
        tagger.tag(
            "the walk",
            &[
                InputToken::new("the", 0, false),
                InputToken::new("walk", 4, true),
            ],
        )
    }

    fn after_determiner_keep_noun() -> DisambiguationRule {
        DisambiguationRule::new(
            "DT_NOUN",
            vec![
                PatternElement::tag("DT").unwrap(),
                PatternElement::tag("VB|NN").unwrap(),
            ],
            DisambiguationAction::Remove(ReadingSpec::tag("VB").unwrap()),
        )
        .unwrap()
    }

    #[test]
    fn remove_narrows_ambiguity() {
        let mut s = ambiguous_sentence();
        Disambiguator::new()
            .disambiguate(&mut s, &[after_determiner_keep_noun()])
            .unwrap();
        let walk = &s.tokens()[2];
        assert!(walk.readings().iter().all(|r| r.tag() != Some("VB")));
        assert!(walk.readings().iter().any(|r| r.tag() == Some("NN")));
    }

    #[test]
    fn readings_never_emptied() {
        let mut s = ambiguous_sentence();
        let nuke = DisambiguationRule::new(
            "NUKE",
            vec![PatternElement::text("walk")],
            DisambiguationAction::Remove(ReadingSpec::tag(".+").unwrap()),
        )
        .unwrap();
        Disambiguator::new().disambiguate(&mut s, &[nuke]).unwrap();
        for token in s.tokens() {
            assert!(!token.readings().is_empty());
        }
        // The walk token kept its readings untouched
        assert!(s.tokens()[2].readings().len() >= 2);
    }

    #[test]
    fn fixed_list_is_idempotent_on_own_output() {
        let rules = vec![
            after_determiner_keep_noun(),
            DisambiguationRule::new(
                "ADD_LEMMA",
                vec![PatternElement::text("the")],
                DisambiguationAction::Add(vec![Reading::new("the", "DT0")]),
            )
            .unwrap(),
        ];
        let mut once = ambiguous_sentence();
        Disambiguator::new().disambiguate(&mut once, &rules).unwrap();
        let mut twice = once.clone();
        Disambiguator::new().disambiguate(&mut twice, &rules).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn filter_keeps_only_matching() {
        let mut s = ambiguous_sentence();
        let filter = DisambiguationRule::new(
            "KEEP_NN",
            vec![PatternElement::text("walk")],
            DisambiguationAction::Filter(ReadingSpec::tag("NN").unwrap()),
        )
        .unwrap();
        Disambiguator::new().disambiguate(&mut s, &[filter]).unwrap();
        let walk = &s.tokens()[2];
        assert_eq!(walk.readings().len(), 1);
        assert_eq!(walk.readings()[0].tag(), Some("NN"));
    }

    #[test]
    fn replace_swaps_reading_set() {
        let mut s = ambiguous_sentence();
        let replace = DisambiguationRule::new(
            "RETAG",
            vec![PatternElement::text("walk")],
            DisambiguationAction::Replace(vec![Reading::new("walk", "NN1")]),
        )
        .unwrap();
        Disambiguator::new().disambiguate(&mut s, &[replace]).unwrap();
        let walk = &s.tokens()[2];
        assert_eq!(walk.readings().len(), 1);
        assert_eq!(walk.readings()[0].tag(), Some("NN1"));
    }

    #[test]
    fn rules_apply_in_list_order() {
        // The tagging rule only fires on a VB reading, which the first
        // rule removes, so order decides whether it applies.
        let tag_vb = DisambiguationRule::new(
            "MARK_VB",
            vec![PatternElement::tag("VB").unwrap()],
            DisambiguationAction::Add(vec![Reading::new("walk", "X")]),
        )
        .unwrap();

        let mut remove_first = ambiguous_sentence();
        Disambiguator::new()
            .disambiguate(
                &mut remove_first,
                &[after_determiner_keep_noun(), tag_vb.clone()],
            )
            .unwrap();
        assert!(remove_first.tokens()[2]
            .readings()
            .iter()
            .all(|r| r.tag() != Some("X")));

        let mut mark_first = ambiguous_sentence();
        Disambiguator::new()
            .disambiguate(
                &mut mark_first,
                &[tag_vb, after_determiner_keep_noun()],
            )
            .unwrap();
        assert!(mark_first.tokens()[2]
            .readings()
            .iter()
            .any(|r| r.tag() == Some("X")));
    }
}
