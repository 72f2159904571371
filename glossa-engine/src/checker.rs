//! Rule-set coordination
//!
//! Runs whole-sentence checks and many pattern rules against one
//! sentence, concatenating matches in rule declaration order. Overlap
//! resolution across different rules is the caller's policy and is not
//! done here.

use glossa_core::{AnalyzedSentence, PatternMatcher, PatternRule, RuleMatch};
use tracing::warn;

use crate::checks::{LongSentenceCheck, SentenceCheck};
use crate::config::CheckerConfig;
use crate::error::Result;

/// Coordinates whole-sentence checks and pattern rules.
///
/// Immutable after construction; safe to share across threads.
pub struct Checker {
    matcher: PatternMatcher,
    checks: Vec<Box<dyn SentenceCheck>>,
}

impl Checker {
    /// Create a checker from a validated configuration. The built-in
    /// long-sentence check uses the configured word threshold.
    pub fn new(config: &CheckerConfig) -> Result<Self> {
        config.validate()?;
        let matcher = match config.match_budget {
            Some(budget) => PatternMatcher::with_budget(budget),
            None => PatternMatcher::new(),
        };
        Ok(Self {
            matcher,
            checks: vec![Box::new(LongSentenceCheck::new(config.max_sentence_words)?)],
        })
    }

    /// Add a custom whole-sentence check, evaluated after the built-in
    /// ones in registration order.
    pub fn with_check(mut self, check: Box<dyn SentenceCheck>) -> Self {
        self.checks.push(check);
        self
    }

    /// The matcher this checker runs pattern rules with.
    pub fn matcher(&self) -> &PatternMatcher {
        &self.matcher
    }

    /// Check one sentence against all rules.
    ///
    /// Whole-sentence checks report first, then each rule's matches in
    /// declaration order. A rule exhausting the match budget reports
    /// zero matches; the sentence is never aborted.
    pub fn check(&self, sentence: &AnalyzedSentence, rules: &[PatternRule]) -> Vec<RuleMatch> {
        let mut matches = Vec::new();
        for check in &self.checks {
            if let Some(m) = check.check(sentence) {
                matches.push(m);
            }
        }
        for rule in rules {
            match self.matcher.find_matches(sentence, rule) {
                Ok(rule_matches) => matches.extend(rule_matches),
                Err(error) => {
                    warn!(rule = rule.id(), %error, "rule skipped for this sentence");
                }
            }
        }
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_core::analysis::InputToken;
    use glossa_core::{DictionaryBuilder, PatternElement, Tagger};
    use std::sync::Arc;

    fn analyze(text: &str) -> AnalyzedSentence {
        let mut builder = DictionaryBuilder::new();
        builder
            .insert("the", "the", "DT")
            .insert("cat", "cat", "NN");
        let tagger = Tagger::new(Arc::new(builder.build()));
        let mut tokens = Vec::new();
        let mut offset = 0;
        for (i, word) in text.split(' ').enumerate() {
            tokens.push(InputToken::new(word, offset, i > 0));
            offset += word.len() + 1;
        }
        tagger.tag(text, &tokens)
    }

    fn rule(id: &str, word: &str) -> PatternRule {
        PatternRule::new(id, vec![PatternElement::text(word)]).unwrap()
    }

    #[test]
    fn declaration_order_is_preserved() {
        let checker = Checker::new(&CheckerConfig::default()).unwrap();
        let sentence = analyze("the cat");
        let rules = [rule("SECOND_WORD", "cat"), rule("FIRST_WORD", "the")];
        let matches = checker.check(&sentence, &rules);
        let ids: Vec<&str> = matches.iter().map(|m| m.rule_id.as_str()).collect();
        assert_eq!(ids, ["SECOND_WORD", "FIRST_WORD"]);
    }

    #[test]
    fn no_cross_rule_deduplication() {
        let checker = Checker::new(&CheckerConfig::default()).unwrap();
        let sentence = analyze("the cat");
        let rules = [rule("A", "cat"), rule("B", "cat")];
        let matches = checker.check(&sentence, &rules);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].start, matches[1].start);
    }

    #[test]
    fn budget_exhaustion_drops_only_that_rule() {
        let config = CheckerConfig::builder().match_budget(1).build().unwrap();
        let checker = Checker::new(&config).unwrap();
        let sentence = analyze("the cat");
        // The budget of one step dies inside the first rule's scan;
        // the second rule is still attempted (with its own exhausted
        // budget) and also reports nothing, but the call succeeds.
        let rules = [rule("A", "cat"), rule("B", "the")];
        let matches = checker.check(&sentence, &rules);
        assert!(matches.is_empty());
    }
}
