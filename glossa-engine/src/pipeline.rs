//! Multi-sentence analysis pipeline
//!
//! Owns the shared, read-only dictionary and rule lists and drives the
//! tag → disambiguate → check flow. Sentences are independent, so
//! checking many of them is embarrassingly parallel.

use std::sync::Arc;

use glossa_core::analysis::InputToken;
use glossa_core::{
    AnalyzedSentence, Dictionary, DisambiguationRule, Disambiguator, PatternMatcher,
    PatternRule, RuleMatch, Tagger,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::checker::Checker;
use crate::config::CheckerConfig;
use crate::error::Result;

/// One tokenized sentence as delivered by the external segmenter.
#[derive(Debug, Clone)]
pub struct SentenceInput {
    /// Original sentence text.
    pub text: String,
    /// Tokens with their byte offsets into `text`.
    pub tokens: Vec<InputToken>,
}

/// The analysis pipeline: tagging, disambiguation and rule checking
/// over shared immutable resources.
pub struct Pipeline {
    tagger: Tagger,
    disambiguator: Disambiguator,
    disambiguation_rules: Arc<Vec<DisambiguationRule>>,
    checker: Checker,
}

impl Pipeline {
    /// Build a pipeline. All shared state is published here, before any
    /// concurrent use.
    pub fn new(
        dictionary: Arc<Dictionary>,
        disambiguation_rules: Vec<DisambiguationRule>,
        config: CheckerConfig,
    ) -> Result<Self> {
        let matcher = match config.match_budget {
            Some(budget) => PatternMatcher::with_budget(budget),
            None => PatternMatcher::new(),
        };
        Ok(Self {
            tagger: Tagger::new(dictionary),
            disambiguator: Disambiguator::with_matcher(matcher),
            disambiguation_rules: Arc::new(disambiguation_rules),
            checker: Checker::new(&config)?,
        })
    }

    /// Tag and disambiguate one sentence.
    pub fn analyze(&self, input: &SentenceInput) -> Result<AnalyzedSentence> {
        let mut sentence = self.tagger.tag(&input.text, &input.tokens);
        self.disambiguator
            .disambiguate(&mut sentence, &self.disambiguation_rules)?;
        Ok(sentence)
    }

    /// Check an already-analyzed sentence.
    pub fn check(&self, sentence: &AnalyzedSentence, rules: &[PatternRule]) -> Vec<RuleMatch> {
        self.checker.check(sentence, rules)
    }

    /// Analyze and check one sentence.
    pub fn run(&self, input: &SentenceInput, rules: &[PatternRule]) -> Result<Vec<RuleMatch>> {
        let sentence = self.analyze(input)?;
        Ok(self.check(&sentence, rules))
    }

    /// Analyze and check many independent sentences, in parallel when
    /// the `parallel` feature is enabled. The output order follows the
    /// input order either way.
    #[cfg(feature = "parallel")]
    pub fn run_many(
        &self,
        inputs: &[SentenceInput],
        rules: &[PatternRule],
    ) -> Result<Vec<Vec<RuleMatch>>> {
        inputs
            .par_iter()
            .map(|input| self.run(input, rules))
            .collect()
    }

    /// Analyze and check many independent sentences sequentially.
    #[cfg(not(feature = "parallel"))]
    pub fn run_many(
        &self,
        inputs: &[SentenceInput],
        rules: &[PatternRule],
    ) -> Result<Vec<Vec<RuleMatch>>> {
        inputs.iter().map(|input| self.run(input, rules)).collect()
    }
}
