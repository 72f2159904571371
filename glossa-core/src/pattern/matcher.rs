//! Pattern alignment engine
//!
//! Aligns element sequences against analyzed sentences with an explicit
//! backtracking stack. Alternative order per element: smallest skip
//! first, then repetitions from greediest down to the minimum; start
//! positions are scanned left to right, and scanning resumes right
//! after a reported match so one rule's matches never overlap.

use super::element::PatternElement;
use super::rule::{PatternRule, RuleMatch, Suggestion, SuggestionPart};
use crate::analysis::{AnalyzedSentence, TokenReadings};
use crate::error::{CoreError, Result};

/// A successful alignment: the token span and, per element, the tokens
/// it consumed (empty for optional elements that matched nothing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedSpan {
    start_token: usize,
    end_token: usize,
    element_spans: Vec<(usize, usize)>,
}

impl MatchedSpan {
    /// Index of the first matched token.
    pub fn start_token(&self) -> usize {
        self.start_token
    }

    /// Index just past the last matched token.
    pub fn end_token(&self) -> usize {
        self.end_token
    }

    /// Token range consumed by each element, in pattern order.
    pub fn element_spans(&self) -> &[(usize, usize)] {
        &self.element_spans
    }
}

/// Caller-imposed step budget; `None` means unbounded.
#[derive(Debug)]
struct Budget {
    limit: Option<usize>,
    used: usize,
}

impl Budget {
    fn new(limit: Option<usize>) -> Self {
        Self { limit, used: 0 }
    }

    fn step(&mut self) -> Result<()> {
        if let Some(limit) = self.limit {
            if self.used == limit {
                return Err(CoreError::BudgetExhausted { budget: limit });
            }
            self.used += 1;
        }
        Ok(())
    }
}

/// One committed choice on the backtracking stack.
#[derive(Debug, Clone, Copy)]
struct Frame {
    token: usize,
    skip: usize,
    reps: usize,
}

/// Stateless matching engine, shared by pattern and disambiguation
/// rules.
#[derive(Debug, Clone, Default)]
pub struct PatternMatcher {
    budget: Option<usize>,
}

impl PatternMatcher {
    /// Matcher without a step budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Matcher aborting any single rule scan after `budget` element
    /// tests with [`CoreError::BudgetExhausted`].
    pub fn with_budget(budget: usize) -> Self {
        Self {
            budget: Some(budget),
        }
    }

    /// Find all non-overlapping matches of `rule`, anti-patterns
    /// applied, with suggestions resolved.
    pub fn find_matches(
        &self,
        sentence: &AnalyzedSentence,
        rule: &PatternRule,
    ) -> Result<Vec<RuleMatch>> {
        let tokens = sentence.tokens();
        let mut budget = Budget::new(self.budget);
        let mut matches = Vec::new();
        let mut pos = 0;
        while pos < tokens.len() {
            if let Some(span) = align(tokens, rule.elements(), pos, &mut budget)? {
                if span.end_token > span.start_token
                    && !self.vetoed(tokens, rule, &span, &mut budget)?
                {
                    matches.push(self.to_rule_match(sentence, rule, &span));
                    pos = span.end_token;
                    continue;
                }
            }
            pos += 1;
        }
        Ok(matches)
    }

    /// Find all non-overlapping alignment spans of a bare element
    /// sequence (used by the disambiguator).
    pub fn find_spans(
        &self,
        sentence: &AnalyzedSentence,
        elements: &[PatternElement],
    ) -> Result<Vec<MatchedSpan>> {
        let tokens = sentence.tokens();
        let mut budget = Budget::new(self.budget);
        let mut spans = Vec::new();
        let mut pos = 0;
        while pos < tokens.len() {
            match align(tokens, elements, pos, &mut budget)? {
                Some(span) if span.end_token > span.start_token => {
                    pos = span.end_token;
                    spans.push(span);
                }
                _ => pos += 1,
            }
        }
        Ok(spans)
    }

    fn vetoed(
        &self,
        tokens: &[TokenReadings],
        rule: &PatternRule,
        span: &MatchedSpan,
        budget: &mut Budget,
    ) -> Result<bool> {
        for antipattern in rule.antipatterns() {
            let anchor = span.start_token as isize + antipattern.offset;
            if anchor < 0 || anchor as usize >= tokens.len() {
                continue;
            }
            if let Some(veto) = align(tokens, &antipattern.elements, anchor as usize, budget)? {
                if veto.end_token > veto.start_token {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    fn to_rule_match(
        &self,
        sentence: &AnalyzedSentence,
        rule: &PatternRule,
        span: &MatchedSpan,
    ) -> RuleMatch {
        let tokens = sentence.tokens();
        RuleMatch {
            rule_id: rule.id().to_owned(),
            start: tokens[span.start_token].start(),
            end: tokens[span.end_token - 1].end(),
            message: rule.message().to_owned(),
            short_message: rule.short_message().to_owned(),
            suggestions: rule
                .suggestions()
                .iter()
                .map(|s| resolve_suggestion(sentence, span, s))
                .collect(),
        }
    }
}

fn resolve_suggestion(
    sentence: &AnalyzedSentence,
    span: &MatchedSpan,
    suggestion: &Suggestion,
) -> String {
    let tokens = sentence.tokens();
    let mut out = String::new();
    for part in &suggestion.parts {
        match part {
            SuggestionPart::Text(text) => out.push_str(text),
            SuggestionPart::MatchedText { element, case } => {
                let (s, e) = span.element_spans[*element];
                if s < e {
                    let slice = &sentence.text()[tokens[s].start()..tokens[e - 1].end()];
                    out.push_str(&case.apply(slice));
                }
            }
            SuggestionPart::MatchedLemma { element, case } => {
                let (s, e) = span.element_spans[*element];
                if s < e {
                    out.push_str(&case.apply(tokens[s].lemma_or_form()));
                }
            }
        }
    }
    out
}

/// Attempt to align `elements` starting at token `start`.
fn align(
    tokens: &[TokenReadings],
    elements: &[PatternElement],
    start: usize,
    budget: &mut Budget,
) -> Result<Option<MatchedSpan>> {
    let mut frames: Vec<Frame> = Vec::with_capacity(elements.len());
    let mut token = start;
    loop {
        if frames.len() == elements.len() {
            return Ok(Some(build_span(start, token, &frames)));
        }
        let element = &elements[frames.len()];
        match next_alternative(element, tokens, token, None, budget)? {
            Some((skip, reps)) => {
                frames.push(Frame { token, skip, reps });
                token += skip + reps;
            }
            None => loop {
                let Some(frame) = frames.pop() else {
                    return Ok(None);
                };
                token = frame.token;
                let element = &elements[frames.len()];
                let retry = Some((frame.skip, frame.reps));
                if let Some((skip, reps)) =
                    next_alternative(element, tokens, token, retry, budget)?
                {
                    frames.push(Frame { token, skip, reps });
                    token += skip + reps;
                    break;
                }
            },
        }
    }
}

/// Enumerate (skip, reps) alternatives in preference order, returning
/// the first viable one strictly after `after`.
fn next_alternative(
    element: &PatternElement,
    tokens: &[TokenReadings],
    at: usize,
    after: Option<(usize, usize)>,
    budget: &mut Budget,
) -> Result<Option<(usize, usize)>> {
    let mut seen_after = after.is_none();
    for skip in 0..=element.skip_window() {
        let mut reps = element.max();
        loop {
            let candidate = (skip, reps);
            if !seen_after {
                if after == Some(candidate) {
                    seen_after = true;
                }
            } else if (reps > 0 || skip == 0)
                && viable(element, tokens, at, skip, reps, budget)?
            {
                return Ok(Some(candidate));
            }
            if reps == element.min() {
                break;
            }
            reps -= 1;
        }
    }
    Ok(None)
}

fn viable(
    element: &PatternElement,
    tokens: &[TokenReadings],
    at: usize,
    skip: usize,
    reps: usize,
    budget: &mut Budget,
) -> Result<bool> {
    let end = at + skip + reps;
    if end > tokens.len() {
        return Ok(false);
    }
    for index in at + skip..end {
        budget.step()?;
        if !element.matches_token(&tokens[index]) {
            return Ok(false);
        }
    }
    Ok(true)
}

fn build_span(start: usize, end: usize, frames: &[Frame]) -> MatchedSpan {
    MatchedSpan {
        start_token: start,
        end_token: end,
        element_spans: frames
            .iter()
            .map(|f| (f.token + f.skip, f.token + f.skip + f.reps))
            .collect(),
    }
}
