//! Token-level matching constraints

use regex::Regex;

use crate::analysis::TokenReadings;

/// Literal text matcher over a token's surface form.
#[derive(Debug, Clone)]
pub struct TextMatcher {
    text: String,
    case_sensitive: bool,
}

impl TextMatcher {
    /// Case-sensitive exact matcher.
    pub fn exact(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            case_sensitive: true,
        }
    }

    /// Case-insensitive matcher.
    pub fn case_insensitive(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            case_sensitive: false,
        }
    }

    /// Test a surface form.
    pub fn matches(&self, form: &str) -> bool {
        if self.case_sensitive {
            self.text == form
        } else {
            // ASCII fast path first; otherwise compare both foldings,
            // since some pairs only converge through uppercasing
            // (e.g. "straße" / "STRASSE")
            self.text.eq_ignore_ascii_case(form)
                || self.text.to_lowercase() == form.to_lowercase()
                || self.text.to_uppercase() == form.to_uppercase()
        }
    }
}

/// Anchored regex matcher over reading tags.
///
/// The pattern must match the whole tag string, never a substring;
/// anchoring is applied at construction.
#[derive(Debug, Clone)]
pub struct TagMatcher {
    regex: Regex,
}

impl TagMatcher {
    /// Compile an anchored tag pattern. The rule loader is expected to
    /// have validated the pattern, so the error only surfaces there.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(&format!("^(?:{pattern})$"))?,
        })
    }

    /// Test a single tag string.
    pub fn matches(&self, tag: &str) -> bool {
        self.regex.is_match(tag)
    }
}

/// A single pattern position: constraints plus quantifiers.
///
/// An element with neither a text nor a tag constraint matches any
/// token (a wildcard). `min == 0` makes the element optional; `skip`
/// lets it match anywhere within the next `skip` tokens, smallest skip
/// preferred.
#[derive(Debug, Clone, Default)]
pub struct PatternElement {
    text: Option<TextMatcher>,
    tag: Option<TagMatcher>,
    negate: bool,
    min: usize,
    max: usize,
    skip: usize,
    space_before: Option<bool>,
}

impl PatternElement {
    /// Wildcard element matching exactly one arbitrary token.
    pub fn any() -> Self {
        Self {
            min: 1,
            max: 1,
            ..Self::default()
        }
    }

    /// Element matching a literal token text, case-sensitively.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(TextMatcher::exact(text)),
            ..Self::any()
        }
    }

    /// Element matching a literal token text, ignoring case.
    pub fn text_ci(text: impl Into<String>) -> Self {
        Self {
            text: Some(TextMatcher::case_insensitive(text)),
            ..Self::any()
        }
    }

    /// Element matching any reading tag against an anchored pattern.
    pub fn tag(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            tag: Some(TagMatcher::new(pattern)?),
            ..Self::any()
        })
    }

    /// Add a tag constraint to an existing element.
    pub fn with_tag(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.tag = Some(TagMatcher::new(pattern)?);
        Ok(self)
    }

    /// Invert the element: it matches iff the constraints hold for no
    /// reading.
    pub fn negated(mut self) -> Self {
        self.negate = true;
        self
    }

    /// Make the element optional (repetition bounds [0, 1]).
    pub fn optional(mut self) -> Self {
        self.min = 0;
        self.max = self.max.max(1);
        self
    }

    /// Set repetition bounds. Validated when the owning rule is built.
    pub fn repeat(mut self, min: usize, max: usize) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Allow the element to match within the next `skip` tokens.
    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Require (or forbid) preceding whitespace.
    pub fn space_before(mut self, required: bool) -> Self {
        self.space_before = Some(required);
        self
    }

    /// Minimum repetition count.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Maximum repetition count.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Skip window size.
    pub fn skip_window(&self) -> usize {
        self.skip
    }

    /// Test one token, negation applied.
    pub fn matches_token(&self, token: &TokenReadings) -> bool {
        self.negate ^ self.constraints_hold(token)
    }

    fn constraints_hold(&self, token: &TokenReadings) -> bool {
        if let Some(required) = self.space_before {
            if token.has_space_before() != required {
                return false;
            }
        }
        if let Some(text) = &self.text {
            if !text.matches(token.form()) {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            let any_reading = token
                .readings()
                .iter()
                .any(|r| r.tag().is_some_and(|t| tag.matches(t)));
            if !any_reading {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Reading;

    fn token(form: &str, tag: &str) -> TokenReadings {
        TokenReadings::new(form, [Reading::new(form, tag)], 0, false)
    }

    #[test]
    fn text_matcher_case_modes() {
        assert!(TextMatcher::exact("The").matches("The"));
        assert!(!TextMatcher::exact("The").matches("the"));
        assert!(TextMatcher::case_insensitive("The").matches("the"));
        assert!(TextMatcher::case_insensitive("straße").matches("STRASSE"));
    }

    #[test]
    fn case_folding_converges_through_uppercase() {
        // ß lowercases to itself but uppercases to SS, so only the
        // uppercase folding equates these pairs
        assert!(TextMatcher::case_insensitive("STRASSE").matches("straße"));
        assert!(TextMatcher::case_insensitive("straße").matches("Straße"));
        assert!(!TextMatcher::case_insensitive("straße").matches("strasser"));
    }

    #[test]
    fn tag_matcher_is_anchored() {
        let matcher = TagMatcher::new("NN").unwrap();
        assert!(matcher.matches("NN"));
        assert!(!matcher.matches("NNS"));

        let alternation = TagMatcher::new("NN|NNS").unwrap();
        assert!(alternation.matches("NNS"));
        assert!(!alternation.matches("NNP"));
    }

    #[test]
    fn element_matches_any_reading_tag() {
        let mut ambiguous = token("walk", "VB");
        ambiguous.push_reading(Reading::new("walk", "NN"));
        assert!(PatternElement::tag("NN").unwrap().matches_token(&ambiguous));
        assert!(PatternElement::tag("VB").unwrap().matches_token(&ambiguous));
        assert!(!PatternElement::tag("JJ").unwrap().matches_token(&ambiguous));
    }

    #[test]
    fn negated_element_inverts() {
        let element = PatternElement::tag("NN").unwrap().negated();
        assert!(!element.matches_token(&token("cat", "NN")));
        assert!(element.matches_token(&token("ran", "VBD")));
    }

    #[test]
    fn sentinel_token_never_satisfies_tag_constraint() {
        let unknown = TokenReadings::new("blorf", [], 0, false);
        assert!(!PatternElement::tag(".*").unwrap().matches_token(&unknown));
        assert!(PatternElement::tag(".*").unwrap().negated().matches_token(&unknown));
    }

    #[test]
    fn space_before_constraint() {
        let spaced = TokenReadings::new("cat", [Reading::new("cat", "NN")], 4, true);
        assert!(PatternElement::any().space_before(true).matches_token(&spaced));
        assert!(!PatternElement::any().space_before(false).matches_token(&spaced));
    }

    #[test]
    fn combined_text_and_tag_require_both() {
        let element = PatternElement::text("cat").with_tag("NN").unwrap();
        assert!(element.matches_token(&token("cat", "NN")));
        assert!(!element.matches_token(&token("cat", "VB")));
        assert!(!element.matches_token(&token("dog", "NN")));
    }
}
