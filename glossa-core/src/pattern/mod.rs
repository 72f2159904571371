//! Pattern rules and the matching engine
//!
//! One alignment algorithm serves both style rules (which emit
//! [`RuleMatch`]es) and disambiguation rules (which consume raw
//! [`MatchedSpan`]s).

mod element;
mod matcher;
mod rule;

pub use element::{PatternElement, TagMatcher, TextMatcher};
pub use matcher::{MatchedSpan, PatternMatcher};
pub use rule::{
    AntiPattern, CaseConversion, PatternRule, RuleMatch, Suggestion, SuggestionPart,
};
