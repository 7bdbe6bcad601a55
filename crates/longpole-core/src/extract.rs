//! Dependency-reference extraction from issue text.
//!
//! # Overview
//!
//! Issue bodies declare dependencies in free text: a keyword phrase followed
//! by a `#`-prefixed issue number, e.g. `depends on #42` or `Blocked by #7`.
//! Extraction is purely lexical and deterministic — there is no partial
//! credit for fuzzy phrasing. The recognized phrases are a data-driven table
//! so new phrases can be added (including per-project via configuration)
//! without touching control flow.
//!
//! Matching scans left-to-right and keeps every non-overlapping match whose
//! numeric value is a member of the supplied scope set. Out-of-scope and
//! malformed references are silently dropped; this keeps the resulting graph
//! strictly release-local.

use std::collections::{BTreeSet, HashSet};

use regex::Regex;
use tracing::debug;

use crate::model::IssueNumber;

/// Keyword phrases recognized ahead of a `#<digits>` reference.
///
/// Matched case-insensitively, separated from the reference by any
/// whitespace run.
pub const KEYWORD_PHRASES: &[&str] = &["depends on", "blocked by", "requires", "after"];

/// Compiled dependency-reference scanner.
#[derive(Debug, Clone)]
pub struct DependencyExtractor {
    pattern: Regex,
}

impl Default for DependencyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyExtractor {
    /// Extractor recognizing the built-in phrase table.
    #[must_use]
    pub fn new() -> Self {
        let pattern = build_pattern(KEYWORD_PHRASES.iter().copied())
            .expect("built-in phrase table compiles");
        Self { pattern }
    }

    /// Extractor recognizing the built-in phrases plus project-configured
    /// extras. Extra phrases are escaped literally before compilation.
    ///
    /// # Errors
    ///
    /// Returns an error if the combined pattern fails to compile (e.g. an
    /// extra phrase long enough to exceed the regex size limit).
    pub fn with_extra_phrases(extra: &[String]) -> Result<Self, regex::Error> {
        let phrases = KEYWORD_PHRASES
            .iter()
            .copied()
            .chain(extra.iter().map(String::as_str));
        Ok(Self {
            pattern: build_pattern(phrases)?,
        })
    }

    /// Extract scoped dependency references from `text`.
    ///
    /// The result preserves first-seen order and contains no duplicates,
    /// even when the same number is mentioned via multiple phrases. Every
    /// returned value is a member of `scope`.
    #[must_use]
    pub fn extract(&self, text: &str, scope: &BTreeSet<IssueNumber>) -> Vec<IssueNumber> {
        let mut seen: HashSet<IssueNumber> = HashSet::new();
        let mut refs: Vec<IssueNumber> = Vec::new();

        for captures in self.pattern.captures_iter(text) {
            let digits = &captures[1];
            let Ok(number) = digits.parse::<IssueNumber>() else {
                debug!(digits, "dropping unparseable dependency reference");
                continue;
            };
            if !scope.contains(&number) {
                debug!(number, "dropping out-of-scope dependency reference");
                continue;
            }
            if seen.insert(number) {
                refs.push(number);
            }
        }

        refs
    }
}

/// Compile the alternation pattern `(?i)(?:p1|p2|…)\s+#(\d+)`.
fn build_pattern<'a>(phrases: impl Iterator<Item = &'a str>) -> Result<Regex, regex::Error> {
    let alternation = phrases.map(regex::escape).collect::<Vec<_>>().join("|");
    Regex::new(&format!(r"(?i)(?:{alternation})\s+#(\d+)"))
}
