//
// Copyright (c) 2025 10x Genomics, Inc. All rights reserved.
//
//! Multi-pattern Boyer-Moore search over sequence data.
//!
//! Every pattern is searched independently with both the bad-character and the
//! good-suffix shift rule. For each pattern the searcher reports how often the
//! bad-character shift was taken, the total number of occurrences, and the offsets
//! of the first occurrences.
//!
//! ```rust
//! use boyer_moore::BoyerMoore;
//! let searcher = BoyerMoore::new(b"ACGTACGT", &["ACGT"]).unwrap();
//! let reports = searcher.search(10);
//! assert_eq!(reports[0].match_count, 2);
//! assert_eq!(reports[0].positions, vec![0, 4]);
//! ```
#![deny(missing_docs)]
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2021_compatibility,
    rust_2018_idioms,
    unused
)]

use log::debug;
use rayon::prelude::*;

pub mod alphabet;
pub mod bad_char;
mod errors;
pub mod pattern;
pub mod report;
pub mod scanner;
pub mod shift_rules;

pub use alphabet::AlphabetMap;
pub use errors::SearchError;
pub use pattern::PreparedPattern;
pub use report::{render_reports, SearchReport, DEFAULT_MAX_POSITIONS};

/// Subject sequence, alphabet and preprocessed patterns for one run.
///
/// Everything is built once in [`BoyerMoore::new`] and never mutated afterwards, so a
/// searcher can be shared across threads. Patterns are kept by input position; repeated
/// pattern text gets its own table and its own report.
#[derive(Clone, Debug)]
pub struct BoyerMoore {
    subject: Vec<u8>,
    alphabet: AlphabetMap,
    patterns: Vec<PreparedPattern>,
}

impl BoyerMoore {
    /// Index the alphabet and build one bad-character table per pattern.
    pub fn new<P: AsRef<[u8]>>(subject: &[u8], patterns: &[P]) -> Result<Self, SearchError> {
        if patterns.is_empty() {
            return Err(SearchError::NoPatterns);
        }
        let alphabet = AlphabetMap::build(subject, patterns);
        let patterns = patterns
            .iter()
            .enumerate()
            .map(|(index, p)| PreparedPattern::new(index, p.as_ref(), &alphabet))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            "indexed {} symbols for {} patterns over {} bases",
            alphabet.len(),
            patterns.len(),
            subject.len()
        );
        Ok(BoyerMoore {
            subject: subject.to_vec(),
            alphabet,
            patterns,
        })
    }

    /// The subject sequence.
    pub fn subject(&self) -> &[u8] {
        &self.subject
    }

    /// The alphabet shared by all patterns.
    pub fn alphabet(&self) -> &AlphabetMap {
        &self.alphabet
    }

    /// Preprocessed patterns in input order.
    pub fn patterns(&self) -> &[PreparedPattern] {
        &self.patterns
    }

    /// Search the pattern at input position `index`.
    pub fn search_pattern(&self, index: usize, max_positions: usize) -> Option<SearchReport> {
        let pattern = self.patterns.get(index)?;
        Some(self.scan(pattern, max_positions))
    }

    /// Search every pattern one after the other. Reports are in input order.
    pub fn search(&self, max_positions: usize) -> Vec<SearchReport> {
        self.patterns
            .iter()
            .map(|pattern| self.scan(pattern, max_positions))
            .collect()
    }

    /// Search every pattern on the rayon thread pool, one task per pattern. Reports are
    /// in input order and identical to [`BoyerMoore::search`].
    pub fn par_search(&self, max_positions: usize) -> Vec<SearchReport> {
        self.patterns
            .par_iter()
            .map(|pattern| self.scan(pattern, max_positions))
            .collect()
    }

    fn scan(&self, pattern: &PreparedPattern, max_positions: usize) -> SearchReport {
        let report = scanner::scan(&self.subject, pattern, &self.alphabet, max_positions);
        debug!(
            "pattern of length {}: {} matches, bad-character rule taken {} times",
            pattern.len(),
            report.match_count,
            report.bcr_win_count
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_reports_in_input_order() {
        let searcher = BoyerMoore::new(b"ACGTACGT", &["ACGT", "AAAA", "GTA"]).unwrap();
        let reports = searcher.search(DEFAULT_MAX_POSITIONS);
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].positions, vec![0, 4]);
        assert_eq!(reports[1].match_count, 0);
        assert_eq!(reports[2].positions, vec![2]);
    }

    #[test]
    fn test_duplicate_patterns_are_independent() {
        let searcher = BoyerMoore::new(b"TTGACCTTGACC", &["TGAC", "CC", "TGAC"]).unwrap();
        let reports = searcher.search(DEFAULT_MAX_POSITIONS);
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0], reports[2]);
        assert_eq!(reports[0].positions, vec![1, 7]);
    }

    #[test]
    fn test_empty_subject() {
        let searcher = BoyerMoore::new(b"", &["A"]).unwrap();
        assert_eq!(searcher.search(10), vec![SearchReport::default()]);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            BoyerMoore::new(b"ACGT", &["AC", ""]).unwrap_err(),
            SearchError::EmptyPattern { index: 1 }
        );
        assert_eq!(
            BoyerMoore::new::<&str>(b"ACGT", &[]).unwrap_err(),
            SearchError::NoPatterns
        );
    }

    #[test]
    fn test_error_message_is_one_based() {
        let err = BoyerMoore::new(b"ACGT", &[""]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Pattern 1 is empty. Every pattern must contain at least one base."
        );
    }

    #[test]
    fn test_search_pattern() {
        let searcher = BoyerMoore::new(b"AAAAAA", &["AA"]).unwrap();
        assert_eq!(searcher.search_pattern(0, 10).unwrap().match_count, 5);
        assert!(searcher.search_pattern(1, 10).is_none());
    }

    proptest! {
        #[test]
        fn prop_parallel_equals_sequential(
            subject in "[ACGT]{0,120}",
            patterns in proptest::collection::vec("[ACGT]{1,6}", 1..8),
        ) {
            let searcher = BoyerMoore::new(subject.as_bytes(), &patterns).unwrap();
            prop_assert_eq!(searcher.search(10), searcher.par_search(10));
        }
    }
}
