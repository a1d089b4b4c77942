//
// Copyright (c) 2025 10x Genomics, Inc. All rights reserved.
//
//! Per-pattern search statistics.

use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// Number of match offsets recorded per pattern unless configured otherwise.
pub const DEFAULT_MAX_POSITIONS: usize = 10;

/// Outcome of scanning the subject sequence for one pattern.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// Mismatches where the bad-character shift was taken, either because the good-suffix
    /// rule was skipped or because it did not give a strictly larger shift.
    pub bcr_win_count: usize,
    /// Total number of occurrences, overlapping ones included.
    pub match_count: usize,
    /// Start offsets of the leftmost occurrences, increasing.
    pub positions: Vec<usize>,
}

impl SearchReport {
    /// True if the pattern never occurred.
    pub fn is_empty(&self) -> bool {
        self.match_count == 0
    }
}

/// `bcr_win_count / match_count / pos_1 / ... / pos_k`
impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bcr_win_count)?;
        for value in std::iter::once(&self.match_count).chain(&self.positions) {
            write!(f, " / {value}")?;
        }
        Ok(())
    }
}

/// Render reports one per line.
pub fn render_reports(reports: &[SearchReport]) -> String {
    reports.iter().map(ToString::to_string).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let report = SearchReport {
            bcr_win_count: 3,
            match_count: 2,
            positions: vec![0, 4],
        };
        assert_eq!(report.to_string(), "3 / 2 / 0 / 4");
    }

    #[test]
    fn test_display_no_match() {
        let report = SearchReport {
            bcr_win_count: 1,
            ..Default::default()
        };
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "1 / 0");
    }

    #[test]
    fn test_render_reports() {
        let reports = vec![
            SearchReport {
                bcr_win_count: 0,
                match_count: 5,
                positions: vec![0, 1, 2, 3, 4],
            },
            SearchReport::default(),
        ];
        assert_eq!(render_reports(&reports), "0 / 5 / 0 / 1 / 2 / 3 / 4\n0 / 0");
    }
}
