//
// Copyright (c) 2025 10x Genomics, Inc. All rights reserved.
//
//! Right-to-left comparison scan for one pattern.

use crate::alphabet::AlphabetMap;
use crate::pattern::PreparedPattern;
use crate::report::SearchReport;
use crate::shift_rules::{bad_character_shift, good_suffix_shift};

/// Result of comparing the pattern at one alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Alignment {
    Match,
    /// Pattern position of the rightmost mismatching symbol.
    Mismatch(usize),
}

fn compare(subject: &[u8], t: usize, pattern: &[u8]) -> Alignment {
    pattern
        .iter()
        .zip(&subject[t..t + pattern.len()])
        .rposition(|(a, b)| a != b)
        .map_or(Alignment::Match, Alignment::Mismatch)
}

/// Scan `subject` for `pattern`, keeping up to `max_positions` match offsets.
///
/// A full match always advances the cursor by one so overlapping occurrences are
/// counted. On a mismatch in the left half of the pattern (`p < m / 2`) only the
/// bad-character rule is consulted; otherwise the larger of both shifts is taken and
/// ties go to the bad-character rule.
///
/// The good-suffix rule rescans the pattern for `subject[t..=t + p]`, which is not
/// the suffix that matched, so its shift can jump over an occurrence. Every reported
/// offset is a real occurrence, but `match_count` can be below the true count for
/// patterns of length 4 and above.
pub fn scan(
    subject: &[u8],
    pattern: &PreparedPattern,
    alphabet: &AlphabetMap,
    max_positions: usize,
) -> SearchReport {
    let m = pattern.len();
    let mut report = SearchReport::default();
    if m > subject.len() {
        return report;
    }
    let last_alignment = subject.len() - m;

    let mut t = 0;
    while t <= last_alignment {
        match compare(subject, t, pattern.seq()) {
            Alignment::Match => {
                if report.positions.len() < max_positions {
                    report.positions.push(t);
                }
                report.match_count += 1;
                t += 1;
            }
            Alignment::Mismatch(p) => {
                let bcr = bad_character_shift(subject, t, p, pattern, alphabet);
                // 2p < m is p < m / 2 over the reals
                if 2 * p < m {
                    report.bcr_win_count += 1;
                    t += bcr;
                } else {
                    let gsr = good_suffix_shift(subject, t, p, pattern.seq());
                    if bcr >= gsr {
                        report.bcr_win_count += 1;
                    }
                    t += bcr.max(gsr);
                }
            }
        }
    }
    report
}
