//
// Copyright (c) 2025 10x Genomics, Inc. All rights reserved.
//
//! Shift heuristics evaluated on a mismatch.
//!
//! Both rules take the alignment cursor `t` (subject offset of the pattern start) and
//! the mismatch position `p` within the pattern, and return a strictly positive shift.

use crate::alphabet::AlphabetMap;
use crate::pattern::PreparedPattern;

/// Bad-character rule.
///
/// Aligns the rightmost occurrence of the mismatching subject symbol that lies before
/// `p` in the pattern under the mismatch. Without such an occurrence the pattern start
/// moves past the mismatch, a shift of `p + 1`.
pub fn bad_character_shift(
    subject: &[u8],
    t: usize,
    p: usize,
    pattern: &PreparedPattern,
    alphabet: &AlphabetMap,
) -> usize {
    let prior = alphabet
        .index_of(subject[t + p])
        .and_then(|row| pattern.table().rightmost_before(row, p));
    match prior {
        // table cells only hold positions i < p
        Some(i) => p - i,
        None => p + 1,
    }
}

/// Good-suffix rule.
///
/// Takes the `p + 1` subject symbols `subject[t..=t + p]` and rescans the pattern for
/// them on every call. Candidate offsets `i` satisfy `i < p` and
/// `i + p + 1 < pattern.len()`; the largest one gives a shift of `p - i`. With no
/// candidate the shift is 1.
pub fn good_suffix_shift(subject: &[u8], t: usize, p: usize, pattern: &[u8]) -> usize {
    let suffix = &subject[t..=t + p];
    let limit = (pattern.len() - suffix.len()).min(p);
    (0..limit)
        .rev()
        .find(|&i| &pattern[i..i + suffix.len()] == suffix)
        .map_or(1, |i| p - i)
}
