//
// Copyright (c) 2025 10x Genomics, Inc. All rights reserved.
//
//! Bad-character lookup table.
//!
//! One table per pattern, shaped `alphabet.len() x pattern.len()`. Cell `(c, j)`
//! holds the greatest `i < j` with `pattern[i] == c`, or `None` if the symbol does
//! not occur before position `j`.

use crate::alphabet::AlphabetMap;
use ndarray::Array2;

/// Per-pattern table of rightmost prior occurrences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadCharTable {
    cells: Array2<Option<usize>>,
}

impl BadCharTable {
    /// Build the table for `pattern` in a single left-to-right sweep, carrying the
    /// last seen position of every symbol.
    pub fn build(pattern: &[u8], alphabet: &AlphabetMap) -> Self {
        let mut cells = Array2::from_elem((alphabet.len(), pattern.len()), None);
        let mut last_seen: Vec<Option<usize>> = vec![None; alphabet.len()];
        for (j, &symbol) in pattern.iter().enumerate() {
            for (row, &seen) in last_seen.iter().enumerate() {
                cells[[row, j]] = seen;
            }
            if let Some(row) = alphabet.index_of(symbol) {
                last_seen[row] = Some(j);
            }
        }
        BadCharTable { cells }
    }

    /// Greatest `i < j` where the pattern holds the symbol of row `row`.
    #[inline]
    pub fn rightmost_before(&self, row: usize, j: usize) -> Option<usize> {
        self.cells[[row, j]]
    }

    /// `(alphabet size, pattern length)`
    pub fn dim(&self) -> (usize, usize) {
        self.cells.dim()
    }
}
