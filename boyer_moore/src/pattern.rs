//
// Copyright (c) 2025 10x Genomics, Inc. All rights reserved.
//
//! A pattern together with its preprocessed lookup table.

use crate::alphabet::AlphabetMap;
use crate::bad_char::BadCharTable;
use crate::errors::SearchError;

/// Pattern bytes and the bad-character table built for them.
#[derive(Clone, Debug)]
pub struct PreparedPattern {
    seq: Vec<u8>,
    table: BadCharTable,
}

impl PreparedPattern {
    /// Preprocess a pattern. `index` is its position in the input list and is only
    /// used for error reporting.
    pub fn new(index: usize, seq: &[u8], alphabet: &AlphabetMap) -> Result<Self, SearchError> {
        if seq.is_empty() {
            return Err(SearchError::EmptyPattern { index });
        }
        if let Some(&symbol) = seq.iter().find(|&&s| alphabet.index_of(s).is_none()) {
            return Err(SearchError::SymbolNotInAlphabet {
                index,
                symbol: symbol as char,
            });
        }
        Ok(PreparedPattern {
            seq: seq.to_vec(),
            table: BadCharTable::build(seq, alphabet),
        })
    }

    /// The pattern bytes.
    pub fn seq(&self) -> &[u8] {
        &self.seq
    }

    /// Pattern length, always at least 1.
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Always false; empty patterns are rejected by [`PreparedPattern::new`].
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// The bad-character table.
    pub fn table(&self) -> &BadCharTable {
        &self.table
    }
}
