//
// Copyright (c) 2025 10x Genomics, Inc. All rights reserved.
//
//! Dense symbol indexing for the lookup tables.
//!
//! Every byte that occurs in the subject sequence or in any pattern gets a row in
//! the bad-character tables. Indices are assigned in order of first appearance,
//! subject first and then patterns in input order.

const NUM_BYTES: usize = 256;

/// Map from a sequence symbol to its dense row index in `[0, len())`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlphabetMap {
    index: [Option<usize>; NUM_BYTES],
    symbols: Vec<u8>,
}

impl AlphabetMap {
    /// Build the map over the union of symbols in `subject` and `patterns`.
    pub fn build<P: AsRef<[u8]>>(subject: &[u8], patterns: &[P]) -> Self {
        let mut alphabet = AlphabetMap {
            index: [None; NUM_BYTES],
            symbols: Vec::new(),
        };
        let all_bytes = subject
            .iter()
            .chain(patterns.iter().flat_map(|p| p.as_ref().iter()));
        for &b in all_bytes {
            alphabet.insert(b);
        }
        alphabet
    }

    fn insert(&mut self, symbol: u8) {
        let slot = &mut self.index[symbol as usize];
        if slot.is_none() {
            *slot = Some(self.symbols.len());
            self.symbols.push(symbol);
        }
    }

    /// Row index of `symbol`, or `None` if it never occurred in the input.
    #[inline]
    pub fn index_of(&self, symbol: u8) -> Option<usize> {
        self.index[symbol as usize]
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True when neither the subject nor any pattern contained a symbol.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The indexed symbols, ordered by their index.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }
}
