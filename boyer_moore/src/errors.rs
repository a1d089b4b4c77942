//
// Copyright (c) 2025 10x Genomics, Inc. All rights reserved.
//
//! Errors raised while preparing a search.

use thiserror::Error;

/// Input the search engine refuses to run on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// No pattern was supplied.
    #[error("At least one pattern is required, but the pattern list is empty.")]
    NoPatterns,

    /// A pattern of length zero.
    #[error("Pattern {} is empty. Every pattern must contain at least one base.", .index + 1)]
    EmptyPattern {
        /// Zero-based position in the pattern list.
        index: usize,
    },

    /// A pattern symbol was not indexed in the alphabet the tables are built over.
    #[error("Pattern {} contains the symbol '{symbol}' which is missing from the alphabet.", .index + 1)]
    SymbolNotInAlphabet {
        /// Zero-based position in the pattern list.
        index: usize,
        /// Offending symbol.
        symbol: char,
    },
}
