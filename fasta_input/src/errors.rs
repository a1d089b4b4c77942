//
// Copyright (c) 2025 10x Genomics, Inc. All rights reserved.
//
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FastaInputError {
    #[error("Could not open the FASTA file {path:?}.")]
    CannotOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not read record {record} of the FASTA file {path:?}.")]
    CannotReadRecord {
        path: PathBuf,
        /// One-based record number.
        record: usize,
        #[source]
        source: io::Error,
    },

    #[error("The FASTA file {path:?} does not contain any record. Expected a '>' header line followed by sequence lines.")]
    NoRecords { path: PathBuf },
}
