//
// Copyright (c) 2025 10x Genomics, Inc. All rights reserved.
//
//!
//! Loading the subject sequence and the search patterns from FASTA files
//!
// Warning groups (as of rust 1.55)
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2021_compatibility,
    rust_2018_idioms,
    unused
)]

use bio::io::fasta;
use log::{info, warn};
use serde::Serialize;
use std::fs::File;
use std::io::BufRead;
use std::path::Path;

pub mod errors;
pub use errors::FastaInputError;

/// A pattern read from the patterns file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternRecord {
    /// Record id, the first word of the header line.
    pub id: String,
    pub seq: Vec<u8>,
}

impl PatternRecord {
    pub fn seq(&self) -> &[u8] {
        &self.seq
    }
}

impl AsRef<[u8]> for PatternRecord {
    fn as_ref(&self) -> &[u8] {
        &self.seq
    }
}

fn open(path: &Path) -> Result<fasta::Reader<std::io::BufReader<File>>, FastaInputError> {
    let file = File::open(path).map_err(|source| FastaInputError::CannotOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(fasta::Reader::new(file))
}

fn collect_records<B: BufRead>(
    reader: fasta::Reader<B>,
    path: &Path,
) -> Result<Vec<fasta::Record>, FastaInputError> {
    reader
        .records()
        .enumerate()
        .map(|(i, record)| {
            record.map_err(|source| FastaInputError::CannotReadRecord {
                path: path.to_path_buf(),
                record: i + 1,
                source,
            })
        })
        .collect()
}

/// Read the subject sequence, the sequence of the first record in `path`.
///
/// Sequence lines of the record are concatenated. A record with a header and no
/// sequence lines gives an empty subject.
pub fn read_subject(path: &Path) -> Result<Vec<u8>, FastaInputError> {
    subject_from_reader(open(path)?, path)
}

/// Like [`read_subject`], for an already open reader. `path` is only used in messages.
pub fn subject_from_reader<B: BufRead>(
    reader: fasta::Reader<B>,
    path: &Path,
) -> Result<Vec<u8>, FastaInputError> {
    let mut records = collect_records(reader, path)?.into_iter();
    let first = records.next().ok_or_else(|| FastaInputError::NoRecords {
        path: path.to_path_buf(),
    })?;
    let extra = records.count();
    if extra > 0 {
        warn!(
            "{} contains {} records after '{}', only the first record is searched",
            path.display(),
            extra,
            first.id()
        );
    }
    info!(
        "loaded subject '{}' with {} bases from {}",
        first.id(),
        first.seq().len(),
        path.display()
    );
    Ok(first.seq().to_vec())
}

/// Read every record of `path` as a pattern, in file order.
pub fn read_patterns(path: &Path) -> Result<Vec<PatternRecord>, FastaInputError> {
    patterns_from_reader(open(path)?, path)
}

/// Like [`read_patterns`], for an already open reader. `path` is only used in messages.
pub fn patterns_from_reader<B: BufRead>(
    reader: fasta::Reader<B>,
    path: &Path,
) -> Result<Vec<PatternRecord>, FastaInputError> {
    let patterns: Vec<_> = collect_records(reader, path)?
        .into_iter()
        .map(|record| PatternRecord {
            id: record.id().to_string(),
            seq: record.seq().to_vec(),
        })
        .collect();
    if patterns.is_empty() {
        return Err(FastaInputError::NoRecords {
            path: path.to_path_buf(),
        });
    }
    info!("loaded {} patterns from {}", patterns.len(), path.display());
    Ok(patterns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn reader(data: &'static [u8]) -> fasta::Reader<std::io::BufReader<&'static [u8]>> {
        fasta::Reader::new(data)
    }

    #[test]
    fn test_subject_multiline() {
        let data = b">chr_test some description\nACGT\nTTGA\nC\n";
        let subject = subject_from_reader(reader(data), Path::new("seq.fa")).unwrap();
        assert_eq!(subject, b"ACGTTTGAC".to_vec());
    }

    #[test]
    fn test_subject_uses_first_record() {
        let data = b">first\nACGT\n>second\nGGGG\n";
        let subject = subject_from_reader(reader(data), Path::new("seq.fa")).unwrap();
        assert_eq!(subject, b"ACGT".to_vec());
    }

    #[test]
    fn test_subject_header_only() {
        let subject = subject_from_reader(reader(b">empty\n"), Path::new("seq.fa")).unwrap();
        assert!(subject.is_empty());
    }

    #[test]
    fn test_no_records() {
        let err = subject_from_reader(reader(b""), Path::new("seq.fa")).unwrap_err();
        assert!(matches!(err, FastaInputError::NoRecords { .. }));
        let err = patterns_from_reader(reader(b""), Path::new("pat.fa")).unwrap_err();
        assert!(matches!(err, FastaInputError::NoRecords { .. }));
    }

    #[test]
    fn test_missing_header_is_an_error() {
        let err = patterns_from_reader(reader(b"ACGT\n"), Path::new("pat.fa")).unwrap_err();
        assert!(matches!(
            err,
            FastaInputError::CannotReadRecord { record: 1, .. }
        ));
    }

    #[test]
    fn test_patterns_in_order() {
        let data = b">p1\nACGT\n>p2\nAA\nC\n>p1\nACGT\n";
        let patterns = patterns_from_reader(reader(data), Path::new("pat.fa")).unwrap();
        assert_eq!(
            patterns,
            vec![
                PatternRecord {
                    id: "p1".into(),
                    seq: b"ACGT".to_vec()
                },
                PatternRecord {
                    id: "p2".into(),
                    seq: b"AAC".to_vec()
                },
                PatternRecord {
                    id: "p1".into(),
                    seq: b"ACGT".to_vec()
                },
            ]
        );
    }

    #[test]
    fn test_read_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let seq_path = dir.path().join("sequence.fa");
        let mut f = File::create(&seq_path).unwrap();
        writeln!(f, ">subject\nACGTAC\nGT").unwrap();
        drop(f);
        assert_eq!(read_subject(&seq_path).unwrap(), b"ACGTACGT".to_vec());

        let err = read_patterns(&dir.path().join("missing.fa")).unwrap_err();
        assert!(matches!(err, FastaInputError::CannotOpen { .. }));
        assert!(err.to_string().contains("missing.fa"));
    }
}
