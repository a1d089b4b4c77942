//
// Copyright (c) 2025 10x Genomics, Inc. All rights reserved.
//
//! Run parameters for the pattern search, read from `parameters.toml` next to the
//! running executable.
// Warning groups (as of rust 1.55)
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2021_compatibility,
    rust_2018_idioms,
    unused
)]

use anyhow::{Context, Result};
use log::warn;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    /// Number of match offsets reported per pattern. The match count is never capped.
    pub max_reported_positions: usize,
    /// Search patterns concurrently, one task per pattern.
    pub parallel_patterns: bool,
}

const DEFAULT_PARAMETERS: Parameters = Parameters {
    max_reported_positions: 10,
    parallel_patterns: true,
};

impl Default for Parameters {
    fn default() -> Self {
        DEFAULT_PARAMETERS
    }
}

/// Parse a parameters file. Keys that are absent keep their default value.
pub fn load_parameters(path: &Path) -> Result<Parameters> {
    let s = std::fs::read_to_string(path).with_context(|| path.display().to_string())?;
    toml::from_str(&s).with_context(|| path.display().to_string())
}

static PARAMETERS: OnceLock<Result<Parameters>> = OnceLock::new();

/// Return a reference to the global parameters.
/// The parameters may need to be loaded; if loading fails, return Err.
fn parameters() -> &'static Result<Parameters> {
    PARAMETERS.get_or_init(|| {
        let path = std::env::current_exe()
            .context("Unable to locate the running executable")?
            .with_file_name("parameters.toml");
        if !path.exists() {
            warn!(
                "could not find parameters.toml at {}, falling back to defaults",
                path.display()
            );
            Ok(DEFAULT_PARAMETERS)
        } else {
            load_parameters(&path)
        }
    })
}

macro_rules! parameter_getter {
    ($a:ident, $t:ty) => {
        pub fn $a() -> Result<&'static $t> {
            let val = match parameters() {
                Err(e) => return Err(anyhow::anyhow!("{e:#}")),
                Ok(p) => &p.$a,
            };
            if DEFAULT_PARAMETERS.$a != *val {
                warn!("using non-default {} = {:?}", stringify!($a), val);
            }
            Ok(val)
        }
    };
}

parameter_getter!(max_reported_positions, usize);
parameter_getter!(parallel_patterns, bool);

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_params(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let f = write_params("max_reported_positions = 25\n");
        let params = load_parameters(f.path()).unwrap();
        assert_eq!(params.max_reported_positions, 25);
        assert!(params.parallel_patterns);
    }

    #[test]
    fn test_empty_file_is_default() {
        let f = write_params("");
        assert_eq!(load_parameters(f.path()).unwrap(), Parameters::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let f = write_params("max_positions = 3\n");
        assert!(load_parameters(f.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_parameters(Path::new("/nonexistent/parameters.toml")).is_err());
    }

    #[test]
    fn test_global_getters() {
        // No parameters.toml sits next to the test binary.
        assert_eq!(*max_reported_positions().unwrap(), 10);
        assert!(*parallel_patterns().unwrap());
    }
}
