//
// Copyright (c) 2025 10x Genomics, Inc. All rights reserved.
//
//! bm_search
#![deny(missing_docs)]

use bm_search::{mylog, run, BmSearch};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    mylog::init_log();
    let args = BmSearch::parse();

    let stdout = std::io::stdout();
    if let Err(e) = run(&args, &mut stdout.lock()) {
        // write message and cause chain, exit code = 1
        eprintln!("{e}");
        for c in e.chain().skip(1) {
            eprintln!("\tCaused by: {c}");
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
