//! # rit CLI
//!
//! This is the binary entry point for the `rit` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Handing top-level errors back to the runtime, which prints them and
//!   exits with a non-zero status.
//!
//! The workflows live in the `rit` library crate; the binary only wires
//! the terminal, stdin and the file-backed stores into them.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
