//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the `rit`
//! command-line tool. Each subcommand is defined in its own file to keep the
//! logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments, derived
//!   using `clap`.
//! - An `execute` function that takes the shared [`crate::cli::Context`] and
//!   the parsed `Args`, builds the file-backed services and the terminal
//!   prompter, and calls into the `rit` library.

pub mod add_repo;
pub mod list_repo;
pub mod set_credential;
