//! # rit Library
//!
//! This library provides the command workflows behind the `rit` command-line
//! tool: registering formula repositories and storing provider credentials.
//! Every interaction with the user and every persistence concern sits behind
//! a trait, so the workflows can be driven without a terminal.
//!
//! ## Quick Example
//!
//! ```
//! use rit::credential::{self, MemorySchemaStore, PromptSource, Setter, Credential};
//! use rit::output::OutputConfig;
//! use rit::prompt::{Answer, ScriptedPrompter};
//!
//! struct Discard;
//!
//! impl Setter for Discard {
//!     fn set(&self, _credential: &Credential) -> rit::error::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let store = MemorySchemaStore::new();
//! let mut prompter = ScriptedPrompter::new([
//!     Answer::choose("kubeconfig"),
//!     Answer::text("YXBpVmVyc2lvbjogdjE="),
//! ]);
//! let mut source = PromptSource::new(&store, &mut prompter);
//! let mut out = Vec::new();
//!
//! let config = OutputConfig::without_color();
//! let saved = credential::run(&mut source, &Discard, &mut out, &config).unwrap();
//! assert_eq!(saved.service, "kubeconfig");
//! assert_eq!(String::from_utf8(out).unwrap(), "[OK] Kubeconfig credential saved!\n");
//! ```
//!
//! ## Core Concepts
//!
//! - **Prompts (`prompt`)**: The [`prompt::Prompter`] trait with a terminal
//!   implementation and a scripted one.
//! - **Credentials (`credential`)**: Provider schema storage, provider
//!   selection and definition, field collection, piped input decoding, and
//!   submission to a [`credential::Setter`].
//! - **Repositories (`repository`)**: The [`repository::Adder`] and
//!   [`repository::Lister`] services and their JSON file registry.
//! - **Output (`output`)**: Color detection and user-facing message helpers.

pub mod credential;
pub mod defaults;
pub mod error;
pub mod filesystem;
pub mod output;
pub mod prompt;
pub mod repository;
pub mod suggestions;
