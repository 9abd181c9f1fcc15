//! # Set Credential Command Implementation
//!
//! This module implements `rit set credential`.
//!
//! ## Functionality
//!
//! - **Interactive mode**: Select a provider (or define a new one with its
//!   fields), then answer one prompt per field. Secret fields are masked.
//! - **Piped mode**: When stdin is not a terminal, a JSON document
//!   `{"service": "...", "credential": {...}}` is read from it instead and
//!   no prompt is shown.
//!
//! Both modes end by writing the record to `<home>/credentials/<service>`.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Args;

use rit::credential::{
    self, CredentialFiles, CredentialSource, FileSchemaStore, PromptSource, StdinSource,
};
use rit::defaults;
use rit::prompt::TerminalPrompter;
use rit::suggestions;

use crate::cli::Context;

/// Set credentials for Github, Gitlab, AWS, etc.
#[derive(Args, Debug)]
pub struct SetCredentialArgs {}

/// Execute the `set credential` command.
pub fn execute(ctx: &Context, _args: SetCredentialArgs) -> Result<()> {
    let store = FileSchemaStore::new(defaults::providers_path(&ctx.home));
    let setter = CredentialFiles::new(defaults::credentials_dir(&ctx.home));
    let mut prompter = TerminalPrompter::new();

    let stdin = io::stdin();
    let mut source: Box<dyn CredentialSource + '_> = if stdin.is_terminal() {
        log::debug!("stdin is a terminal, prompting for credential");
        Box::new(PromptSource::new(&store, &mut prompter))
    } else {
        log::debug!("stdin is piped, reading credential document");
        Box::new(StdinSource::new(stdin.lock(), io::stderr(), ctx.output.clone()))
    };

    credential::run(source.as_mut(), &setter, &mut io::stdout(), &ctx.output)
        .map_err(suggestions::with_hints)?;
    Ok(())
}
