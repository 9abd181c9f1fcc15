//! # Add Repo Command Implementation
//!
//! This module implements `rit add repo`, which registers a formula
//! repository. The user is prompted for the repository name, the URL of its
//! tree file, and its priority.

use anyhow::Result;
use clap::Args;

use rit::defaults;
use rit::output;
use rit::prompt::{Prompter, TerminalPrompter};
use rit::repository::{Adder, RepoRegistry, Repository};
use rit::suggestions;

use crate::cli::Context;

/// Add a repository.
#[derive(Args, Debug)]
pub struct AddRepoArgs {}

/// Execute the `add repo` command.
pub fn execute(ctx: &Context, _args: AddRepoArgs) -> Result<()> {
    let registry = RepoRegistry::new(defaults::repositories_path(&ctx.home));
    let mut prompter = TerminalPrompter::new();

    let repo = add_repo(&registry, &mut prompter).map_err(suggestions::with_hints)?;

    output::success(
        &ctx.output,
        &mut std::io::stdout(),
        &format!("Repository {} added!", repo.name),
    )?;
    Ok(())
}

/// Prompt for a repository and register it with `adder`.
fn add_repo(adder: &dyn Adder, prompter: &mut dyn Prompter) -> rit::error::Result<Repository> {
    let name = prompter.text("Name of the repository: ", true)?;
    let url = prompter.url("URL of the tree [http(s)://host:port/tree.json]: ", "")?;
    let priority = prompter.int(
        "Priority [ps.: 0 is higher priority, the lower higher the priority] :",
    )?;

    let repo = Repository {
        name,
        url,
        priority,
    };
    adder.add(repo.clone())?;
    Ok(repo)
}
