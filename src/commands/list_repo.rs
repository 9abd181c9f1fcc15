//! # List Repo Command Implementation
//!
//! This module implements `rit list repo`, which prints every registered
//! repository as a `NAME  URL` table, highest priority first.

use anyhow::Result;
use clap::Args;

use rit::defaults;
use rit::repository::{Lister, RepoRegistry, Repository};
use rit::suggestions;

use crate::cli::Context;

/// List all repositories.
#[derive(Args, Debug)]
pub struct ListRepoArgs {}

/// Execute the `list repo` command.
pub fn execute(ctx: &Context, _args: ListRepoArgs) -> Result<()> {
    let registry = RepoRegistry::new(defaults::repositories_path(&ctx.home));
    let repos = registry.list().map_err(suggestions::with_hints)?;

    println!("{}", render_table(&repos));
    Ok(())
}

/// Render repositories as a two-column table followed by a blank line.
fn render_table(repos: &[Repository]) -> String {
    let name_width = repos
        .iter()
        .map(|r| r.name.chars().count())
        .chain(std::iter::once("NAME".len()))
        .max()
        .unwrap_or_default();

    let mut table = String::new();
    let mut add_row = |name: &str, url: &str| {
        table.push_str(&format!("{:<width$}  {}", name, url, width = name_width));
        table.push('\n');
    };

    add_row("NAME", "URL");
    for repo in repos {
        add_row(&repo.name, &repo.url);
    }
    table
}
