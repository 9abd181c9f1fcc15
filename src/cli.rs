//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use rit::defaults;
use rit::output::OutputConfig;

use crate::commands;

/// rit - Manage formula repositories and provider credentials
#[derive(Parser, Debug)]
#[command(name = "rit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Directory holding rit state (providers, credentials, repositories).
    ///
    /// Defaults to `~/.rit`.
    #[arg(long, global = true, value_name = "DIR", env = "RIT_HOME")]
    home: Option<PathBuf>,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add resources
    Add(AddArgs),

    /// List resources
    List(ListArgs),

    /// Set resources
    Set(SetArgs),
}

#[derive(Args, Debug)]
struct AddArgs {
    #[command(subcommand)]
    target: AddTarget,
}

#[derive(Subcommand, Debug)]
enum AddTarget {
    /// Add a repository.
    Repo(commands::add_repo::AddRepoArgs),
}

#[derive(Args, Debug)]
struct ListArgs {
    #[command(subcommand)]
    target: ListTarget,
}

#[derive(Subcommand, Debug)]
enum ListTarget {
    /// List all repositories.
    Repo(commands::list_repo::ListRepoArgs),
}

#[derive(Args, Debug)]
struct SetArgs {
    #[command(subcommand)]
    target: SetTarget,
}

#[derive(Subcommand, Debug)]
enum SetTarget {
    /// Set credentials for Github, Gitlab, AWS, etc.
    ///
    /// Prompts for a provider and its fields. When stdin is piped, reads a
    /// JSON document {"service": "...", "credential": {...}} instead.
    Credential(commands::set_credential::SetCredentialArgs),
}

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub home: PathBuf,
    pub output: OutputConfig,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let output = OutputConfig::from_env_and_flag(&self.color);
        console::set_colors_enabled(output.use_color);
        console::set_colors_enabled_stderr(output.use_color);

        let ctx = Context {
            home: self.home.unwrap_or_else(defaults::default_home),
            output,
        };
        log::debug!("using rit home {}", ctx.home.display());

        match self.command {
            Commands::Add(AddArgs {
                target: AddTarget::Repo(args),
            }) => commands::add_repo::execute(&ctx, args),
            Commands::List(ListArgs {
                target: ListTarget::Repo(args),
            }) => commands::list_repo::execute(&ctx, args),
            Commands::Set(SetArgs {
                target: SetTarget::Credential(args),
            }) => commands::set_credential::execute(&ctx, args),
        }
    }
}

/// `RUST_LOG` wins over `--log-level` when set.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A logger may already be installed when running inside tests.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
