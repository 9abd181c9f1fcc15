//! # Error Suggestions
//!
//! Helpers that turn library errors into user-facing errors with hints.
//! Errors should tell users what went wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rit::suggestions;
//!
//! workflow().map_err(suggestions::with_hints)?;
//! ```

use std::path::Path;

use crate::error::Error;

/// Generate an error for a provider schema file that cannot be read.
pub fn store_unreadable(path: &Path, message: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Provider schema unreadable: {path}\n\
         error: {message}\n\n\
         hint: Fix the JSON by hand, the expected shape is \
         {{\"provider\": [{{\"name\": \"token\", \"type\": \"secret\"}}]}}\n\
         hint: Delete the file to start over with the default providers",
        path = path.display()
    )
}

/// Generate an error for a piped credential document that does not decode.
pub fn malformed_input(message: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Malformed credential input: {message}\n\n\
         hint: Pipe a document like \
         {{\"service\": \"github\", \"credential\": {{\"token\": \"...\"}}}}\n\
         hint: Run the command in a terminal without piped input to be prompted instead"
    )
}

/// Generate an error for a provider name that is already taken.
pub fn provider_exists(name: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Provider '{name}' already exists\n\n\
         hint: Select '{name}' from the provider list to set its credential\n\
         hint: Choose a different name to define a new provider"
    )
}

/// Convert a library error into an `anyhow::Error`, attaching hints where
/// the fix is known.
pub fn with_hints(error: Error) -> anyhow::Error {
    match error {
        Error::StoreUnreadable { path, message } => store_unreadable(&path, &message),
        Error::MalformedInput { message } => malformed_input(&message),
        Error::ProviderExists { name } => provider_exists(&name),
        other => other.into(),
    }
}
