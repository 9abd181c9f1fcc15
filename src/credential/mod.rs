//! # Credentials
//!
//! This module implements the `set credential` workflow. A credential is a
//! set of named values for a service ("provider"), such as a GitHub token or
//! an AWS key pair. Which fields a provider needs is described by the
//! provider schema, which users can extend interactively.
//!
//! ## Sources
//!
//! A [`Credential`] can come from two places, both behind
//! [`CredentialSource`]:
//!
//! - [`PromptSource`]: pick a provider (or define a new one) and answer one
//!   prompt per field. Secret fields use masked input.
//! - [`StdinSource`]: decode a complete JSON record piped to the command.
//!   This path trusts the payload and never consults the schema.
//!
//! Whatever the source, [`submit`] hands the record to a [`Setter`] and
//! confirms it to the user.

pub mod collector;
pub mod schema;
pub mod selector;
pub mod stdin;
pub mod store;

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::output::{self, OutputConfig};
use crate::prompt::Prompter;

pub use schema::{
    FileSchemaStore, MemorySchemaStore, ProviderChoice, ProviderSchema, SchemaStore,
};
pub use stdin::StdinSource;
pub use store::CredentialFiles;

/// How the value of a field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Echoed, non-empty text.
    #[serde(rename = "plain text", alias = "text")]
    PlainText,
    /// Masked input.
    #[serde(rename = "secret", alias = "password")]
    Secret,
}

impl FieldKind {
    /// Every kind, in the order offered when defining a field.
    pub const ALL: [FieldKind; 2] = [FieldKind::PlainText, FieldKind::Secret];

    pub fn label(self) -> &'static str {
        match self {
            FieldKind::PlainText => "plain text",
            FieldKind::Secret => "secret",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One named slot of a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn plain(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::PlainText)
    }

    pub fn secret(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Secret)
    }
}

/// A service name plus its filled-in field values.
///
/// Serialized as `{"service": "...", "credential": {"field": "value"}}`,
/// which is also the shape accepted on stdin.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub service: String,
    #[serde(rename = "credential")]
    pub values: BTreeMap<String, String>,
}

impl Credential {
    pub fn new(service: impl Into<String>, values: BTreeMap<String, String>) -> Self {
        Self {
            service: service.into(),
            values,
        }
    }
}

// Values are secrets, keep them out of logs and panic messages.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("service", &self.service)
            .field("fields", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Persists credential records.
pub trait Setter {
    /// Store `credential`, replacing any previous record for its service.
    fn set(&self, credential: &Credential) -> Result<()>;
}

/// Something that can produce a complete credential record.
pub trait CredentialSource {
    fn resolve(&mut self) -> Result<Credential>;
}

/// Interactive source: provider selection followed by field collection.
pub struct PromptSource<'a> {
    store: &'a dyn SchemaStore,
    prompter: &'a mut dyn Prompter,
}

impl<'a> PromptSource<'a> {
    pub fn new(store: &'a dyn SchemaStore, prompter: &'a mut dyn Prompter) -> Self {
        Self { store, prompter }
    }
}

impl CredentialSource for PromptSource<'_> {
    fn resolve(&mut self) -> Result<Credential> {
        self.store.ensure()?;
        let schema = self.store.load()?;

        let (service, schema) = selector::choose(self.store, &mut *self.prompter, schema)?;
        let fields = schema.get(&service).ok_or_else(|| Error::Input {
            message: format!("provider '{}' is not defined", service),
        })?;

        let values = collector::collect(&mut *self.prompter, fields)?;
        Ok(Credential::new(service, values))
    }
}

/// Hand `credential` to `setter` and confirm on `out`.
///
/// Setter failures are returned unchanged and nothing is printed.
pub fn submit<W: Write + ?Sized>(
    setter: &dyn Setter,
    credential: &Credential,
    out: &mut W,
    config: &OutputConfig,
) -> Result<()> {
    setter.set(credential)?;
    log::info!("stored credential for service '{}'", credential.service);

    let service = output::title_case(&credential.service);
    output::success(config, out, &format!("{} credential saved!", service))?;
    Ok(())
}

/// Resolve a record from `source` and submit it.
pub fn run<W: Write + ?Sized>(
    source: &mut dyn CredentialSource,
    setter: &dyn Setter,
    out: &mut W,
    config: &OutputConfig,
) -> Result<Credential> {
    let credential = source.resolve()?;
    submit(setter, &credential, out, config)?;
    Ok(credential)
}
