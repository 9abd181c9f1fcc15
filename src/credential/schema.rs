//! Provider schema storage.
//!
//! The provider schema maps each provider name to the ordered list of fields
//! a credential for it needs. It is read fully into memory and written back
//! fully whenever a provider is added.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::filesystem;

use super::FieldDef;

/// Provider name to its fields. Field order is collection order.
pub type ProviderSchema = BTreeMap<String, Vec<FieldDef>>;

/// Label shown for [`ProviderChoice::CreateNew`].
pub const NEW_PROVIDER_LABEL: &str = "Add a new";

/// One entry of the provider selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderChoice {
    Existing(String),
    CreateNew,
}

impl fmt::Display for ProviderChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderChoice::Existing(name) => f.write_str(name),
            ProviderChoice::CreateNew => f.write_str(NEW_PROVIDER_LABEL),
        }
    }
}

/// Provider choices in name order, with [`ProviderChoice::CreateNew`] last.
pub fn all_names(schema: &ProviderSchema) -> Vec<ProviderChoice> {
    schema
        .keys()
        .cloned()
        .map(ProviderChoice::Existing)
        .chain(std::iter::once(ProviderChoice::CreateNew))
        .collect()
}

/// The providers available before the user defines any.
pub fn default_schema() -> ProviderSchema {
    let user_token = || vec![FieldDef::plain("username"), FieldDef::secret("token")];

    BTreeMap::from([
        (
            "aws".to_string(),
            vec![
                FieldDef::plain("accessKeyId"),
                FieldDef::secret("secretAccessKey"),
            ],
        ),
        (
            "darwin".to_string(),
            vec![FieldDef::plain("username"), FieldDef::secret("password")],
        ),
        ("github".to_string(), user_token()),
        ("gitlab".to_string(), user_token()),
        ("jenkins".to_string(), user_token()),
        (
            "kubeconfig".to_string(),
            vec![FieldDef::secret("base64config")],
        ),
    ])
}

/// Backing storage for the provider schema.
pub trait SchemaStore {
    /// Write the default schema if nothing is stored yet. Never overwrites.
    fn ensure(&self) -> Result<()>;

    /// Read the whole schema. Fails with [`Error::StoreUnreadable`] if the
    /// data is missing or malformed.
    fn load(&self) -> Result<ProviderSchema>;

    /// Replace the stored schema. A failed save leaves the previous content.
    fn save(&self, schema: &ProviderSchema) -> Result<()>;
}

/// Schema kept in a JSON file, `{"provider": [{"name", "type"}, ...]}`.
#[derive(Debug, Clone)]
pub struct FileSchemaStore {
    path: PathBuf,
}

impl FileSchemaStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unreadable(&self, message: impl fmt::Display) -> Error {
        Error::StoreUnreadable {
            path: self.path.clone(),
            message: message.to_string(),
        }
    }

    fn write(&self, schema: &ProviderSchema) -> Result<()> {
        let mut contents = serde_json::to_vec_pretty(schema)?;
        contents.push(b'\n');
        filesystem::write_atomic(&self.path, &contents).map_err(|e| {
            Error::persistence(format!(
                "failed to write provider schema {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl SchemaStore for FileSchemaStore {
    fn ensure(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        log::info!("writing default provider schema to {}", self.path.display());
        self.write(&default_schema())
    }

    fn load(&self) -> Result<ProviderSchema> {
        let contents = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => self.unreadable("file does not exist"),
            _ => self.unreadable(e),
        })?;
        serde_json::from_str(&contents).map_err(|e| self.unreadable(e))
    }

    fn save(&self, schema: &ProviderSchema) -> Result<()> {
        log::debug!(
            "saving {} providers to {}",
            schema.len(),
            self.path.display()
        );
        self.write(schema)
    }
}

/// Schema held in memory, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemorySchemaStore {
    schema: RefCell<Option<ProviderSchema>>,
    saves: Cell<usize>,
}

impl MemorySchemaStore {
    /// A store with nothing in it; [`SchemaStore::ensure`] fills in the
    /// default schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `schema`.
    pub fn with_schema(schema: ProviderSchema) -> Self {
        Self {
            schema: RefCell::new(Some(schema)),
            saves: Cell::new(0),
        }
    }

    /// Current content, `None` if nothing was ever stored.
    pub fn snapshot(&self) -> Option<ProviderSchema> {
        self.schema.borrow().clone()
    }

    /// Number of successful [`SchemaStore::save`] calls.
    pub fn saves(&self) -> usize {
        self.saves.get()
    }
}

impl SchemaStore for MemorySchemaStore {
    fn ensure(&self) -> Result<()> {
        let mut schema = self.schema.borrow_mut();
        if schema.is_none() {
            *schema = Some(default_schema());
        }
        Ok(())
    }

    fn load(&self) -> Result<ProviderSchema> {
        self.schema
            .borrow()
            .clone()
            .ok_or_else(|| Error::StoreUnreadable {
                path: PathBuf::from("<memory>"),
                message: "no schema stored".to_string(),
            })
    }

    fn save(&self, schema: &ProviderSchema) -> Result<()> {
        *self.schema.borrow_mut() = Some(schema.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
