//! Credential records stored as JSON files, one per service.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::filesystem;

use super::{Credential, Setter};

/// [`Setter`] writing each record to `<dir>/<service>`.
///
/// Files are plain JSON, created owner-only inside an owner-only directory.
/// There is no encryption.
#[derive(Debug, Clone)]
pub struct CredentialFiles {
    dir: PathBuf,
}

impl CredentialFiles {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path the record for `service` is written to.
    pub fn path_for(&self, service: &str) -> Result<PathBuf> {
        validate_service(service)?;
        Ok(self.dir.join(service))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

// The service name becomes a file name.
fn validate_service(service: &str) -> Result<()> {
    if service.trim().is_empty() {
        return Err(Error::persistence("service name is empty"));
    }
    if service.contains(['/', '\\']) || service == "." || service == ".." {
        return Err(Error::persistence(format!(
            "service name '{}' cannot be used as a file name",
            service
        )));
    }
    Ok(())
}

impl Setter for CredentialFiles {
    fn set(&self, credential: &Credential) -> Result<()> {
        let path = self.path_for(&credential.service)?;
        let contents = serde_json::to_vec_pretty(credential)?;

        filesystem::create_private_dir(&self.dir)
            .and_then(|_| filesystem::write_secret(&path, &contents))
            .map_err(|e| {
                Error::persistence(format!("failed to write {}: {}", path.display(), e))
            })?;

        log::debug!("wrote credential file {}", path.display());
        Ok(())
    }
}
