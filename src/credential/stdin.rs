//! Credential records piped on stdin.
//!
//! The payload is a single JSON document:
//!
//! ```json
//! {"service": "aws", "credential": {"accessKeyId": "...", "secretAccessKey": "..."}}
//! ```
//!
//! It is decoded as-is. The provider schema is not consulted, so any service
//! name and any set of fields is accepted.

use std::io::{Read, Write};

use crate::error::{Error, Result};
use crate::output::{self, OutputConfig};

use super::{Credential, CredentialSource};

/// Notice shown when the piped document cannot be decoded.
pub const MSG_INVALID_INPUT: &str =
    r#"invalid input, expected {"service": "<name>", "credential": {"<field>": "<value>"}}"#;

/// Read one JSON document from `reader` and decode it into a [`Credential`].
///
/// A read failure is an [`Error::Input`]. A document of the wrong shape
/// writes [`MSG_INVALID_INPUT`] to `notices` and returns
/// [`Error::MalformedInput`].
pub fn resolve_from_reader<R: Read, W: Write + ?Sized>(
    mut reader: R,
    notices: &mut W,
    config: &OutputConfig,
) -> Result<Credential> {
    let mut document = String::new();
    reader
        .read_to_string(&mut document)
        .map_err(|e| Error::Input {
            message: format!("failed to read stdin: {}", e),
        })?;

    match serde_json::from_str::<Credential>(&document) {
        Ok(credential) => {
            log::debug!("decoded piped credential for '{}'", credential.service);
            Ok(credential)
        }
        Err(e) => {
            output::error(config, notices, MSG_INVALID_INPUT)?;
            Err(Error::MalformedInput {
                message: e.to_string(),
            })
        }
    }
}

/// [`CredentialSource`] reading a piped JSON document.
pub struct StdinSource<R, W> {
    reader: Option<R>,
    notices: W,
    config: OutputConfig,
}

impl<R: Read, W: Write> StdinSource<R, W> {
    pub fn new(reader: R, notices: W, config: OutputConfig) -> Self {
        Self {
            reader: Some(reader),
            notices,
            config,
        }
    }
}

impl<R: Read, W: Write> CredentialSource for StdinSource<R, W> {
    fn resolve(&mut self) -> Result<Credential> {
        let reader = self.reader.take().ok_or_else(|| Error::Input {
            message: "stdin was already consumed".to_string(),
        })?;
        resolve_from_reader(reader, &mut self.notices, &self.config)
    }
}
