//! Field value collection for a chosen provider.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::prompt::Prompter;

use super::{FieldDef, FieldKind};

/// Reads the value of one field. The second argument is the prompt label.
type FieldReader = fn(&mut dyn Prompter, &str) -> Result<String>;

/// Which prompt reads which kind of field.
const FIELD_READERS: &[(FieldKind, FieldReader)] = &[
    (FieldKind::PlainText, read_plain),
    (FieldKind::Secret, read_secret),
];

fn read_plain(prompter: &mut dyn Prompter, label: &str) -> Result<String> {
    prompter.text(label, true)
}

fn read_secret(prompter: &mut dyn Prompter, label: &str) -> Result<String> {
    prompter.password(label)
}

fn reader_for(kind: FieldKind) -> Result<FieldReader> {
    FIELD_READERS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, reader)| *reader)
        .ok_or_else(|| Error::UnsupportedFieldKind {
            kind: kind.to_string(),
        })
}

/// Prompt for every field in order and return the values by field name.
///
/// The first failing prompt aborts collection and nothing is returned. If
/// two fields share a name, the later answer wins.
pub fn collect(
    prompter: &mut dyn Prompter,
    fields: &[FieldDef],
) -> Result<BTreeMap<String, String>> {
    let mut values = BTreeMap::new();
    for field in fields {
        let read = reader_for(field.kind)?;
        let value = read(prompter, &format!("{}:", field.name))?;
        values.insert(field.name.clone(), value);
    }
    Ok(values)
}
