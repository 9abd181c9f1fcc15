//! Provider selection and interactive provider definition.

use crate::error::{Error, Result};
use crate::prompt::Prompter;

use super::schema::{all_names, ProviderChoice, ProviderSchema, SchemaStore};
use super::{FieldDef, FieldKind};

/// Ask the user for a provider.
///
/// Returns the chosen provider name and the schema. Picking an existing
/// provider returns the schema unchanged. Picking "add new" walks the user
/// through naming the provider and its fields, then registers it and saves
/// the schema through `store`. Nothing is saved if any prompt fails.
pub fn choose(
    store: &dyn SchemaStore,
    prompter: &mut dyn Prompter,
    mut schema: ProviderSchema,
) -> Result<(String, ProviderSchema)> {
    let choices = all_names(&schema);
    let labels: Vec<String> = choices.iter().map(ToString::to_string).collect();
    let index = prompter.select("Select your provider", &labels)?;

    match choices.into_iter().nth(index) {
        Some(ProviderChoice::Existing(name)) => Ok((name, schema)),
        Some(ProviderChoice::CreateNew) => {
            let (name, fields) = define_provider(prompter, &schema)?;
            log::info!(
                "registering provider '{}' with {} fields",
                name,
                fields.len()
            );
            schema.insert(name.clone(), fields);
            store.save(&schema)?;
            Ok((name, schema))
        }
        None => Err(Error::Input {
            message: format!("provider selection {} is out of range", index),
        }),
    }
}

/// Collect a new provider name and at least one field definition.
fn define_provider(
    prompter: &mut dyn Prompter,
    schema: &ProviderSchema,
) -> Result<(String, Vec<FieldDef>)> {
    let name = prompter.text("Define your provider name:", true)?;
    if schema.contains_key(&name) {
        return Err(Error::ProviderExists { name });
    }

    let kind_labels: Vec<String> = FieldKind::ALL.iter().map(ToString::to_string).collect();
    let mut fields = Vec::new();
    loop {
        let field_name =
            prompter.text("Define your field name: (ex.:token, secretAccessKey)", true)?;
        let index = prompter.select("Select your field type:", &kind_labels)?;
        let kind = FieldKind::ALL
            .get(index)
            .copied()
            .ok_or_else(|| Error::Input {
                message: format!("field type selection {} is out of range", index),
            })?;
        fields.push(FieldDef::new(field_name, kind));

        if !prompter.confirm("Add more fields to this provider?", false)? {
            break;
        }
    }

    Ok((name, fields))
}
