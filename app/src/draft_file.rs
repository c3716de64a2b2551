//! Registration drafts written as TOML, keyed by the form's field names
//!
//! ```toml
//! email = "ana@uez.com.br"
//! nome = "ana souza"
//! userType = "CLIENTE"
//! dataNascimento = 1990-05-17
//!
//! [endereco]
//! numero = "42"
//! ```

use anyhow::{anyhow, bail, Context, Result};
use std::collections::BTreeMap;
use std::path::Path;
use toml::{Table, Value};
use uez_core::domain::DraftField;
use uez_core::wizard::WizardStep;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftFile {
    values: BTreeMap<DraftField, String>,
}

impl DraftFile {
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read draft file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid draft file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let table: Table = text.parse()?;
        let mut values = BTreeMap::new();
        flatten("", &table, &mut values)?;
        Ok(Self { values })
    }

    pub fn value(&self, field: DraftField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Values for the fields shown on `step`, in form order
    pub fn for_step(&self, step: WizardStep) -> impl Iterator<Item = (DraftField, &str)> {
        self.values
            .iter()
            .filter(move |(field, _)| WizardStep::of_field(**field) == step)
            .map(|(field, value)| (*field, value.as_str()))
    }
}

fn flatten(prefix: &str, table: &Table, out: &mut BTreeMap<DraftField, String>) -> Result<()> {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        let text = match value {
            Value::Table(nested) => {
                flatten(&path, nested, out)?;
                continue;
            }
            Value::String(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            Value::Datetime(d) => d.to_string(),
            other => bail!("Field {} has unsupported value {}", path, other),
        };

        let field: DraftField = path.parse().map_err(|e: String| anyhow!(e))?;
        out.insert(field, text);
    }
    Ok(())
}
