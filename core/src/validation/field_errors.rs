use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uez_shared::utils::validation::ValidationErrors;

use crate::domain::DraftField;

/// One message slot per field, holding the first failing rule's message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<DraftField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Record the outcome of validating `field`: a message sets the slot,
    /// `None` clears it
    pub fn record(&mut self, field: DraftField, message: Option<String>) {
        match message {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn clear(&mut self, field: DraftField) {
        self.0.remove(&field);
    }

    pub fn contains(&self, field: DraftField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DraftField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl From<&FieldErrors> for ValidationErrors {
    fn from(errors: &FieldErrors) -> Self {
        let mut out = ValidationErrors::new();
        for (field, message) in errors.iter() {
            out.add_error(field.key(), message, "invalid");
        }
        out
    }
}
