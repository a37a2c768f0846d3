use serde::{Deserialize, Serialize};

use crate::validate::{self, FieldErrors};

/// Website culture-page entry (values, perks, office life).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultureEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CultureDraft {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub existing_image_ref: Option<String>,
    pub new_image_name: Option<String>,
}

impl CultureDraft {
    pub fn from_record(record: &CultureEntry) -> Self {
        Self {
            id: Some(record.id.clone()),
            title: record.title.clone(),
            description: record.description.clone(),
            existing_image_ref: record.image_ref.clone(),
            new_image_name: None,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        validate::require(&mut errors, "title", &self.title, "Title");
        validate::require(&mut errors, "description", &self.description, "Description");
        errors
    }
}
