use serde::{Deserialize, Serialize};

use crate::validate::{self, FieldErrors};

/// Website portfolio entry (project showcase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub link: Option<String>,
    /// Opaque reference to the stored cover image.
    pub image_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PortfolioDraft {
    pub id: Option<String>,
    pub title: String,
    pub category: String,
    pub description: String,
    pub link: String,
    pub existing_image_ref: Option<String>,
    pub new_image_name: Option<String>,
}

impl PortfolioDraft {
    pub fn from_record(record: &PortfolioItem) -> Self {
        Self {
            id: Some(record.id.clone()),
            title: record.title.clone(),
            category: record.category.clone(),
            description: record.description.clone(),
            link: record.link.clone().unwrap_or_default(),
            existing_image_ref: record.image_ref.clone(),
            new_image_name: None,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        validate::require(&mut errors, "title", &self.title, "Title");
        validate::require(&mut errors, "category", &self.category, "Category");
        validate::require(&mut errors, "description", &self.description, "Description");
        let link = self.link.trim();
        if !link.is_empty() && !(link.starts_with("http://") || link.starts_with("https://")) {
            errors.insert("link", "Link must start with http:// or https://".to_string());
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_scheme_is_checked_only_when_present() {
        let mut draft = PortfolioDraft {
            title: "Intranet revamp".to_string(),
            category: "Web".to_string(),
            description: "Internal portal".to_string(),
            ..PortfolioDraft::default()
        };
        assert!(draft.validate().is_empty());

        draft.link = "example.com".to_string();
        assert!(draft.validate().contains_key("link"));

        draft.link = "https://example.com".to_string();
        assert!(draft.validate().is_empty());
    }
}
