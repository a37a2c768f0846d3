use serde::{Deserialize, Serialize};

use crate::validate::{self, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum InternStatus {
    #[default]
    Ongoing,
    Completed,
    Converted,
}

impl InternStatus {
    pub const ALL: [InternStatus; 3] = [
        InternStatus::Ongoing,
        InternStatus::Completed,
        InternStatus::Converted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InternStatus::Ongoing => "Ongoing",
            InternStatus::Completed => "Completed",
            InternStatus::Converted => "Converted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intern {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub university: String,
    pub mentor: String,
    pub start_date: String,
    pub duration_months: u32,
    pub stipend: f64,
    pub status: InternStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InternDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub university: String,
    pub mentor: String,
    pub start_date: String,
    pub duration_months: String,
    pub stipend: String,
    pub status: InternStatus,
}

impl InternDraft {
    pub fn from_record(record: &Intern) -> Self {
        Self {
            id: Some(record.id.clone()),
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            position: record.position.clone(),
            university: record.university.clone(),
            mentor: record.mentor.clone(),
            start_date: record.start_date.clone(),
            duration_months: record.duration_months.to_string(),
            stipend: super::employee::trim_number(record.stipend),
            status: record.status,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        validate::require(&mut errors, "name", &self.name, "Name");
        validate::require(&mut errors, "email", &self.email, "Email");
        validate::check_email(&mut errors, "email", &self.email);
        validate::require(&mut errors, "phone", &self.phone, "Phone");
        validate::check_phone(&mut errors, "phone", &self.phone, 10);
        validate::require(&mut errors, "position", &self.position, "Position");
        validate::require(&mut errors, "university", &self.university, "University");
        validate::parse_date(&mut errors, "startDate", &self.start_date, "Start date");
        match self.duration_months.trim().parse::<u32>() {
            Ok(n) if (1..=24).contains(&n) => {}
            _ => {
                errors.insert(
                    "durationMonths",
                    "Duration must be between 1 and 24 months".to_string(),
                );
            }
        }
        if !self.stipend.trim().is_empty() && self.stipend.trim().parse::<f64>().is_err() {
            errors.insert("stipend", "Stipend must be a number".to_string());
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_bounds() {
        let draft = InternDraft {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            phone: "9876501234".to_string(),
            position: "QA Intern".to_string(),
            university: "IIT Delhi".to_string(),
            start_date: "2025-07-01".to_string(),
            duration_months: "0".to_string(),
            ..InternDraft::default()
        };
        assert!(draft.validate().contains_key("durationMonths"));

        let ok = InternDraft {
            duration_months: "6".to_string(),
            ..draft
        };
        assert!(ok.validate().is_empty());
    }
}
