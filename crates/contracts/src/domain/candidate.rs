use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::parse_record_datetime;
use crate::validate::{self, FieldErrors};

/// Hiring pipeline stage; also the tab set on the hiring page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    #[default]
    Applied,
    Shortlisted,
    Interview,
    Complete,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::Applied,
        Stage::Shortlisted,
        Stage::Interview,
        Stage::Complete,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Applied => "Applied",
            Stage::Shortlisted => "Shortlisted",
            Stage::Interview => "Interview",
            Stage::Complete => "Complete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub experience: String,
    pub applied_at: String,
    pub stage: Stage,
    /// Opaque reference to the stored resume; re-sent unchanged when no new
    /// file is chosen.
    pub resume_ref: Option<String>,
    /// Interview timestamp, set once the candidate reaches that stage.
    pub interview_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandidateDraft {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub experience: String,
    pub stage: Stage,
    pub interview_at: String,
    pub existing_resume_ref: Option<String>,
    pub new_resume_name: Option<String>,
}

impl CandidateDraft {
    pub fn from_record(record: &Candidate) -> Self {
        Self {
            id: Some(record.id.clone()),
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            position: record.position.clone(),
            experience: record.experience.clone(),
            stage: record.stage,
            interview_at: record.interview_at.clone().unwrap_or_default(),
            existing_resume_ref: record.resume_ref.clone(),
            new_resume_name: None,
        }
    }

    /// `today` is injected so the rule set stays a pure function.
    pub fn validate(&self, today: NaiveDate) -> FieldErrors {
        let mut errors = FieldErrors::new();
        validate::require(&mut errors, "name", &self.name, "Name");
        validate::require(&mut errors, "email", &self.email, "Email");
        validate::check_email(&mut errors, "email", &self.email);
        validate::require(&mut errors, "phone", &self.phone, "Phone");
        validate::check_phone(&mut errors, "phone", &self.phone, 10);
        validate::require(&mut errors, "position", &self.position, "Position");
        if self.stage == Stage::Interview {
            match parse_record_datetime(&self.interview_at) {
                Some(at) => {
                    validate::check_not_before_today(
                        &mut errors,
                        "interviewAt",
                        at.date(),
                        today,
                        "Interview date",
                    );
                }
                None => {
                    errors.insert(
                        "interviewAt",
                        "Interview date is required at the interview stage".to_string(),
                    );
                }
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> CandidateDraft {
        CandidateDraft {
            name: "Meera Nair".to_string(),
            email: "meera@example.com".to_string(),
            phone: "9876501234".to_string(),
            position: "Backend Dev".to_string(),
            experience: "4 years".to_string(),
            ..CandidateDraft::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn interview_stage_requires_a_date() {
        let mut d = draft();
        d.stage = Stage::Interview;
        assert!(d.validate(today()).contains_key("interviewAt"));

        d.interview_at = "2025-06-16T10:00".to_string();
        assert!(d.validate(today()).is_empty());
    }

    #[test]
    fn interview_cannot_be_scheduled_in_the_past() {
        let mut d = draft();
        d.stage = Stage::Interview;
        d.interview_at = "2025-06-14T10:00".to_string();
        assert!(d.validate(today()).contains_key("interviewAt"));
    }

    #[test]
    fn applied_stage_needs_no_date() {
        assert!(draft().validate(today()).is_empty());
    }
}
