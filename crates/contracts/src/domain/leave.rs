use serde::{Deserialize, Serialize};

use crate::validate::{self, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub status: LeaveStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

impl LeaveDraft {
    pub fn from_record(record: &LeaveRequest) -> Self {
        Self {
            id: Some(record.id.clone()),
            name: record.name.clone(),
            start_date: record.start_date.clone(),
            end_date: record.end_date.clone(),
            reason: record.reason.clone(),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        validate::require(&mut errors, "name", &self.name, "Name");
        let start = validate::parse_date(&mut errors, "startDate", &self.start_date, "Start date");
        let end = validate::parse_date(&mut errors, "endDate", &self.end_date, "End date");
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                errors.insert("endDate", "End date cannot be before start date".to_string());
            }
        }
        validate::require(&mut errors, "reason", &self.reason, "Reason");
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_before_start_is_rejected() {
        let draft = LeaveDraft {
            id: None,
            name: "Asha".to_string(),
            start_date: "2025-03-10".to_string(),
            end_date: "2025-03-05".to_string(),
            reason: "personal".to_string(),
        };
        let errors = draft.validate();
        assert_eq!(
            errors.get("endDate").map(String::as_str),
            Some("End date cannot be before start date")
        );
    }

    #[test]
    fn single_day_leave_is_fine() {
        let draft = LeaveDraft {
            id: None,
            name: "Asha".to_string(),
            start_date: "2025-03-10".to_string(),
            end_date: "2025-03-10".to_string(),
            reason: "personal".to_string(),
        };
        assert!(draft.validate().is_empty());
    }
}
