use serde::{Deserialize, Serialize};

use crate::validate::{self, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum EmployeeStatus {
    #[default]
    Active,
    OnLeave,
    Resigned,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 3] = [
        EmployeeStatus::Active,
        EmployeeStatus::OnLeave,
        EmployeeStatus::Resigned,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::OnLeave => "On leave",
            EmployeeStatus::Resigned => "Resigned",
        }
    }
}

/// Employee record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    pub joining_date: String,
    pub status: EmployeeStatus,
}

/// In-progress create/edit state for the employee form. All scalar fields
/// stay strings until submit so the inputs can hold partial values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub salary: String,
    pub joining_date: String,
    pub status: EmployeeStatus,
}

impl EmployeeDraft {
    pub fn from_record(record: &Employee) -> Self {
        Self {
            id: Some(record.id.clone()),
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            position: record.position.clone(),
            department: record.department.clone(),
            salary: trim_number(record.salary),
            joining_date: record.joining_date.clone(),
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
        validate::require(&mut errors, "department", &self.department, "Department");
        match self.salary.trim().parse::<f64>() {
            Ok(n) if n > 0.0 => {}
            _ => {
                errors.insert("salary", "Salary must be a positive number".to_string());
            }
        }
        validate::parse_date(&mut errors, "joiningDate", &self.joining_date, "Joining date");
        errors
    }
}

/// Render an f64 the way the form expects it back ("52000", not "52000.0").
pub fn trim_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Employee {
        Employee {
            id: "emp-1".to_string(),
            name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876501234".to_string(),
            position: "Backend Dev".to_string(),
            department: "Engineering".to_string(),
            salary: 52000.0,
            joining_date: "2024-01-15".to_string(),
            status: EmployeeStatus::Active,
        }
    }

    #[test]
    fn valid_draft_passes() {
        let draft = EmployeeDraft::from_record(&record());
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn edit_after_create_round_trips_the_payload() {
        // Submitting a draft and re-opening the refreshed record must yield
        // the same draft, modulo the server-assigned id.
        let mut submitted = EmployeeDraft::from_record(&record());
        submitted.id = None;

        let reopened = EmployeeDraft::from_record(&record());
        assert_eq!(reopened.id.as_deref(), Some("emp-1"));
        assert_eq!(
            EmployeeDraft { id: None, ..reopened },
            submitted
        );
    }

    #[test]
    fn bad_fields_all_reported_in_one_pass() {
        let draft = EmployeeDraft {
            email: "nope".to_string(),
            phone: "123".to_string(),
            salary: "-4".to_string(),
            ..EmployeeDraft::default()
        };
        let errors = draft.validate();
        for field in ["name", "email", "phone", "position", "department", "salary", "joiningDate"] {
            assert!(errors.contains_key(field), "missing error for {}", field);
        }
    }
}
