use serde::{Deserialize, Serialize};

use crate::validate::{self, FieldErrors};

/// Monthly salary entry. `slip_ref` points at the stored slip PDF; it is an
/// opaque backend reference and must be re-sent unchanged when the form is
/// saved without choosing a new file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    pub id: String,
    pub employee_name: String,
    pub month: String,
    pub basic: f64,
    pub allowances: f64,
    pub deductions: f64,
    pub net_pay: f64,
    pub slip_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SalaryDraft {
    pub id: Option<String>,
    pub employee_name: String,
    pub month: String,
    pub basic: String,
    pub allowances: String,
    pub deductions: String,
    /// Reference of the slip already stored on the server, if any.
    pub existing_slip_ref: Option<String>,
    /// Newly chosen slip file name, if the user picked or dropped one.
    pub new_slip_name: Option<String>,
}

pub fn compute_net(basic: f64, allowances: f64, deductions: f64) -> f64 {
    basic + allowances - deductions
}

fn parse_amount(errors: &mut FieldErrors, field: &'static str, value: &str, label: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(n) if n >= 0.0 => n,
        _ => {
            errors.insert(field, format!("{} must be a non-negative number", label));
            0.0
        }
    }
}

impl SalaryDraft {
    pub fn from_record(record: &SalaryRecord) -> Self {
        Self {
            id: Some(record.id.clone()),
            employee_name: record.employee_name.clone(),
            month: record.month.clone(),
            basic: super::employee::trim_number(record.basic),
            allowances: super::employee::trim_number(record.allowances),
            deductions: super::employee::trim_number(record.deductions),
            existing_slip_ref: record.slip_ref.clone(),
            new_slip_name: None,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        validate::require(&mut errors, "employeeName", &self.employee_name, "Employee");
        if parse_month(&self.month).is_none() {
            errors.insert("month", "Month must be in YYYY-MM format".to_string());
        }
        parse_amount(&mut errors, "basic", &self.basic, "Basic pay");
        parse_amount(&mut errors, "allowances", &self.allowances, "Allowances");
        parse_amount(&mut errors, "deductions", &self.deductions, "Deductions");
        errors
    }

    /// Net pay preview shown live in the form; 0 while fields are invalid.
    pub fn net_preview(&self) -> f64 {
        let mut scratch = FieldErrors::new();
        let basic = parse_amount(&mut scratch, "basic", &self.basic, "Basic pay");
        let allowances = parse_amount(&mut scratch, "allowances", &self.allowances, "Allowances");
        let deductions = parse_amount(&mut scratch, "deductions", &self.deductions, "Deductions");
        if scratch.is_empty() {
            compute_net(basic, allowances, deductions)
        } else {
            0.0
        }
    }
}

pub fn parse_month(raw: &str) -> Option<(i32, u32)> {
    let (y, m) = raw.trim().split_once('-')?;
    let year = y.parse::<i32>().ok()?;
    let month = m.parse::<u32>().ok()?;
    if y.len() == 4 && (1..=12).contains(&month) {
        Some((year, month))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_is_basic_plus_allowances_minus_deductions() {
        assert_eq!(compute_net(50000.0, 8000.0, 3000.0), 55000.0);
    }

    #[test]
    fn month_format() {
        assert_eq!(parse_month("2025-03"), Some((2025, 3)));
        assert_eq!(parse_month("2025-13"), None);
        assert_eq!(parse_month("25-03"), None);
        assert_eq!(parse_month("March"), None);
    }

    #[test]
    fn draft_keeps_existing_slip_reference() {
        let record = SalaryRecord {
            id: "sal-1".to_string(),
            employee_name: "Asha Verma".to_string(),
            month: "2025-03".to_string(),
            basic: 50000.0,
            allowances: 8000.0,
            deductions: 3000.0,
            net_pay: 55000.0,
            slip_ref: Some("slips/sal-1.pdf".to_string()),
        };
        let draft = SalaryDraft::from_record(&record);
        assert_eq!(draft.existing_slip_ref.as_deref(), Some("slips/sal-1.pdf"));
        assert!(draft.new_slip_name.is_none());
    }
}
