use serde::{Deserialize, Serialize};

use crate::validate::{self, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum PositionStatus {
    #[default]
    Open,
    Closed,
}

impl PositionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PositionStatus::Open => "Open",
            PositionStatus::Closed => "Closed",
        }
    }
}

/// Open position published on the website careers page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenPosition {
    pub id: String,
    pub department: String,
    pub position: String,
    pub job_type: String,
    pub experience: String,
    pub duties: Vec<String>,
    pub needs: Vec<String>,
    pub benefits: Vec<String>,
    pub status: PositionStatus,
}

impl OpenPosition {
    /// Case-insensitive substring match across department, position and
    /// job type, the three fields the careers search covers.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.department.to_lowercase().contains(&q)
            || self.position.to_lowercase().contains(&q)
            || self.job_type.to_lowercase().contains(&q)
    }
}

/// Form draft; the three list fields are edited as one-per-line text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PositionDraft {
    pub id: Option<String>,
    pub department: String,
    pub position: String,
    pub job_type: String,
    pub experience: String,
    pub duties: String,
    pub needs: String,
    pub benefits: String,
    pub status: PositionStatus,
}

/// JSON payload sent on create/update, with the line-edited fields split
/// back into arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub department: String,
    pub position: String,
    pub job_type: String,
    pub experience: String,
    pub duties: Vec<String>,
    pub needs: Vec<String>,
    pub benefits: Vec<String>,
    pub status: PositionStatus,
}

fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

impl PositionDraft {
    pub fn from_record(record: &OpenPosition) -> Self {
        Self {
            id: Some(record.id.clone()),
            department: record.department.clone(),
            position: record.position.clone(),
            job_type: record.job_type.clone(),
            experience: record.experience.clone(),
            duties: record.duties.join("\n"),
            needs: record.needs.join("\n"),
            benefits: record.benefits.join("\n"),
            status: record.status,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        validate::require(&mut errors, "department", &self.department, "Department");
        validate::require(&mut errors, "position", &self.position, "Position");
        validate::require(&mut errors, "jobType", &self.job_type, "Job type");
        validate::require(&mut errors, "experience", &self.experience, "Experience");
        if split_lines(&self.duties).is_empty() {
            errors.insert("duties", "List at least one duty".to_string());
        }
        errors
    }

    pub fn to_payload(&self) -> PositionPayload {
        PositionPayload {
            id: self.id.clone(),
            department: self.department.trim().to_string(),
            position: self.position.trim().to_string(),
            job_type: self.job_type.trim().to_string(),
            experience: self.experience.trim().to_string(),
            duties: split_lines(&self.duties),
            needs: split_lines(&self.needs),
            benefits: split_lines(&self.benefits),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(department: &str, position: &str) -> OpenPosition {
        OpenPosition {
            id: department.to_lowercase(),
            department: department.to_string(),
            position: position.to_string(),
            job_type: "Full-time".to_string(),
            experience: "3+ years".to_string(),
            duties: vec!["Ship features".to_string()],
            needs: vec![],
            benefits: vec![],
            status: PositionStatus::Open,
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let records = [
            position("Engineering", "Backend Dev"),
            position("Sales", "Account Exec"),
        ];
        let hits: Vec<_> = records.iter().filter(|p| p.matches_query("eng")).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].department, "Engineering");
    }

    #[test]
    fn search_also_covers_job_type() {
        let mut p = position("Sales", "Account Exec");
        p.job_type = "Part-time".to_string();
        assert!(p.matches_query("part"));
    }

    #[test]
    fn line_fields_split_and_rejoin() {
        let record = OpenPosition {
            duties: vec!["One".to_string(), "Two".to_string()],
            ..position("Engineering", "Backend Dev")
        };
        let draft = PositionDraft::from_record(&record);
        assert_eq!(draft.duties, "One\nTwo");
        assert_eq!(draft.to_payload().duties, record.duties);
    }
}
