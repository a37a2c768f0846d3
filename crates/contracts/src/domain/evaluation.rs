use serde::{Deserialize, Serialize};

use crate::validate::{self, FieldErrors};

/// Letter grade derived from the monthly average. Boundary table:
/// >=95 A+, >=90 A, >=85 B+, >=80 B, >=75 C+, >=70 C, else D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    APlus,
    A,
    BPlus,
    B,
    CPlus,
    C,
    D,
}

impl Grade {
    pub fn from_average(avg: f64) -> Self {
        if avg >= 95.0 {
            Grade::APlus
        } else if avg >= 90.0 {
            Grade::A
        } else if avg >= 85.0 {
            Grade::BPlus
        } else if avg >= 80.0 {
            Grade::B
        } else if avg >= 75.0 {
            Grade::CPlus
        } else if avg >= 70.0 {
            Grade::C
        } else {
            Grade::D
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

/// One monthly performance entry. The four component grades are 0..=100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub id: String,
    pub employee_name: String,
    pub month: String,
    pub work: f64,
    pub leave: f64,
    pub time: f64,
    pub behaviour: f64,
}

impl Evaluation {
    pub fn average(&self) -> f64 {
        (self.work + self.leave + self.time + self.behaviour) / 4.0
    }

    pub fn grade(&self) -> Grade {
        Grade::from_average(self.average())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EvaluationDraft {
    pub id: Option<String>,
    pub employee_name: String,
    pub month: String,
    pub work: String,
    pub leave: String,
    pub time: String,
    pub behaviour: String,
}

impl EvaluationDraft {
    pub fn from_record(record: &Evaluation) -> Self {
        Self {
            id: Some(record.id.clone()),
            employee_name: record.employee_name.clone(),
            month: record.month.clone(),
            work: super::employee::trim_number(record.work),
            leave: super::employee::trim_number(record.leave),
            time: super::employee::trim_number(record.time),
            behaviour: super::employee::trim_number(record.behaviour),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        validate::require(&mut errors, "employeeName", &self.employee_name, "Employee");
        if super::salary::parse_month(&self.month).is_none() {
            errors.insert("month", "Month must be in YYYY-MM format".to_string());
        }
        validate::check_grade(&mut errors, "work", &self.work, "Work grade");
        validate::check_grade(&mut errors, "leave", &self.leave, "Leave grade");
        validate::check_grade(&mut errors, "time", &self.time, "Time grade");
        validate::check_grade(&mut errors, "behaviour", &self.behaviour, "Behaviour grade");
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluation(work: f64, leave: f64, time: f64, behaviour: f64) -> Evaluation {
        Evaluation {
            id: "ev-1".to_string(),
            employee_name: "Asha Verma".to_string(),
            month: "2025-03".to_string(),
            work,
            leave,
            time,
            behaviour,
        }
    }

    #[test]
    fn average_just_below_a_plus_boundary_stays_a() {
        let ev = evaluation(95.0, 100.0, 90.0, 93.0);
        assert_eq!(ev.average(), 94.5);
        assert_eq!(ev.grade(), Grade::A);
    }

    #[test]
    fn boundary_table_is_exact() {
        let cases = [
            (95.0, Grade::APlus),
            (94.999, Grade::A),
            (90.0, Grade::A),
            (89.999, Grade::BPlus),
            (85.0, Grade::BPlus),
            (80.0, Grade::B),
            (75.0, Grade::CPlus),
            (70.0, Grade::C),
            (69.999, Grade::D),
            (0.0, Grade::D),
        ];
        for (avg, expected) in cases {
            assert_eq!(Grade::from_average(avg), expected, "avg {}", avg);
        }
    }

    #[test]
    fn grade_labels() {
        assert_eq!(Grade::APlus.label(), "A+");
        assert_eq!(Grade::from_average(97.0).label(), "A+");
    }
}
