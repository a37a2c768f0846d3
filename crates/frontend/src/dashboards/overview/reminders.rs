use chrono::NaiveDate;

use contracts::dates::parse_record_datetime;
use contracts::domain::candidate::{Candidate, Stage};
use contracts::domain::leave::{LeaveRequest, LeaveStatus};

use crate::shared::storage::{KeyValueStore, StoreKey};

/// One entry in the dashboard reminder popup.
///
/// The queue is computed once at shell mount from (today, fetched
/// records); nothing else flips per-popup flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reminder {
    LeaveStartsToday { name: String },
    InterviewToday { candidate: String, time: String },
    PendingLeave { count: usize },
}

pub fn compute_reminders(
    today: NaiveDate,
    leaves: &[LeaveRequest],
    candidates: &[Candidate],
) -> Vec<Reminder> {
    let mut out = Vec::new();

    for leave in leaves {
        if leave.status != LeaveStatus::Approved {
            continue;
        }
        let starts = parse_record_datetime(&leave.start_date).map(|dt| dt.date());
        if starts == Some(today) {
            out.push(Reminder::LeaveStartsToday {
                name: leave.name.clone(),
            });
        }
    }

    for candidate in candidates {
        if candidate.stage != Stage::Interview {
            continue;
        }
        if let Some(at) = candidate.interview_at.as_deref().and_then(parse_record_datetime) {
            if at.date() == today {
                out.push(Reminder::InterviewToday {
                    candidate: candidate.name.clone(),
                    time: at.format("%H:%M").to_string(),
                });
            }
        }
    }

    let pending = leaves
        .iter()
        .filter(|l| l.status == LeaveStatus::Pending)
        .count();
    if pending > 0 {
        out.push(Reminder::PendingLeave { count: pending });
    }

    out
}

impl Reminder {
    pub fn text(&self) -> String {
        match self {
            Reminder::LeaveStartsToday { name } => format!("{} starts leave today", name),
            Reminder::InterviewToday { candidate, time } => {
                format!("Interview with {} at {}", candidate, time)
            }
            Reminder::PendingLeave { count } => {
                format!("{} leave request(s) waiting for a decision", count)
            }
        }
    }
}

/// At-most-once-per-day gate for the reminder popup, keyed by date.
pub fn should_show(store: &dyn KeyValueStore, key: &str, today: NaiveDate) -> bool {
    store.get(key).as_deref() != Some(&today.to_string())
}

pub fn mark_shown(store: &dyn KeyValueStore, key: &str, today: NaiveDate) {
    store.set(key, &today.to_string());
}

/// Browser-backed wrappers used by the dashboard.
pub fn should_show_today(today: NaiveDate) -> bool {
    let key = StoreKey::RemindersShownOn;
    let store = crate::shared::storage::BrowserStore::new(key.scope());
    should_show(&store, &key.name(), today)
}

pub fn mark_shown_today(today: NaiveDate) {
    let key = StoreKey::RemindersShownOn;
    let store = crate::shared::storage::BrowserStore::new(key.scope());
    mark_shown(&store, &key.name(), today);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn leave(name: &str, start: &str, status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            id: name.to_lowercase(),
            name: name.to_string(),
            start_date: start.to_string(),
            end_date: start.to_string(),
            reason: "personal".to_string(),
            status,
        }
    }

    fn candidate(name: &str, stage: Stage, interview_at: Option<&str>) -> Candidate {
        Candidate {
            id: name.to_lowercase(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "9876501234".to_string(),
            position: "Backend Dev".to_string(),
            experience: "4 years".to_string(),
            applied_at: "2025-06-01".to_string(),
            stage,
            resume_ref: None,
            interview_at: interview_at.map(str::to_string),
        }
    }

    #[test]
    fn queue_is_a_pure_function_of_today_and_records() {
        let today = day("2025-06-15");
        let leaves = [
            leave("Asha", "2025-06-15", LeaveStatus::Approved),
            leave("Ravi", "2025-06-16", LeaveStatus::Approved),
            leave("Meera", "2025-06-15", LeaveStatus::Pending),
        ];
        let candidates = [
            candidate("Vikram", Stage::Interview, Some("2025-06-15T10:00")),
            candidate("Divya", Stage::Interview, Some("2025-06-16T09:00")),
            candidate("Kiran", Stage::Applied, None),
        ];

        let queue = compute_reminders(today, &leaves, &candidates);
        assert_eq!(
            queue,
            vec![
                Reminder::LeaveStartsToday { name: "Asha".to_string() },
                Reminder::InterviewToday {
                    candidate: "Vikram".to_string(),
                    time: "10:00".to_string(),
                },
                Reminder::PendingLeave { count: 1 },
            ]
        );
    }

    #[test]
    fn popup_shows_once_per_day() {
        let store = MemoryStore::new();
        let today = day("2025-06-15");

        assert!(should_show(&store, "reminders", today));
        mark_shown(&store, "reminders", today);
        assert!(!should_show(&store, "reminders", today));

        // The next day it fires again.
        assert!(should_show(&store, "reminders", day("2025-06-16")));
    }
}
