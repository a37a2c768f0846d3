/// Case-insensitive substring test used by every free-text facet.
pub fn text_contains(value: &str, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    value.to_lowercase().contains(&q)
}

/// Maximum entries in an autocomplete suggestion dropdown.
pub const SUGGESTION_CAP: usize = 10;

/// Distinct matching names for the search autocomplete, capped at
/// [`SUGGESTION_CAP`], in first-seen order.
pub fn suggestions<'a, I>(names: I, query: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<String> = Vec::new();
    for name in names {
        if out.len() == SUGGESTION_CAP {
            break;
        }
        if name.to_lowercase().contains(&q) && !out.iter().any(|n| n == name) {
            out.push(name.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        assert!(text_contains("anything", ""));
        assert!(text_contains("anything", "   "));
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(text_contains("Engineering", "eng"));
        assert!(text_contains("engineering", "ENG"));
        assert!(!text_contains("Sales", "eng"));
    }

    #[test]
    fn suggestions_are_distinct_and_capped() {
        let names: Vec<String> = (0..30).map(|i| format!("Employee {}", i)).collect();
        let mut with_dup: Vec<&str> = names.iter().map(String::as_str).collect();
        with_dup.insert(1, "Employee 0");

        let out = suggestions(with_dup, "employee");
        assert_eq!(out.len(), SUGGESTION_CAP);
        assert_eq!(out[0], "Employee 0");
        assert_eq!(out[1], "Employee 1", "duplicate must be skipped");
    }

    #[test]
    fn no_suggestions_for_empty_query() {
        assert!(suggestions(["Asha", "Ravi"], "").is_empty());
    }
}
