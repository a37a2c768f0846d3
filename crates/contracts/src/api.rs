use serde::{Deserialize, Serialize};

/// Response envelope used by every backend endpoint.
///
/// `message` carries the human-readable outcome (shown verbatim in error
/// toasts when the status is not ok), `total_items` is present on paged
/// list responses only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: Option<T>,
    pub message: Option<String>,
    #[serde(rename = "totalItems")]
    pub total_items: Option<usize>,
}

/// One page of a list endpoint, already unwrapped from the envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total_items: usize,
}

impl<T> ListPage<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_with_total() {
        let raw = r#"{"data":[1,2,3],"message":"ok","totalItems":42}"#;
        let env: ApiEnvelope<Vec<u32>> = serde_json::from_str(raw).unwrap();
        assert_eq!(env.data, Some(vec![1, 2, 3]));
        assert_eq!(env.total_items, Some(42));
    }

    #[test]
    fn envelope_without_optional_fields() {
        let raw = r#"{"data":null,"message":null}"#;
        let env: ApiEnvelope<Vec<u32>> = serde_json::from_str(raw).unwrap();
        assert!(env.data.is_none());
        assert!(env.total_items.is_none());
    }
}
