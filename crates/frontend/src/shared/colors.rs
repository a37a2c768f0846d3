//! Persistent label -> badge color assignment for position tags.
//!
//! The map lives in local storage and is read-modify-written without any
//! locking; two tabs racing can assign the same color twice, which is
//! acceptable for a purely cosmetic cache.

use std::collections::BTreeMap;

use crate::shared::storage::{self, KeyValueStore, StoreKey};

pub const BADGE_PALETTE: [&str; 8] = [
    "#2563eb", "#16a34a", "#d97706", "#dc2626", "#7c3aed", "#0891b2", "#be185d", "#4d7c0f",
];

fn load_map(store: &dyn KeyValueStore, key: &str) -> BTreeMap<String, String> {
    store
        .get(key)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Color for a label, assigning and persisting the next palette entry on
/// first sight. Assignment order wraps once the palette is exhausted.
pub fn color_for_label(store: &dyn KeyValueStore, key: &str, label: &str) -> String {
    let mut map = load_map(store, key);
    if let Some(color) = map.get(label) {
        return color.clone();
    }
    let color = BADGE_PALETTE[map.len() % BADGE_PALETTE.len()].to_string();
    map.insert(label.to_string(), color.clone());
    if let Ok(raw) = serde_json::to_string(&map) {
        store.set(key, &raw);
    }
    color
}

/// Browser-backed entry point used by the views.
pub fn badge_color(label: &str) -> String {
    let key = StoreKey::BadgeColors;
    let store = storage::BrowserStore::new(key.scope());
    color_for_label(&store, &key.name(), label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    #[test]
    fn labels_get_stable_colors() {
        let store = MemoryStore::new();
        let first = color_for_label(&store, "colors", "Backend Dev");
        let again = color_for_label(&store, "colors", "Backend Dev");
        assert_eq!(first, again);
    }

    #[test]
    fn distinct_labels_get_distinct_colors_until_the_palette_wraps() {
        let store = MemoryStore::new();
        let mut seen = Vec::new();
        for i in 0..BADGE_PALETTE.len() {
            seen.push(color_for_label(&store, "colors", &format!("Label {}", i)));
        }
        for (i, a) in seen.iter().enumerate() {
            for b in seen.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        // Ninth label wraps around to the first color.
        let wrapped = color_for_label(&store, "colors", "Label 8");
        assert_eq!(wrapped, BADGE_PALETTE[0]);
    }
}
