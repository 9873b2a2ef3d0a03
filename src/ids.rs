//! Identifier Generation
//!
//! Entity ids are opaque `<kind>-<millis>-<serial>` strings minted by the
//! UI layer before a command is dispatched. The store accepts ids but never
//! generates them.

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::Utc;

static SERIAL: AtomicU32 = AtomicU32::new(0);

/// Mint a unique id for a new entity, e.g. `generate_id("task")`.
pub fn generate_id(kind: &str) -> String {
    let serial = SERIAL.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}-{}", kind, Utc::now().timestamp_millis(), serial)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_carries_kind_prefix() {
        let id = generate_id("task");
        assert!(id.starts_with("task-"));
        assert_eq!(id.splitn(3, '-').count(), 3);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: Vec<String> = (0..100).map(|_| generate_id("person")).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }
}
