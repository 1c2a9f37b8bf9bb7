use chrono::Utc;
use uuid::Uuid;

/// Generates a unique note identifier.
///
/// Hex-encoded wall-clock milliseconds plus a random v4 uuid suffix. Unique
/// within a running process with overwhelming probability; no coordination
/// with the store or the persisted blob is needed.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis();
    format!("{:x}-{}", millis, Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::generate_id;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_unique() {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(generate_id()));
        }
    }

    #[test]
    fn id_has_timestamp_and_suffix() {
        let id = generate_id();
        let (millis, suffix) = id.split_once('-').expect("id should contain a separator");
        assert!(i64::from_str_radix(millis, 16).is_ok());
        assert_eq!(suffix.len(), 32);
    }
}
