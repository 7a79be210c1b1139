//! Sequential record ids.
//!
//! An id is the entity prefix followed by the collection length plus one,
//! zero-padded to three digits. Ids are a pure function of the collection
//! size, so a slot freed by a delete can be handed out again.

/// Builds the id for the next record appended to a collection of `len` records.
///
/// # Examples
/// ```
/// use event_desk::core::id::next_id;
/// assert_eq!(next_id("EVT", 3), "EVT004");
/// assert_eq!(next_id("PAY", 999), "PAY1000");
/// ```
#[must_use]
pub fn next_id(prefix: &str, len: usize) -> String {
    format!("{prefix}{:03}", len + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_first_record() {
        assert_eq!(next_id("EVT", 0), "EVT001");
    }

    #[test]
    fn test_next_id_sequence_under_pure_appends() {
        let ids: Vec<String> = (0..12).map(|len| next_id("DCR", len)).collect();
        assert_eq!(ids[0], "DCR001");
        assert_eq!(ids[8], "DCR009");
        assert_eq!(ids[9], "DCR010");
        assert_eq!(ids[11], "DCR012");
    }

    #[test]
    fn test_next_id_grows_past_three_digits() {
        assert_eq!(next_id("VND", 998), "VND999");
        assert_eq!(next_id("VND", 999), "VND1000");
    }
}
