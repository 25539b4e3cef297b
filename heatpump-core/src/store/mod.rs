use crate::domain::Observation;

/// Immutable, in-memory view over the full observation set.
///
/// Constructed once at startup from the loaded dataset and shared across
/// requests behind an `Arc`. There is no writer after construction, so
/// concurrent readers need no locking; each query allocates its own
/// filtered subset and drops it on completion.
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<Observation>,
}

impl RecordStore {
    pub fn new(records: Vec<Observation>) -> Self {
        Self { records }
    }

    /// Exact, case-sensitive match against the normalized location field.
    ///
    /// An unknown location yields an empty vector; whether that is an
    /// error is the caller's decision.
    pub fn filter_by_location(&self, location: &str) -> Vec<&Observation> {
        self.records
            .iter()
            .filter(|rec| rec.location == location)
            .collect()
    }

    pub fn all(&self) -> &[Observation] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn obs(location: &str, town: &str) -> Observation {
        Observation::new(datetime!(2023-01-01 00:00:00 UTC), location, town, 1.0, 50.0)
    }

    #[test]
    fn filter_matches_exact_location() {
        let store = RecordStore::new(vec![obs("a", "t"), obs("b", "t"), obs("a", "t")]);

        assert_eq!(store.filter_by_location("a").len(), 2);
        assert_eq!(store.filter_by_location("b").len(), 1);
    }

    #[test]
    fn filter_is_case_sensitive() {
        let store = RecordStore::new(vec![obs("Tregattu 11", "Visby")]);

        assert_eq!(store.filter_by_location("Tregattu 11").len(), 1);
        assert!(store.filter_by_location("tregattu 11").is_empty());
    }

    #[test]
    fn unknown_location_yields_empty() {
        let store = RecordStore::new(vec![obs("a", "t")]);
        assert!(store.filter_by_location("nowhere").is_empty());
    }

    #[test]
    fn filter_matches_trimmed_form() {
        // Normalization happens in Observation::new, so a padded source
        // value is queryable by its trimmed form only.
        let store = RecordStore::new(vec![obs("  a  ", "t")]);

        assert_eq!(store.filter_by_location("a").len(), 1);
        assert!(store.filter_by_location("  a  ").is_empty());
    }
}
