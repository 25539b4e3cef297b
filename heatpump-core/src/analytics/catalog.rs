use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::Observation;

/// One distinct (Location, Town) pair. Field names mirror the dataset's
/// column casing on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationEntry {
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Town")]
    pub town: String,
}

/// Distinct (Location, Town) pairs across the full record set, ascending
/// by location (ties broken by town), optionally narrowed by a
/// case-insensitive substring match on the town field.
///
/// An empty filter string behaves like no filter. Duplicate location
/// values with differing towns are kept as separate entries.
pub fn list_locations<'a, I>(records: I, town_filter: Option<&str>) -> Vec<LocationEntry>
where
    I: IntoIterator<Item = &'a Observation>,
{
    let needle = town_filter
        .filter(|f| !f.is_empty())
        .map(|f| f.to_lowercase());

    let mut pairs: BTreeSet<(String, String)> = BTreeSet::new();
    for rec in records {
        if let Some(needle) = &needle {
            if !rec.town.to_lowercase().contains(needle.as_str()) {
                continue;
            }
        }
        pairs.insert((rec.location.clone(), rec.town.clone()));
    }

    pairs
        .into_iter()
        .map(|(location, town)| LocationEntry { location, town })
        .collect()
}
