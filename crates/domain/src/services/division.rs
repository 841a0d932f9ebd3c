//! Division grouping: normalize, filter to the roster, bucket.

use std::collections::BTreeMap;

use crate::models::activity::ActivityRecord;
use crate::models::division::{normalize_division, DivisionRoster};

/// Records bucketed by normalized division name.
///
/// Keys are exactly the distinct allowed normalized names present in the
/// input, never the full roster: a division with zero matching records does
/// not appear. Iteration order is sorted, so downstream outputs are stable.
#[derive(Debug, Default)]
pub struct DivisionGroups<'a> {
    groups: BTreeMap<String, Vec<&'a ActivityRecord>>,
}

impl<'a> DivisionGroups<'a> {
    /// Division names present in the grouped set, sorted.
    pub fn division_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Records for one division.
    pub fn records(&self, division: &str) -> &[&'a ActivityRecord] {
        self.groups.get(division).map(Vec::as_slice).unwrap_or(&[])
    }

    /// (division, records) pairs, sorted by division name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a ActivityRecord])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Groups records by normalized division, keeping only roster divisions.
///
/// Records whose normalized division is not on the roster are excluded here
/// but still participate in the status/type aggregates computed elsewhere.
pub fn group_by_division<'a>(
    records: &'a [ActivityRecord],
    roster: &DivisionRoster,
) -> DivisionGroups<'a> {
    let mut groups: BTreeMap<String, Vec<&ActivityRecord>> = BTreeMap::new();

    for record in records {
        let normalized = normalize_division(record.division_label());
        if !roster.contains(&normalized) {
            continue;
        }
        groups.entry(normalized).or_default().push(record);
    }

    DivisionGroups { groups }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, division: &str) -> ActivityRecord {
        ActivityRecord {
            id: id.into(),
            division_name: Some(division.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input() {
        let groups = group_by_division(&[], &DivisionRoster::default());
        assert!(groups.is_empty());
        assert_eq!(groups.division_names().count(), 0);
    }

    #[test]
    fn test_case_variants_share_a_group() {
        let records = vec![
            record("a", "mahalunge"),
            record("b", "MAHALUNGE"),
            record("c", "Mahalunge"),
        ];
        let groups = group_by_division(&records, &DivisionRoster::default());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.records("Mahalunge").len(), 3);
    }

    #[test]
    fn test_unknown_divisions_excluded() {
        let records = vec![
            record("a", "Chakan"),
            record("b", "Nowhereville"),
            record("c", "Gotham"),
        ];
        let groups = group_by_division(&records, &DivisionRoster::default());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.records("Chakan").len(), 1);
        assert!(groups.records("Nowhereville").is_empty());
    }

    #[test]
    fn test_keys_are_subset_of_roster() {
        let roster = DivisionRoster::default();
        let records = vec![
            record("a", "chakan "),
            record("b", "wakad"),
            record("c", "atlantis"),
        ];
        let groups = group_by_division(&records, &roster);
        for name in groups.division_names() {
            assert!(roster.contains(name));
        }
    }

    #[test]
    fn test_zero_record_roster_divisions_absent() {
        let records = vec![record("a", "Chakan")];
        let groups = group_by_division(&records, &DivisionRoster::default());
        // Only Chakan appears, not the other 13 roster entries
        let names: Vec<&str> = groups.division_names().collect();
        assert_eq!(names, vec!["Chakan"]);
    }

    #[test]
    fn test_missing_division_falls_back_to_unknown_and_is_excluded() {
        let records = vec![ActivityRecord {
            id: "a".into(),
            ..Default::default()
        }];
        let groups = group_by_division(&records, &DivisionRoster::default());
        assert!(groups.is_empty());
    }

    #[test]
    fn test_grouping_is_order_independent() {
        let mut records = vec![
            record("a", "Chakan"),
            record("b", "Wakad"),
            record("c", "chakan"),
        ];
        let forward: Vec<(String, usize)> = group_by_division(&records, &DivisionRoster::default())
            .iter()
            .map(|(name, recs)| (name.to_string(), recs.len()))
            .collect();
        records.reverse();
        let backward: Vec<(String, usize)> = group_by_division(&records, &DivisionRoster::default())
            .iter()
            .map(|(name, recs)| (name.to_string(), recs.len()))
            .collect();
        assert_eq!(forward, backward);
    }
}
