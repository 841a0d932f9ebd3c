//! Division roster and name normalization.
//!
//! Divisions are fixed administrative jurisdictions. The roster is
//! configuration data, not code: the defaults below match the city's
//! operational divisions but can be overridden from config.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default operational divisions.
pub const DEFAULT_DIVISIONS: [&str; 14] = [
    "Alandi",
    "Bavdhan",
    "Bhosari",
    "Chakan",
    "Chinchwad",
    "Dehu Road",
    "Hinjewadi",
    "Mahalunge",
    "Nigdi",
    "Pimpri",
    "Sangvi",
    "Talegaon",
    "Talwade",
    "Wakad",
];

/// Normalizes a raw division name for roster matching.
///
/// Lowercases the whole string, then uppercases the first character of each
/// whitespace-delimited word. "mahalunge" and "MAHALUNGE" both normalize to
/// "Mahalunge"; stray surrounding whitespace is dropped.
pub fn normalize_division(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The allow-list of known divisions.
///
/// Entries are stored normalized; membership checks expect an already
/// normalized name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionRoster {
    divisions: BTreeSet<String>,
}

impl DivisionRoster {
    /// Builds a roster from raw names, normalizing each entry.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            divisions: names
                .into_iter()
                .map(|n| normalize_division(n.as_ref()))
                .collect(),
        }
    }

    /// Whether a normalized name is on the roster.
    pub fn contains(&self, normalized: &str) -> bool {
        self.divisions.contains(normalized)
    }

    /// Roster entries in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.divisions.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.divisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.divisions.is_empty()
    }
}

impl Default for DivisionRoster {
    fn default() -> Self {
        Self::new(DEFAULT_DIVISIONS)
    }
}
