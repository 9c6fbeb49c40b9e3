use std::collections::BTreeMap;

use strsim::jaro_winkler;

use crate::models::FoodEntry;

/// Minimum Jaro-Winkler similarity for a fuzzy suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// The game dataset, keyed by ingredient name.
///
/// Entries are held for the whole run and never mutated after load.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    entries: BTreeMap<String, FoodEntry>,
}

impl FoodCatalog {
    /// Build a catalog from entries. A repeated name keeps the last entry.
    pub fn from_entries(entries: Vec<FoodEntry>) -> Self {
        let mut map = BTreeMap::new();
        for entry in entries {
            map.insert(entry.name.clone(), entry);
        }
        Self { entries: map }
    }

    /// Exact lookup by ingredient name.
    pub fn get(&self, name: &str) -> Option<&FoodEntry> {
        self.entries.get(name)
    }

    /// Lookup ignoring case; exact matches win.
    pub fn find(&self, name: &str) -> Option<&FoodEntry> {
        self.get(name).or_else(|| {
            let wanted = name.to_lowercase();
            self.entries.values().find(|e| e.key() == wanted)
        })
    }

    /// Close matches for a name that was not found, best first.
    pub fn suggest(&self, name: &str, limit: usize) -> Vec<&FoodEntry> {
        let wanted = name.to_lowercase();
        let mut candidates: Vec<(&FoodEntry, f64)> = self
            .entries
            .values()
            .map(|e| (e, jaro_winkler(&e.key(), &wanted)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.into_iter().take(limit).map(|(e, _)| e).collect()
    }

    /// Entries of one meal type, sorted by name.
    pub fn in_meal_type(&self, meal_type: &str) -> Vec<&FoodEntry> {
        self.entries
            .values()
            .filter(|e| e.meal_type.as_deref() == Some(meal_type))
            .collect()
    }

    /// All entries, sorted by name.
    pub fn entries(&self) -> impl Iterator<Item = &FoodEntry> {
        self.entries.values()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
