use std::collections::BTreeMap;

use serde::Serialize;

use crate::aggregate::constants::UNKNOWN_CATEGORY;
use crate::models::Measure;

/// Sum of one numeric field across a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GroupSum {
    pub total: f64,
    /// Items that contributed a value.
    pub counted: usize,
    /// Items whose value was missing (they add nothing to `total`).
    pub missing: usize,
}

impl GroupSum {
    pub fn add(&mut self, value: Measure) {
        match value.value() {
            Some(v) => {
                self.total += v;
                self.counted += 1;
            }
            None => self.missing += 1,
        }
    }

    pub fn len(&self) -> usize {
        self.counted + self.missing
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when no item in the group had a value.
    pub fn all_missing(&self) -> bool {
        self.counted == 0 && self.missing > 0
    }
}

/// Partition `items` by category, with absent categories under `fallback`.
///
/// Categories come out in byte-wise order of the raw label; items keep their
/// input order within a group.
pub fn group_with_fallback<I, T, K>(items: I, key: K, fallback: &str) -> BTreeMap<String, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Fn(&T) -> Option<&str>,
{
    let mut groups: BTreeMap<String, Vec<T>> = BTreeMap::new();
    for item in items {
        let label = key(&item).unwrap_or(fallback).to_string();
        groups.entry(label).or_default().push(item);
    }
    groups
}

/// Partition `items` by category; absent categories go to `"Unknown"`.
pub fn group_by<I, T, K>(items: I, key: K) -> BTreeMap<String, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Fn(&T) -> Option<&str>,
{
    group_with_fallback(items, key, UNKNOWN_CATEGORY)
}

/// Like [`group_by`], with each group sorted by `item_key`.
pub fn group_by_sorted<I, T, K, S>(items: I, key: K, item_key: S) -> BTreeMap<String, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Fn(&T) -> Option<&str>,
    S: Fn(&T) -> &str,
{
    let mut groups = group_by(items, key);
    for members in groups.values_mut() {
        members.sort_by(|a, b| item_key(a).cmp(item_key(b)));
    }
    groups
}

/// Sum `value` per category, with absent categories under `fallback`.
pub fn sum_with_fallback<I, T, K, V>(
    items: I,
    key: K,
    value: V,
    fallback: &str,
) -> BTreeMap<String, GroupSum>
where
    I: IntoIterator<Item = T>,
    K: Fn(&T) -> Option<&str>,
    V: Fn(&T) -> Measure,
{
    let mut sums: BTreeMap<String, GroupSum> = BTreeMap::new();
    for item in items {
        let label = key(&item).unwrap_or(fallback).to_string();
        sums.entry(label).or_default().add(value(&item));
    }
    sums
}

/// Sum `value` per category; absent categories go to `"Unknown"`.
pub fn sum_by<I, T, K, V>(items: I, key: K, value: V) -> BTreeMap<String, GroupSum>
where
    I: IntoIterator<Item = T>,
    K: Fn(&T) -> Option<&str>,
    V: Fn(&T) -> Measure,
{
    sum_with_fallback(items, key, value, UNKNOWN_CATEGORY)
}
