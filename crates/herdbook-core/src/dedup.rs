//! Order-preserving deduplication with detection of repeated keys.
//!
//! Both operations make a single pass over the input with a `HashSet` keyed
//! by the extracted value, so they run in O(n). The first occurrence of each
//! key wins and the relative order of survivors is preserved.
//!
//! The key extractor is an ordinary closure. Callers that want to compare
//! whole items use [`unique_values`] / [`unique_and_common_values`], which
//! use the item itself as the key. An extractor returning `Option<K>` groups
//! every keyless item together, apart from all keyed items.
use std::collections::HashSet;
use std::hash::Hash;

/// Removes items whose extracted key has already been seen.
///
/// The first occurrence of each key is kept; survivors stay in input order.
pub fn unique<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen: HashSet<K> = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

/// Deduplicates like [`unique`] and also returns the set of keys that
/// occurred more than once in the input.
///
/// A key is in the returned set if and only if it appears at least twice.
pub fn unique_and_common<T, K, F>(
    items: impl IntoIterator<Item = T>,
    key: F,
) -> (Vec<T>, HashSet<K>)
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen: HashSet<K> = HashSet::new();
    let mut common: HashSet<K> = HashSet::new();
    let mut survivors = Vec::new();

    for item in items {
        let k = key(&item);
        if seen.contains(&k) {
            common.insert(k);
        } else {
            seen.insert(k);
            survivors.push(item);
        }
    }

    (survivors, common)
}

/// [`unique`] keyed on the items themselves.
pub fn unique_values<T>(items: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    unique(items, T::clone)
}

/// [`unique_and_common`] keyed on the items themselves.
pub fn unique_and_common_values<T>(items: impl IntoIterator<Item = T>) -> (Vec<T>, HashSet<T>)
where
    T: Eq + Hash + Clone,
{
    unique_and_common(items, T::clone)
}
