use std::collections::BTreeSet;

use kor_types::ConfigMapReferences;

/// Deduplicate and sort names lexicographically (byte order)
pub fn remove_duplicates_and_sort(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Names from `inventory` that no reference points at, sorted and deduplicated
pub fn calculate_difference(references: &ConfigMapReferences, inventory: &[String]) -> Vec<String> {
    // Each partition is normalized on its own before the union.
    let used: BTreeSet<String> = references
        .clone()
        .map_partitions(remove_duplicates_and_sort)
        .iter()
        .map(str::to_string)
        .collect();

    let unused = inventory
        .iter()
        .filter(|name| !used.contains(name.as_str()))
        .cloned()
        .collect();

    remove_duplicates_and_sort(unused)
}
