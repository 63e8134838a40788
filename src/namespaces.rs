//! Namespace selection

/// Whether `namespace` is on the exclusion list
pub fn exclude_list_contains(exclude: &[String], namespace: &str) -> bool {
    exclude.iter().any(|excluded| excluded == namespace)
}

/// Pick the namespaces to scan, keeping cluster listing order
///
/// An empty `include` list means every namespace. Exclusions win over inclusions.
pub fn select_namespaces(all: Vec<String>, include: &[String], exclude: &[String]) -> Vec<String> {
    all.into_iter()
        .filter(|ns| include.is_empty() || include.contains(ns))
        .filter(|ns| !exclude_list_contains(exclude, ns))
        .collect()
}
