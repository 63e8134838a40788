//! ConfigMap usage reporting for kor
//!
//! This crate collects ConfigMap references from Pods, lists the ConfigMaps
//! that exist, and reports the ones nothing refers to.

mod collector;
mod diff;
mod format;
mod inventory;
mod scan;

pub use collector::{collect_references, retrieve_references};
pub use diff::{calculate_difference, remove_duplicates_and_sort};
pub use format::format_output;
pub use inventory::{config_map_names, retrieve_config_map_names};
pub use scan::{NamespaceOutcome, namespace_names, process_namespace, scan_namespaces};

// Re-export types used in our public API
pub use kor_types::{ConfigMapReferences, NamespaceReport, ReferenceSource};

#[cfg(test)]
pub(crate) mod fixtures;
