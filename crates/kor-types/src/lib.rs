//! Shared types for kor
//!
//! This crate contains data structures used across multiple kor crates.

// ============================================================================
// Reference Types
// ============================================================================

/// How a Pod refers to a ConfigMap
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceSource {
    /// `spec.volumes[].configMap`
    Volume,
    /// `spec.volumes[].projected.sources[].configMap`
    ProjectedVolume,
    /// `containers[].env[].valueFrom.configMapKeyRef`
    Env,
    /// `containers[].envFrom[].configMapRef`
    EnvFrom,
}

impl ReferenceSource {
    pub const ALL: [ReferenceSource; 4] = [
        ReferenceSource::Volume,
        ReferenceSource::ProjectedVolume,
        ReferenceSource::Env,
        ReferenceSource::EnvFrom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceSource::Volume => "volume",
            ReferenceSource::ProjectedVolume => "projected volume",
            ReferenceSource::Env => "env",
            ReferenceSource::EnvFrom => "envFrom",
        }
    }
}

impl std::fmt::Display for ReferenceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ConfigMap names referenced by the Pods of one namespace, one partition per
/// [`ReferenceSource`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigMapReferences {
    pub volumes: Vec<String>,
    pub projected: Vec<String>,
    pub env: Vec<String>,
    pub env_from: Vec<String>,
}

impl ConfigMapReferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reference. Empty names are ignored.
    pub fn push(&mut self, source: ReferenceSource, name: &str) {
        if name.is_empty() {
            return;
        }
        self.partition_mut(source).push(name.to_string());
    }

    pub fn partition(&self, source: ReferenceSource) -> &[String] {
        match source {
            ReferenceSource::Volume => &self.volumes,
            ReferenceSource::ProjectedVolume => &self.projected,
            ReferenceSource::Env => &self.env,
            ReferenceSource::EnvFrom => &self.env_from,
        }
    }

    fn partition_mut(&mut self, source: ReferenceSource) -> &mut Vec<String> {
        match source {
            ReferenceSource::Volume => &mut self.volumes,
            ReferenceSource::ProjectedVolume => &mut self.projected,
            ReferenceSource::Env => &mut self.env,
            ReferenceSource::EnvFrom => &mut self.env_from,
        }
    }

    /// Total number of recorded references, duplicates included
    pub fn len(&self) -> usize {
        ReferenceSource::ALL
            .iter()
            .map(|s| self.partition(*s).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every referenced name across all partitions
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        ReferenceSource::ALL
            .into_iter()
            .flat_map(move |s| self.partition(s).iter().map(String::as_str))
    }

    /// Apply `f` to each partition independently
    pub fn map_partitions(self, mut f: impl FnMut(Vec<String>) -> Vec<String>) -> Self {
        Self {
            volumes: f(self.volumes),
            projected: f(self.projected),
            env: f(self.env),
            env_from: f(self.env_from),
        }
    }
}

// ============================================================================
// Report Types
// ============================================================================

/// Result of scanning one namespace
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceReport {
    pub namespace: String,
    /// Sorted, deduplicated names of ConfigMaps nothing refers to
    pub unused: Vec<String>,
}

impl NamespaceReport {
    pub fn new(namespace: String, unused: Vec<String>) -> Self {
        Self { namespace, unused }
    }
}
