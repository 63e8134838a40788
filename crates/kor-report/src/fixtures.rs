//! Pod and ConfigMap builders shared by the unit tests

use std::collections::HashMap;

use k8s_openapi::api::core::v1::{
    ConfigMap, ConfigMapEnvSource, ConfigMapKeySelector, ConfigMapProjection,
    ConfigMapVolumeSource, Container, EnvFromSource, EnvVar, EnvVarSource, Namespace, Pod,
    PodSpec, ProjectedVolumeSource, Volume, VolumeProjection,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kor_k8s::{ClusterError, ClusterReader};

pub fn config_map_volume(name: &str) -> Volume {
    Volume {
        name: format!("{name}-vol"),
        config_map: Some(ConfigMapVolumeSource {
            name: name.to_string(),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn projected_volume(names: &[&str]) -> Volume {
    let sources = names
        .iter()
        .map(|name| VolumeProjection {
            config_map: Some(ConfigMapProjection {
                name: name.to_string(),
                ..Default::default()
            }),
            ..Default::default()
        })
        .collect();

    Volume {
        name: "projected".to_string(),
        projected: Some(ProjectedVolumeSource {
            sources: Some(sources),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn env_key_ref(config_map: &str, key: &str) -> EnvVar {
    EnvVar {
        name: key.to_string(),
        value_from: Some(EnvVarSource {
            config_map_key_ref: Some(ConfigMapKeySelector {
                name: config_map.to_string(),
                key: key.to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn env_from(config_map: &str) -> EnvFromSource {
    EnvFromSource {
        config_map_ref: Some(ConfigMapEnvSource {
            name: config_map.to_string(),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn container_with(env: Vec<EnvVar>, env_from: Vec<EnvFromSource>) -> Container {
    Container {
        name: "app".to_string(),
        env: Some(env),
        env_from: Some(env_from),
        ..Default::default()
    }
}

pub fn pod_with(volumes: Vec<Volume>, containers: Vec<Container>) -> Pod {
    Pod {
        spec: Some(PodSpec {
            volumes: Some(volumes),
            containers,
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn config_map(name: &str) -> ConfigMap {
    ConfigMap {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// In-memory cluster keyed by namespace
#[derive(Default)]
pub struct FakeCluster {
    /// Namespaces in listing order
    pub namespaces: Vec<String>,
    pub pods: HashMap<String, Vec<Pod>>,
    pub config_maps: HashMap<String, Vec<ConfigMap>>,
    /// Namespaces whose pod listing fails
    pub failing_pods: Vec<String>,
    /// Namespaces whose config map listing fails
    pub failing_config_maps: Vec<String>,
}

impl FakeCluster {
    pub fn with_namespace(mut self, namespace: &str, pods: Vec<Pod>, config_maps: &[&str]) -> Self {
        self.namespaces.push(namespace.to_string());
        self.pods.insert(namespace.to_string(), pods);
        self.config_maps.insert(
            namespace.to_string(),
            config_maps.iter().map(|n| config_map(n)).collect(),
        );
        self
    }
}

fn forbidden(resource: &str) -> kube::Error {
    kube::Error::Api(kube::error::ErrorResponse {
        status: "Failure".to_string(),
        message: format!("{resource} is forbidden"),
        reason: "Forbidden".to_string(),
        code: 403,
    })
}

impl ClusterReader for FakeCluster {
    async fn list_namespaces(&self) -> Result<Vec<Namespace>, ClusterError> {
        Ok(self
            .namespaces
            .iter()
            .map(|name| Namespace {
                metadata: ObjectMeta {
                    name: Some(name.clone()),
                    ..Default::default()
                },
                ..Default::default()
            })
            .collect())
    }

    async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>, ClusterError> {
        if self.failing_pods.iter().any(|ns| ns == namespace) {
            return Err(ClusterError::ListPods {
                namespace: namespace.to_string(),
                source: forbidden("pods"),
            });
        }
        Ok(self.pods.get(namespace).cloned().unwrap_or_default())
    }

    async fn list_config_maps(&self, namespace: &str) -> Result<Vec<ConfigMap>, ClusterError> {
        if self.failing_config_maps.iter().any(|ns| ns == namespace) {
            return Err(ClusterError::ListConfigMaps {
                namespace: namespace.to_string(),
                source: forbidden("configmaps"),
            });
        }
        Ok(self.config_maps.get(namespace).cloned().unwrap_or_default())
    }
}
