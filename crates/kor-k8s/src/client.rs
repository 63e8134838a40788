//! Kubernetes client for kor

use std::path::{Path, PathBuf};

use k8s_openapi::api::core::v1::{ConfigMap, Namespace, Pod};
use kube::Api;
use kube::api::ListParams;
use kube::config::{KubeConfigOptions, Kubeconfig};

use crate::{ClusterError, ClusterReader};

/// Kubernetes client wrapper
#[derive(Clone)]
pub struct KubeClient {
    client: kube::Client,
    context: Option<String>,
}

impl KubeClient {
    /// Create a new KubeClient from a kubeconfig file
    ///
    /// Falls back to `<home>/.kube/config` when no path is given, and to the
    /// kubeconfig's current context when no context is given.
    pub async fn new(kubeconfig: Option<&Path>, context: Option<&str>) -> Result<Self, ClusterError> {
        let path = match kubeconfig {
            Some(path) => path.to_path_buf(),
            None => Self::default_kubeconfig_path().ok_or(ClusterError::NoHomeDir)?,
        };

        tracing::debug!(path = %path.display(), "loading kubeconfig");
        let kubeconfig = Kubeconfig::read_from(&path)
            .map_err(|source| ClusterError::Kubeconfig { path, source })?;

        let context = context
            .map(str::to_string)
            .or_else(|| kubeconfig.current_context.clone());

        let config = kube::Config::from_custom_kubeconfig(
            kubeconfig,
            &KubeConfigOptions {
                context: context.clone(),
                ..Default::default()
            },
        )
        .await
        .map_err(ClusterError::ClientConfig)?;

        let client = kube::Client::try_from(config).map_err(ClusterError::Client)?;

        Ok(Self { client, context })
    }

    /// Conventional kubeconfig location: `<home>/.kube/config`
    pub fn default_kubeconfig_path() -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        Some(home.join(".kube").join("config"))
    }

    /// The context the client was built for
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl ClusterReader for KubeClient {
    async fn list_namespaces(&self) -> Result<Vec<Namespace>, ClusterError> {
        let namespaces: Api<Namespace> = Api::all(self.client.clone());
        let list = namespaces
            .list(&ListParams::default())
            .await
            .map_err(ClusterError::ListNamespaces)?;

        Ok(list.items)
    }

    async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>, ClusterError> {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let list = pods
            .list(&ListParams::default())
            .await
            .map_err(|source| ClusterError::ListPods {
                namespace: namespace.to_string(),
                source,
            })?;

        Ok(list.items)
    }

    async fn list_config_maps(&self, namespace: &str) -> Result<Vec<ConfigMap>, ClusterError> {
        let config_maps: Api<ConfigMap> = Api::namespaced(self.client.clone(), namespace);
        let list = config_maps
            .list(&ListParams::default())
            .await
            .map_err(|source| ClusterError::ListConfigMaps {
                namespace: namespace.to_string(),
                source,
            })?;

        Ok(list.items)
    }
}
