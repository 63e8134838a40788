use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the cluster boundary
#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("could not determine the home directory to locate a kubeconfig")]
    NoHomeDir,

    #[error("failed to load kubeconfig from {}", path.display())]
    Kubeconfig {
        path: PathBuf,
        #[source]
        source: kube::config::KubeconfigError,
    },

    #[error("failed to build cluster configuration")]
    ClientConfig(#[source] kube::config::KubeconfigError),

    #[error("failed to create Kubernetes client")]
    Client(#[source] kube::Error),

    #[error("failed to list namespaces")]
    ListNamespaces(#[source] kube::Error),

    #[error("failed to list pods in namespace {namespace}")]
    ListPods {
        namespace: String,
        #[source]
        source: kube::Error,
    },

    #[error("failed to list config maps in namespace {namespace}")]
    ListConfigMaps {
        namespace: String,
        #[source]
        source: kube::Error,
    },
}

impl ClusterError {
    /// Setup failures end the run; listing failures inside a namespace do not
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            ClusterError::ListPods { .. } | ClusterError::ListConfigMaps { .. }
        )
    }
}
