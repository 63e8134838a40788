use std::future::Future;

use k8s_openapi::api::core::v1::{ConfigMap, Namespace, Pod};

use crate::ClusterError;

/// Read-only listing of the resources kor inspects
///
/// Implemented by [`crate::KubeClient`] against a live cluster; tests provide
/// in-memory implementations.
pub trait ClusterReader {
    fn list_namespaces(&self) -> impl Future<Output = Result<Vec<Namespace>, ClusterError>> + Send;

    fn list_pods(
        &self,
        namespace: &str,
    ) -> impl Future<Output = Result<Vec<Pod>, ClusterError>> + Send;

    fn list_config_maps(
        &self,
        namespace: &str,
    ) -> impl Future<Output = Result<Vec<ConfigMap>, ClusterError>> + Send;
}
