use futures::stream::{self, Stream, StreamExt};
use kor_k8s::{ClusterError, ClusterReader};
use kor_types::NamespaceReport;

use crate::{calculate_difference, retrieve_config_map_names, retrieve_references};

/// Compute the unused ConfigMaps of one namespace
///
/// Either every listing succeeds and a full report is returned, or the first
/// failure is returned and nothing else.
pub async fn process_namespace<R: ClusterReader>(
    reader: &R,
    namespace: &str,
) -> Result<NamespaceReport, ClusterError> {
    let references = retrieve_references(reader, namespace).await?;
    let inventory = retrieve_config_map_names(reader, namespace).await?;

    let unused = calculate_difference(&references, &inventory);
    tracing::debug!(
        namespace,
        config_maps = inventory.len(),
        unused = unused.len(),
        "namespace processed"
    );

    Ok(NamespaceReport::new(namespace.to_string(), unused))
}

/// A namespace paired with its report or the error that made it skip
pub type NamespaceOutcome = (String, Result<NamespaceReport, ClusterError>);

/// Fetch all namespace names from the cluster, in listing order
pub async fn namespace_names<R: ClusterReader>(reader: &R) -> Result<Vec<String>, ClusterError> {
    Ok(reader
        .list_namespaces()
        .await?
        .into_iter()
        .filter_map(|ns| ns.metadata.name)
        .collect())
}

/// Process namespaces with up to `concurrency` in flight
///
/// Outcomes are yielded in the order of `namespaces`. A failed namespace does
/// not stop the ones after it.
pub fn scan_namespaces<R: ClusterReader>(
    reader: &R,
    namespaces: Vec<String>,
    concurrency: usize,
) -> impl Stream<Item = NamespaceOutcome> + '_ {
    stream::iter(namespaces)
        .map(move |namespace| async move {
            let result = process_namespace(reader, &namespace).await;
            (namespace, result)
        })
        .buffered(concurrency.max(1))
}
