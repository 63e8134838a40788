use k8s_openapi::api::core::v1::{EnvFromSource, EnvVar, Pod, PodSpec};
use kor_k8s::{ClusterError, ClusterReader};

use kor_types::{ConfigMapReferences, ReferenceSource};

/// List the Pods of a namespace and collect their ConfigMap references
pub async fn retrieve_references<R: ClusterReader>(
    reader: &R,
    namespace: &str,
) -> Result<ConfigMapReferences, ClusterError> {
    let pods = reader.list_pods(namespace).await?;
    let refs = collect_references(&pods);
    for source in ReferenceSource::ALL {
        tracing::trace!(
            namespace,
            source = %source,
            count = refs.partition(source).len(),
            "references by source"
        );
    }
    tracing::debug!(
        namespace,
        pods = pods.len(),
        references = refs.len(),
        "collected config map references"
    );
    Ok(refs)
}

/// Collect every ConfigMap name the given Pods refer to, regardless of phase
///
/// Regular, init, and ephemeral containers are all inspected.
pub fn collect_references(pods: &[Pod]) -> ConfigMapReferences {
    let mut refs = ConfigMapReferences::new();
    for spec in pods.iter().filter_map(|p| p.spec.as_ref()) {
        collect_from_volumes(spec, &mut refs);

        let init = spec.init_containers.iter().flatten();
        for container in spec.containers.iter().chain(init) {
            collect_from_env(container.env.as_deref(), container.env_from.as_deref(), &mut refs);
        }
        for container in spec.ephemeral_containers.iter().flatten() {
            collect_from_env(container.env.as_deref(), container.env_from.as_deref(), &mut refs);
        }
    }
    refs
}

fn collect_from_volumes(spec: &PodSpec, refs: &mut ConfigMapReferences) {
    for volume in spec.volumes.iter().flatten() {
        if let Some(cm) = &volume.config_map {
            refs.push(ReferenceSource::Volume, &cm.name);
        }

        let projections = volume
            .projected
            .as_ref()
            .and_then(|p| p.sources.as_ref())
            .into_iter()
            .flatten();
        for projection in projections {
            if let Some(cm) = &projection.config_map {
                refs.push(ReferenceSource::ProjectedVolume, &cm.name);
            }
        }
    }
}

fn collect_from_env(
    env: Option<&[EnvVar]>,
    env_from: Option<&[EnvFromSource]>,
    refs: &mut ConfigMapReferences,
) {
    for env in env.into_iter().flatten() {
        let key_ref = env
            .value_from
            .as_ref()
            .and_then(|v| v.config_map_key_ref.as_ref());
        if let Some(key_ref) = key_ref {
            refs.push(ReferenceSource::Env, &key_ref.name);
        }
    }

    for env_from in env_from.into_iter().flatten() {
        if let Some(cm) = &env_from.config_map_ref {
            refs.push(ReferenceSource::EnvFrom, &cm.name);
        }
    }
}
