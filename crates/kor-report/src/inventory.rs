use k8s_openapi::api::core::v1::ConfigMap;
use kor_k8s::{ClusterError, ClusterReader};

/// List the names of all ConfigMaps in a namespace, in listing order
pub async fn retrieve_config_map_names<R: ClusterReader>(
    reader: &R,
    namespace: &str,
) -> Result<Vec<String>, ClusterError> {
    let config_maps = reader.list_config_maps(namespace).await?;
    Ok(config_map_names(&config_maps))
}

pub fn config_map_names(config_maps: &[ConfigMap]) -> Vec<String> {
    config_maps
        .iter()
        .filter_map(|cm| cm.metadata.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{FakeCluster, config_map};

    #[test]
    fn test_names_keep_listing_order() {
        let names = config_map_names(&[config_map("zeta"), config_map("alpha")]);
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_unnamed_entries_are_skipped() {
        let names = config_map_names(&[ConfigMap::default(), config_map("kube-root-ca.crt")]);
        assert_eq!(names, vec!["kube-root-ca.crt"]);
    }

    #[tokio::test]
    async fn test_retrieve_is_namespace_scoped() {
        let cluster = FakeCluster::default()
            .with_namespace("a", vec![], &["only-in-a"])
            .with_namespace("b", vec![], &["only-in-b"]);

        let names = retrieve_config_map_names(&cluster, "b").await.unwrap();
        assert_eq!(names, vec!["only-in-b"]);
    }
}
