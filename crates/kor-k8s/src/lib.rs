//! Kubernetes client for kor
//!
//! This crate provides read-only Kubernetes API access for listing
//! namespaces, pods, and config maps.

mod client;
mod error;
mod reader;

pub use client::KubeClient;
pub use error::ClusterError;
pub use reader::ClusterReader;

// Re-export the resource types that appear in our public API
pub use k8s_openapi::api::core::v1::{ConfigMap, Namespace, Pod};
