//! Configuration loading
//!
//! Settings come from command-line flags, then `~/.kor/config.toml`, then
//! built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::Args;

/// Contents of the optional TOML config file
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
    pub exclude_namespaces: Vec<String>,
    pub concurrency: Option<usize>,
}

impl FileConfig {
    /// Default config file location
    fn default_path() -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        Some(home.join(".kor").join("config.toml"))
    }

    /// Load the config file
    ///
    /// An explicitly requested file must exist. The default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Effective settings for a run
#[derive(Debug, PartialEq)]
pub struct Settings {
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
    pub namespaces: Vec<String>,
    pub exclude_namespaces: Vec<String>,
    pub concurrency: usize,
}

impl Settings {
    pub fn resolve(args: Args, file: FileConfig) -> Self {
        let mut exclude_namespaces = file.exclude_namespaces;
        for ns in args.exclude_namespaces {
            if !exclude_namespaces.contains(&ns) {
                exclude_namespaces.push(ns);
            }
        }

        Self {
            kubeconfig: args.kubeconfig.or(file.kubeconfig),
            context: args.context.or(file.context),
            namespaces: args.namespaces,
            exclude_namespaces,
            concurrency: args.concurrency.or(file.concurrency).unwrap_or(1).max(1),
        }
    }
}
