//! Cluster detection and per-cluster queue catalogs.
//!
//! Catalogs live as `<config_dir>/clusters/<cluster_name>.json`, one JSON
//! object per cluster mapping queue names to their properties. An unknown
//! cluster resolves to an empty catalog, never an error, so callers can
//! proceed without cluster-specific queue knowledge.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;

use crate::core::error::{Error, Result};
use crate::core::paths;

/// Clusters with shipped catalogs, matched against the machine hostname.
const KNOWN_CLUSTERS: &[&str] = &["guillimin", "mammouth", "helios", "hades"];

/// Properties of one scheduler queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cores: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpus: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_walltime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<String>>,

    /// Site-specific properties we do not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Queue name to queue properties, ordered for stable output.
pub type QueueCatalog = BTreeMap<String, QueueInfo>;

/// Identify the current cluster, if any.
///
/// `QDISPATCH_CLUSTER` wins when set (and empty means "no cluster");
/// otherwise the machine hostname is matched against the known cluster
/// names. `None` when nothing matches.
pub fn detect_cluster() -> Option<String> {
    if let Ok(name) = std::env::var("QDISPATCH_CLUSTER") {
        let name = name.trim().to_string();
        return if name.is_empty() { None } else { Some(name) };
    }

    let hostname = hostname()?;
    KNOWN_CLUSTERS
        .iter()
        .find(|cluster| hostname.contains(*cluster))
        .map(|cluster| cluster.to_string())
}

fn hostname() -> Option<String> {
    let output = Command::new("hostname").output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_lowercase())
}

/// Load the queue catalog for `cluster_name`.
///
/// `None` or a cluster without a catalog file yields an empty catalog. A
/// catalog file that exists but cannot be read or parsed is a configuration
/// error.
pub fn get_available_queues(cluster_name: Option<&str>) -> Result<QueueCatalog> {
    let name = match cluster_name {
        Some(name) => name,
        None => return Ok(QueueCatalog::new()),
    };

    load_catalog_file(&paths::cluster_catalog(name)?)
}

fn load_catalog_file(path: &Path) -> Result<QueueCatalog> {
    if !path.is_file() {
        return Ok(QueueCatalog::new());
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        Error::Config(format!(
            "Invalid queue catalog {}: {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_catalog_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = load_catalog_file(&dir.path().join("nowhere.json")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn no_cluster_is_empty_catalog() {
        assert!(get_available_queues(None).unwrap().is_empty());
    }

    #[test]
    fn catalog_parses_queue_properties() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guillimin.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"qwork": {{"cores": 16, "ram": 64.0, "max_walltime": "12:00:00"}},
                "qgpu": {{"cores": 8, "gpus": 2, "priority": "high"}}}}"#
        )
        .unwrap();

        let catalog = load_catalog_file(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog["qwork"].cores, Some(16));
        assert_eq!(catalog["qgpu"].gpus, Some(2));
        assert_eq!(
            catalog["qgpu"].extra.get("priority"),
            Some(&serde_json::json!("high"))
        );
    }

    #[test]
    fn malformed_catalog_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();
        let err = load_catalog_file(&path).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }
}
