use crate::core::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base qdispatch config directory.
///
/// `QDISPATCH_CONFIG_DIR` overrides the default (`~/.config/qdispatch` on
/// Unix-likes, `%APPDATA%\qdispatch` on Windows).
pub fn qdispatch() -> Result<PathBuf> {
    if let Ok(dir) = env::var("QDISPATCH_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }

    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::Config("APPDATA environment variable not set on Windows".to_string())
        })?;
        Ok(PathBuf::from(appdata).join("qdispatch"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::Config("HOME environment variable not set on Unix-like system".to_string())
        })?;
        Ok(PathBuf::from(home).join(".config").join("qdispatch"))
    }
}

/// Per-cluster queue catalog directory.
pub fn clusters() -> Result<PathBuf> {
    Ok(qdispatch()?.join("clusters"))
}

/// Queue catalog file for one cluster.
pub fn cluster_catalog(cluster_name: &str) -> Result<PathBuf> {
    Ok(clusters()?.join(format!("{}.json", cluster_name)))
}
