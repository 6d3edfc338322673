//! core::registry
//!
//! Per-user remote-clone locations.
//!
//! # Overview
//!
//! The registry (`<home>/.skill-ops/registry.json`) maps remote identifiers
//! to absolute local clone paths. It is populated by an external clone
//! manager and is strictly read-only here. An absent registry file just
//! means "no remotes cloned yet" and loads as an empty mapping.
//!
//! The loader takes the registry path as an argument rather than deriving
//! it from the environment; [`crate::core::paths::default_registry_path`]
//! supplies the conventional location at the CLI boundary.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Failed to read the registry file.
    #[error("failed to read registry '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The registry file is not valid JSON for the expected schema.
    #[error("failed to parse registry '{path}': {message}")]
    Parse { path: PathBuf, message: String },
}

/// The per-user registry of known clones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    /// Remote identifier to absolute local clone path.
    #[serde(default)]
    pub clones: BTreeMap<String, PathBuf>,
}

impl Registry {
    /// Load the registry from the given path.
    ///
    /// An absent file is not an error; it loads as an empty registry.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        if !path.exists() {
            return Ok(Registry::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| RegistryError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&contents).map_err(|e| RegistryError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Look up the local clone path for a remote identifier.
    pub fn clone_path(&self, remote: &str) -> Option<&Path> {
        self.clones.get(remote).map(PathBuf::as_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_registry_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::load(&dir.path().join("registry.json")).unwrap();
        assert!(registry.clones.is_empty());
    }

    #[test]
    fn registry_parses_clone_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");
        fs::write(
            &path,
            r#"{ "clones": { "org-skills": "/srv/clones/org-skills" } }"#,
        )
        .unwrap();

        let registry = Registry::load(&path).unwrap();
        assert_eq!(
            registry.clone_path("org-skills"),
            Some(Path::new("/srv/clones/org-skills"))
        );
        assert_eq!(registry.clone_path("unknown"), None);
    }

    #[test]
    fn malformed_registry_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");
        fs::write(&path, "[]").unwrap();
        let err = Registry::load(&path).unwrap_err();
        assert!(matches!(err, RegistryError::Parse { .. }));
    }
}
