//! core::manifest
//!
//! Per-project namespace declarations.
//!
//! # Overview
//!
//! The manifest (`<agent_dir>/skill-ops.json`) declares the project's skill
//! namespaces and their target paths. It is created once by [`Manifest::init`]
//! and read thereafter; manual edits are expected, this tool never rewrites it.
//!
//! # Schema
//!
//! ```json
//! {
//!   "schema_version": "1.0",
//!   "namespaces": {
//!     "repo": { "path": ".agent/skills/repo", "type": "local" },
//!     "org":  { "path": ".agent/skills/org", "type": "remote", "remote": "org-skills" }
//!   }
//! }
//! ```
//!
//! `schema_version` is written but not interpreted; there is no migration
//! logic.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::paths::MANIFEST_FILE;

/// Schema version written into new manifests.
pub const SCHEMA_VERSION: &str = "1.0";

/// Errors from manifest operations.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// No manifest file at the expected location.
    #[error("manifest not found at '{0}'")]
    NotFound(PathBuf),

    /// A manifest already exists where `init` would create one.
    #[error("manifest already exists at '{0}'")]
    AlreadyExists(PathBuf),

    /// Failed to read the manifest file.
    #[error("failed to read manifest '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The manifest file is not valid JSON for the expected schema.
    #[error("failed to parse manifest '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    /// Failed to write the manifest or ignore seed.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize a manifest to JSON.
    #[error("failed to serialize manifest: {0}")]
    Serialize(String),
}

/// How a namespace is backed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceKind {
    /// An in-repo directory, assumed already present; never linked.
    Local,
    /// Backed by a clone registered under the namespace's `remote` identifier.
    Remote,
}

/// One declared namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    /// Project-relative target directory.
    pub path: String,

    /// Remote identifier, looked up in the registry. Required in practice
    /// when `kind` is `Remote`; a remote namespace without one is skipped
    /// by hydration rather than rejected here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,

    /// Backing kind. Absent in the file means `remote`.
    #[serde(rename = "type", default = "default_kind")]
    pub kind: NamespaceKind,
}

fn default_kind() -> NamespaceKind {
    NamespaceKind::Remote
}

/// The per-project manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Written as [`SCHEMA_VERSION`]; not interpreted on load.
    pub schema_version: String,

    /// Namespace name to declaration. Keys are unique by construction.
    pub namespaces: BTreeMap<String, Namespace>,
}

impl Manifest {
    /// Load the manifest from `<agent_dir>/skill-ops.json`.
    ///
    /// # Errors
    ///
    /// - [`ManifestError::NotFound`] when the file is absent
    /// - [`ManifestError::Read`] / [`ManifestError::Parse`] on I/O or schema
    ///   problems
    pub fn load(agent_dir: &Path) -> Result<Self, ManifestError> {
        let path = agent_dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Err(ManifestError::NotFound(path));
        }

        let contents = fs::read_to_string(&path).map_err(|e| ManifestError::Read {
            path: path.clone(),
            source: e,
        })?;

        serde_json::from_str(&contents).map_err(|e| ManifestError::Parse {
            path,
            message: e.to_string(),
        })
    }

    /// Create a fresh manifest at `<agent_dir>/skill-ops.json`.
    ///
    /// Creates the directory tree, writes the default manifest (a single
    /// `local` namespace named `repo`), and seeds `<agent_dir>/.gitignore`
    /// with hydration exclusions if no ignore file exists yet. Returns the
    /// path of the manifest that was written.
    ///
    /// # Errors
    ///
    /// [`ManifestError::AlreadyExists`] when a manifest is already present.
    pub fn init(agent_dir: &Path) -> Result<PathBuf, ManifestError> {
        fs::create_dir_all(agent_dir).map_err(|e| ManifestError::Write {
            path: agent_dir.to_path_buf(),
            source: e,
        })?;

        let manifest_path = agent_dir.join(MANIFEST_FILE);
        if manifest_path.exists() {
            return Err(ManifestError::AlreadyExists(manifest_path));
        }

        let manifest = Self::default_manifest();
        let json = serde_json::to_string_pretty(&manifest)
            .map_err(|e| ManifestError::Serialize(e.to_string()))?;
        fs::write(&manifest_path, json + "\n").map_err(|e| ManifestError::Write {
            path: manifest_path.clone(),
            source: e,
        })?;

        seed_gitignore(agent_dir)?;

        Ok(manifest_path)
    }

    /// The manifest written by `init`: one `local` namespace named `repo`.
    pub fn default_manifest() -> Self {
        let mut namespaces = BTreeMap::new();
        namespaces.insert(
            "repo".to_string(),
            Namespace {
                path: ".agent/skills/repo".to_string(),
                remote: None,
                kind: NamespaceKind::Local,
            },
        );
        Manifest {
            schema_version: SCHEMA_VERSION.to_string(),
            namespaces,
        }
    }
}

/// Seed `<agent_dir>/.gitignore` with namespace exclusions, if absent.
///
/// An existing ignore file is left untouched.
fn seed_gitignore(agent_dir: &Path) -> Result<(), ManifestError> {
    let gitignore = agent_dir.join(".gitignore");
    if gitignore.exists() {
        return Ok(());
    }

    let write = |gitignore: &Path| -> std::io::Result<()> {
        let mut file = fs::File::create(gitignore)?;
        writeln!(file, "# Skill-Ops hydration exclusions")?;
        writeln!(file, "skills/personal")?;
        writeln!(file, "skills/org")?;
        writeln!(file, "skills/team")?;
        Ok(())
    };

    write(&gitignore).map_err(|e| ManifestError::Write {
        path: gitignore,
        source: e,
    })
}
