//! core::paths
//!
//! Centralized path routing for Skill-Ops storage locations.
//!
//! # Storage Layout
//!
//! Per-project state lives under `<project_root>/.agent/`:
//! - `skill-ops.json` - The namespace manifest
//! - `.gitignore` - Hydration exclusions, seeded by `init`
//! - `skills/` - Default parent for namespace target paths
//!
//! Per-user state lives under `<home>/.skill-ops/`:
//! - `registry.json` - Remote-identifier to local-clone-path mapping
//!
//! **Hard rule:** no code outside this module computes `.agent` or
//! `.skill-ops` paths directly. Loaders take the paths they need as
//! arguments, so tests can point them at temporary directories.
//!
//! # Example
//!
//! ```
//! use skill_ops::core::paths::SkillPaths;
//! use std::path::PathBuf;
//!
//! let paths = SkillPaths::new(PathBuf::from("/work/project"));
//! assert_eq!(
//!     paths.manifest_path(),
//!     PathBuf::from("/work/project/.agent/skill-ops.json")
//! );
//! ```

use std::path::{Path, PathBuf};

/// File name of the per-project manifest.
pub const MANIFEST_FILE: &str = "skill-ops.json";

/// Directory name of the per-project agent state.
pub const AGENT_DIR: &str = ".agent";

/// Path routing for one project's Skill-Ops storage.
///
/// # Invariants
///
/// - All project-scoped storage is computed relative to `project_root`
/// - Namespace target paths from the manifest are resolved against
///   `project_root`, never against the agent directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillPaths {
    project_root: PathBuf,
}

impl SkillPaths {
    /// Create path routing rooted at the given project directory.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// The project root this routing is anchored at.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// `<project_root>/.agent`
    pub fn agent_dir(&self) -> PathBuf {
        self.project_root.join(AGENT_DIR)
    }

    /// `<project_root>/.agent/skill-ops.json`
    pub fn manifest_path(&self) -> PathBuf {
        self.agent_dir().join(MANIFEST_FILE)
    }

    /// `<project_root>/.agent/skills` - the directory the inspector scans.
    pub fn skills_dir(&self) -> PathBuf {
        self.agent_dir().join("skills")
    }

    /// Resolve a manifest-declared target path against the project root.
    pub fn resolve_target(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.project_root.join(relative)
    }
}

/// Default location of the per-user registry: `<home>/.skill-ops/registry.json`.
///
/// Returns `None` when no home directory can be determined. Only the CLI
/// layer calls this; core loaders take the registry path as an argument.
pub fn default_registry_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".skill-ops").join("registry.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_path_is_under_agent_dir() {
        let paths = SkillPaths::new("/work/project");
        assert_eq!(
            paths.manifest_path(),
            PathBuf::from("/work/project/.agent/skill-ops.json")
        );
    }

    #[test]
    fn skills_dir_is_under_agent_dir() {
        let paths = SkillPaths::new("/work/project");
        assert_eq!(
            paths.skills_dir(),
            PathBuf::from("/work/project/.agent/skills")
        );
    }

    #[test]
    fn targets_resolve_against_project_root() {
        let paths = SkillPaths::new("/work/project");
        assert_eq!(
            paths.resolve_target(".agent/skills/org"),
            PathBuf::from("/work/project/.agent/skills/org")
        );
    }
}
