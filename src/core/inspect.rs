//! core::inspect
//!
//! Read-only traversals of hydrated state.
//!
//! Two inspections: enumerate linked skills per namespace, and detect
//! broken symlinks. Neither mutates anything.
//!
//! Known gap: [`validate_hydration`] only checks symbolic-link liveness.
//! Namespaces that are plain directories (local, or remotes hydrated with
//! the copy strategy) get no content-integrity check.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use super::paths::SkillPaths;

/// Enumerate skills per namespace under `<project_root>/.agent/skills`.
///
/// Each namespace directory contributes its immediate non-hidden
/// subdirectory names, sorted lexicographically. Namespaces with zero
/// skills are omitted. An absent skills directory yields an empty mapping,
/// not an error.
pub fn list_skills(project_root: &Path) -> io::Result<BTreeMap<String, Vec<String>>> {
    let skills_dir = SkillPaths::new(project_root).skills_dir();
    if !skills_dir.exists() {
        return Ok(BTreeMap::new());
    }

    let mut result = BTreeMap::new();
    for entry in fs::read_dir(&skills_dir)? {
        let entry = entry?;
        // is_dir() follows symlinks, so hydrated namespaces count too.
        if !entry.path().is_dir() {
            continue;
        }

        let mut skills = Vec::new();
        for skill in fs::read_dir(entry.path())? {
            let skill = skill?;
            let name = skill.file_name().to_string_lossy().into_owned();
            if skill.path().is_dir() && !name.starts_with('.') {
                skills.push(name);
            }
        }

        if !skills.is_empty() {
            skills.sort();
            result.insert(entry.file_name().to_string_lossy().into_owned(), skills);
        }
    }

    Ok(result)
}

/// Report hydration problems under `<project_root>/.agent/skills`.
///
/// Returns a single issue when the skills directory is absent. Otherwise
/// each namespace entry that is a symbolic link is checked for liveness; a
/// dangling link produces one issue naming the namespace and the link's
/// unresolved target. Plain directories are not checked (see module docs).
pub fn validate_hydration(project_root: &Path) -> io::Result<Vec<String>> {
    let skills_dir = SkillPaths::new(project_root).skills_dir();
    if !skills_dir.exists() {
        return Ok(vec!["No .agent/skills directory found".to_string()]);
    }

    let mut issues = Vec::new();
    for entry in fs::read_dir(&skills_dir)? {
        let entry = entry?;
        let path = entry.path();

        let meta = fs::symlink_metadata(&path)?;
        if !meta.file_type().is_symlink() {
            continue;
        }

        // exists() follows the link; a dangling link reports false.
        if !path.exists() {
            let unresolved = fs::read_link(&path)?;
            issues.push(format!(
                "Namespace {}: broken symlink pointing to {}",
                entry.file_name().to_string_lossy(),
                unresolved.display()
            ));
        }
    }

    Ok(issues)
}
