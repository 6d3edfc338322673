//! core::hydrate
//!
//! Manifest-against-registry reconciliation.
//!
//! # Semantics
//!
//! Hydration is a reconciliation pass, not a diff: every remote namespace is
//! (re)linked on every run, subject to the overwrite gate. Namespaces are
//! processed independently; one namespace's problem becomes a warning in the
//! report and never aborts the others. Only a manifest-load failure aborts
//! the whole call.
//!
//! Nothing here is transactional. A crash mid-pass can leave a target absent
//! or partially copied; the next run simply treats the leftover state as
//! "already exists" input to the overwrite gate.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use super::link::{resolve_strategy, LinkStrategy, Platform};
use super::manifest::{Manifest, ManifestError, Namespace, NamespaceKind};
use super::paths::SkillPaths;
use super::registry::{Registry, RegistryError};

/// Errors that abort a hydration pass outright.
///
/// Per-namespace problems never appear here; they surface as warnings in
/// the [`HydrateReport`].
#[derive(Debug, Error)]
pub enum HydrateError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Outcome of a hydration pass.
///
/// `counts` maps each successfully processed namespace to its linked-skill
/// count; a skipped namespace is simply absent. `warnings` records why each
/// skip happened, in encounter order, so callers have a machine-readable
/// partial-failure signal alongside the counts.
#[derive(Debug, Default)]
pub struct HydrateReport {
    /// Namespace name to linked-skill count. Local namespaces record `1`
    /// as a presence marker.
    pub counts: BTreeMap<String, usize>,

    /// One entry per skipped namespace, human-readable.
    pub warnings: Vec<String>,
}

/// Reconcile the project's manifest against the registry.
///
/// For each remote namespace, resolves the clone path by `remote`
/// identifier and materializes the target path with the resolved strategy.
/// The registry location is injected so tests can supply their own.
///
/// # Errors
///
/// Fails only when the manifest cannot be loaded or the registry file is
/// unreadable; everything else is a warning in the returned report.
pub fn hydrate(
    project_root: &Path,
    registry_path: &Path,
    force: bool,
    strategy_override: Option<LinkStrategy>,
) -> Result<HydrateReport, HydrateError> {
    let paths = SkillPaths::new(project_root);
    let manifest = Manifest::load(&paths.agent_dir())?;
    let registry = Registry::load(registry_path)?;

    let platform = Platform::current();
    let strategy = resolve_strategy(strategy_override, platform);

    let mut report = HydrateReport::default();

    for (name, ns) in &manifest.namespaces {
        if ns.kind == NamespaceKind::Local {
            // Assumed already present in the repo; presence marker only.
            report.counts.insert(name.clone(), 1);
            continue;
        }

        // A remote namespace without an identifier is malformed but
        // non-fatal: skip silently.
        let Some(remote) = ns.remote.as_deref().filter(|r| !r.is_empty()) else {
            continue;
        };

        match link_namespace(
            &paths,
            &registry,
            name,
            ns,
            remote,
            force,
            strategy,
            strategy_override,
            platform,
        ) {
            Ok(count) => {
                report.counts.insert(name.clone(), count);
            }
            Err(warning) => report.warnings.push(warning),
        }
    }

    Ok(report)
}

/// Whether an existing target may be replaced.
///
/// Forced runs and symlink targets are always replaceable. A plain
/// directory is additionally replaceable only when a Windows junction was
/// explicitly requested; the platform default resolving to `Junction` does
/// not open the gate.
fn replace_existing(
    force: bool,
    is_symlink: bool,
    requested: Option<LinkStrategy>,
    platform: Platform,
) -> bool {
    force || is_symlink || (platform.is_windows() && requested == Some(LinkStrategy::Junction))
}

/// Link one remote namespace. Returns the linked-skill count, or the
/// warning explaining why the namespace was skipped.
#[allow(clippy::too_many_arguments)]
fn link_namespace(
    paths: &SkillPaths,
    registry: &Registry,
    name: &str,
    ns: &Namespace,
    remote: &str,
    force: bool,
    strategy: LinkStrategy,
    requested: Option<LinkStrategy>,
    platform: Platform,
) -> Result<usize, String> {
    let Some(source) = registry.clone_path(remote) else {
        return Err(format!("no local clone found for remote {remote}"));
    };
    if !source.exists() {
        return Err(format!(
            "source path {} does not exist",
            source.display()
        ));
    }

    let target = paths.resolve_target(&ns.path);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("skipping {name}: cannot create {}: {e}", parent.display()))?;
    }

    // Overwrite gate: replace an existing target only when forced, when it
    // is itself a symlink, or when a Windows junction was asked for.
    if let Ok(meta) = fs::symlink_metadata(&target) {
        if !replace_existing(force, meta.file_type().is_symlink(), requested, platform) {
            return Err(format!(
                "skipping {name}: path {} already exists and is not a symlink",
                target.display()
            ));
        }
        strategy
            .remove(&target)
            .map_err(|e| format!("skipping {name}: {e}"))?;
    }

    strategy
        .create(source, &target)
        .map_err(|e| format!("skipping {name}: {e}"))?;

    count_skills(source).map_err(|e| {
        format!(
            "skipping {name}: cannot read {}: {e}",
            source.display()
        )
    })
}

/// Count the non-hidden immediate subdirectories of a clone; each one is
/// one skill.
fn count_skills(dir: &Path) -> io::Result<usize> {
    let mut count = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.path().is_dir() && !is_hidden(&entry.file_name()) {
            count += 1;
        }
    }
    Ok(count)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}
