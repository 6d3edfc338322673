//! hydrate command - Reconcile manifest namespaces onto the filesystem

use anyhow::{anyhow, Context as _, Result};

use super::Context;
use crate::core::hydrate;
use crate::core::link::LinkStrategy;
use crate::core::paths::default_registry_path;
use crate::ui::output;

/// Hydrate all remote namespaces declared in the manifest.
pub fn hydrate(ctx: &Context, force: bool, strategy: Option<LinkStrategy>) -> Result<()> {
    let project_root = ctx.project_root()?;
    let registry_path =
        default_registry_path().ok_or_else(|| anyhow!("cannot determine home directory"))?;

    let report = hydrate::hydrate(&project_root, &registry_path, force, strategy)
        .context("Failed to hydrate skills")?;

    let verbosity = ctx.verbosity();
    for warning in &report.warnings {
        output::warn(warning, verbosity);
    }

    output::print("Successfully hydrated skills!", verbosity);
    for (namespace, count) in &report.counts {
        output::print(
            format!("  - {}: {} skills linked", namespace, count),
            verbosity,
        );
    }
    Ok(())
}
