//! validate command - Report broken links in hydrated namespaces

use anyhow::{bail, Context as _, Result};

use super::Context;
use crate::core::inspect;
use crate::ui::output;

/// Check hydrated namespaces for broken symlinks.
///
/// Exits nonzero when any issue is found.
pub fn validate(ctx: &Context) -> Result<()> {
    let project_root = ctx.project_root()?;
    let issues =
        inspect::validate_hydration(&project_root).context("Failed to validate hydration")?;

    let verbosity = ctx.verbosity();
    if issues.is_empty() {
        output::print("All symlinks are valid!", verbosity);
        return Ok(());
    }

    output::print("Found hydration issues:", verbosity);
    for issue in &issues {
        output::print(format!("  - {}", issue), verbosity);
    }
    bail!("{} hydration issue(s) found", issues.len())
}
