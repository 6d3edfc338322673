//! list command - Show skills grouped by namespace

use anyhow::{Context as _, Result};

use super::Context;
use crate::core::inspect;
use crate::ui::output;

/// List all available skills, one namespace at a time.
pub fn list(ctx: &Context) -> Result<()> {
    let project_root = ctx.project_root()?;
    let skills = inspect::list_skills(&project_root).context("Failed to list skills")?;

    let verbosity = ctx.verbosity();
    if skills.is_empty() {
        output::print("No skills found.", verbosity);
        return Ok(());
    }

    for (namespace, items) in &skills {
        output::print(namespace, verbosity);
        for item in items {
            output::print(format!("  - {}", item), verbosity);
        }
    }
    Ok(())
}
