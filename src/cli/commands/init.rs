//! init command - Create the Skill-Ops manifest

use std::path::Path;

use anyhow::{Context as _, Result};

use super::Context;
use crate::core::manifest::Manifest;
use crate::ui::output;

/// Initialize a new Skill-Ops manifest.
///
/// `path` is the agent directory, resolved against the project root when
/// relative (`.agent` by default).
pub fn init(ctx: &Context, path: &Path) -> Result<()> {
    let agent_dir = ctx.project_root()?.join(path);

    let manifest_path =
        Manifest::init(&agent_dir).context("Failed to initialize Skill-Ops manifest")?;

    output::print(
        format!(
            "Successfully initialized Skill-Ops manifest at {}",
            manifest_path.display()
        ),
        ctx.verbosity(),
    );
    Ok(())
}
