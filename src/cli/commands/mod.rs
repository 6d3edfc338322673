//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves the project root and any user-scoped paths
//! 2. Calls the corresponding core operation
//! 3. Formats and displays output
//!
//! Handlers never walk the filesystem themselves.

mod hydrate;
mod init;
mod list;
mod validate;

pub use hydrate::hydrate;
pub use init::init;
pub use list::list;
pub use validate::validate;

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::cli::args::Command;
use crate::ui::output::Verbosity;

/// Execution context derived from global CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Run as if started in this directory.
    pub cwd: Option<PathBuf>,
    /// Minimal output.
    pub quiet: bool,
}

impl Context {
    /// The project root commands operate on.
    pub fn project_root(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(path) => Ok(path.clone()),
            None => std::env::current_dir().context("cannot determine current directory"),
        }
    }

    /// Output verbosity for this invocation.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_quiet(self.quiet)
    }
}

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Init { path } => init(ctx, &path),
        Command::Hydrate {
            force,
            link_strategy,
        } => hydrate(ctx, force, link_strategy.map(Into::into)),
        Command::List => list(ctx),
        Command::Validate => validate(ctx),
    }
}
