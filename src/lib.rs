//! Skill-Ops - A CLI for hydrating agent skill namespaces
//!
//! Skill-Ops materializes a declared mapping between skill namespaces and their
//! physical storage locations onto the filesystem, using symlinks, directory
//! junctions, or copies. It reads one JSON manifest per project and one JSON
//! registry of known remote-clone locations in the user's home directory.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to core)
//! - [`core`] - Manifest/registry stores, link strategies, hydration, inspection
//! - [`ui`] - Output formatting utilities
//!
//! # Design Rules
//!
//! 1. All storage locations are routed through [`core::paths::SkillPaths`]
//! 2. The registry location is injected by the caller, never resolved inside
//!    the loader
//! 3. Platform-conditional link behavior is decided once, in
//!    [`core::link::resolve_strategy`], not scattered through reconciliation
//! 4. Hydration processes namespaces independently; one namespace's problem is
//!    a warning, never an abort

pub mod cli;
pub mod core;
pub mod ui;
