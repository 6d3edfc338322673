//! core
//!
//! Core domain types, schemas, and operations for Skill-Ops.
//!
//! # Organization
//!
//! - [`paths`] - Centralized path routing for storage locations
//! - [`manifest`] - Per-project namespace declarations
//! - [`registry`] - Per-user remote-clone locations
//! - [`link`] - Link strategy selection and filesystem link operations
//! - [`hydrate`] - Manifest-against-registry reconciliation
//! - [`inspect`] - Read-only traversals of hydrated state

pub mod hydrate;
pub mod inspect;
pub mod link;
pub mod manifest;
pub mod paths;
pub mod registry;
