//! ui
//!
//! Output formatting utilities.

pub mod output;
