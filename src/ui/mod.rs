//! ui
//!
//! Output utilities.
//!
//! # Design
//!
//! All command output goes through this module so human-readable and JSON
//! renderings stay consistent and the quiet flag is honored everywhere.

pub mod output;
