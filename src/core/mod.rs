//! core
//!
//! Core domain types and configuration for Lectern.
//!
//! # Modules
//!
//! - [`types`] - Strong types: BookNumber, VerseRef, ModuleId, etc.
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - All resolution is deterministic for a fixed backing source

pub mod config;
pub mod types;
