//! Lectern - reference resolution and module cataloging for scripture texts
//!
//! Lectern resolves hierarchical scripture references (book → chapter → verse)
//! against an installed MyBible-format text module, and maintains a searchable
//! catalog of installed modules keyed by identifier, language, and region.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to the context)
//! - [`core`] - Domain types and configuration
//! - [`text`] - Text source abstraction and the reference resolution store
//! - [`catalog`] - Registry abstraction and the module catalog
//! - [`context`] - Application context holding both components
//! - [`ui`] - User interaction utilities
//!
//! # Correctness Invariants
//!
//! Lectern maintains the following invariants:
//!
//! 1. Containment is strictly hierarchical: a verse reference resolves only if
//!    its chapter is present, which is present only if its book exists
//! 2. All components are read-only at request time; rerunning a query yields
//!    bit-identical results
//! 3. Both components are constructed exactly once and passed by reference,
//!    never held in ambient global state

pub mod catalog;
pub mod cli;
pub mod context;
pub mod core;
pub mod text;
pub mod ui;
