//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls into the store or catalog
//! 3. Formats and displays output
//!
//! Handlers never open storage themselves; they work against the stores
//! already opened in the [`crate::cli::Context`].

mod completion;
mod modules;
mod reference;

pub use completion::completion;

use crate::cli::args::{Command, ModulesAction};
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
///
/// `Completion` is handled before storage is opened and never reaches this
/// function.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Books => reference::books(ctx),
        Command::Book { number } => reference::book(ctx, number),
        Command::Chapter { book, chapter } => reference::chapter(ctx, book, chapter),
        Command::Verse {
            book,
            chapter,
            verse,
        } => reference::verse(ctx, book, chapter, verse),
        Command::Modules { action } => match action {
            ModulesAction::Search {
                id,
                language,
                region,
            } => modules::search(ctx, id, language, region),
            ModulesAction::Fetch { ids } => modules::fetch(ctx, &ids),
        },
        Command::Completion { .. } => unreachable!("completion handled before dispatch"),
    }
}
