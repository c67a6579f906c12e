//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this config file instead of searching
//! - `--text-module <path>`: Override the active text module
//! - `--registry <path>`: Override the module registry
//! - `--json`: Machine-readable JSON output
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lectern - query MyBible text modules and their registry
#[derive(Parser, Debug)]
#[command(name = "lectern")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default search order
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the active text module (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    pub text_module: Option<PathBuf>,

    /// Path to the module registry (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    pub registry: Option<PathBuf>,

    /// Emit results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the books of the active text module
    #[command(
        name = "books",
        long_about = "List the books of the active text module.\n\n\
            Books are printed in canonical order, which the module encodes in \
            its book numbering. Use --json for machine-readable output.",
        after_help = "\
WORKFLOW EXAMPLES:
    # See what the module contains
    lectern books

    # Feed book numbers into scripts
    lectern books --json | jq '.items[].id'"
    )]
    Books,

    /// Show one book and its chapter count
    #[command(
        name = "book",
        long_about = "Show one book's names and chapter count.\n\n\
            The book is addressed by its module book number (Genesis is 10 in \
            MyBible numbering). Exits with code 2 if the book is not present.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Genesis in MyBible numbering
    lectern book 10

    # Check whether a book exists in this module
    lectern book 475 --quiet && echo present"
    )]
    Book {
        /// Book number
        number: u32,
    },

    /// Show one chapter's verse count
    #[command(
        name = "chapter",
        long_about = "Show the number of verses present in one chapter.\n\n\
            A chapter exists only if it has at least one verse. Exits with \
            code 2 if the book or the chapter is not present; the error \
            message says which.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Genesis 1
    lectern chapter 10 1

    # Iterate a book's chapters
    for ch in $(seq 1 $(lectern book 10 --json | jq .chapters)); do
        lectern chapter 10 $ch
    done"
    )]
    Chapter {
        /// Book number
        book: u32,

        /// Chapter number
        chapter: u32,
    },

    /// Print one verse's text
    #[command(
        name = "verse",
        long_about = "Print the text of one verse.\n\n\
            The reference is resolved against the active text module. Any \
            missing level of the reference (book, chapter, or verse) exits \
            with code 2 and a verse-not-found message.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Genesis 1:1
    lectern verse 10 1 1

    # Just the text, for piping
    lectern verse 10 1 1 --json | jq -r .text"
    )]
    Verse {
        /// Book number
        book: u32,

        /// Chapter number
        chapter: u32,

        /// Verse number
        verse: u32,
    },

    /// Search or fetch entries from the module registry
    #[command(
        name = "modules",
        long_about = "Query the registry of installed text modules.\n\n\
            'search' filters by identifier, language, and region; filters \
            compose conjunctively and an empty result is not an error. \
            'fetch' looks up a batch of identifiers, silently omitting \
            unknown ones."
    )]
    Modules {
        #[command(subcommand)]
        action: ModulesAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for Lectern commands.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    lectern completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    lectern completion zsh >> ~/.zshrc

    # Fish
    lectern completion fish > ~/.config/fish/completions/lectern.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Modules subcommands
#[derive(Subcommand, Debug)]
pub enum ModulesAction {
    /// Search the registry with optional filters
    #[command(after_help = "\
WORKFLOW EXAMPLES:
    # Everything installed
    lectern modules search

    # All Russian modules
    lectern modules search --language ru

    # One exact module
    lectern modules search --id RST+")]
    Search {
        /// Filter by module identifier
        #[arg(long)]
        id: Option<String>,

        /// Filter by language code
        #[arg(long)]
        language: Option<String>,

        /// Filter by region
        #[arg(long)]
        region: Option<String>,
    },

    /// Fetch registry entries for specific module identifiers
    #[command(after_help = "\
WORKFLOW EXAMPLES:
    # One module
    lectern modules fetch RST+

    # Several at once; unknown ids are omitted from the result
    lectern modules fetch RST+ KJV")]
    Fetch {
        /// Module identifiers to fetch (at least one)
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
