//! cli
//!
//! Command-line interface layer for Lectern.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve configuration and open the backing stores
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, resolves the text
//! module and registry paths (flag overrides config), opens both stores
//! read-only, and dispatches to handlers. All resolution and catalog logic
//! lives in [`crate::text`] and [`crate::catalog`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{bail, Result};

use crate::context::AppContext;
use crate::core::config::Config;
use crate::ui::output::{self, Verbosity};

/// Per-invocation state shared by every command handler.
pub struct Context {
    /// The opened stores.
    pub app: AppContext,
    /// Emit JSON instead of human-readable output.
    pub json: bool,
    /// Output verbosity from --quiet / --debug.
    pub verbosity: Verbosity,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    // Completion needs no configuration or storage
    if let args::Command::Completion { shell } = &cli.command {
        return commands::completion(*shell);
    }

    let loaded = Config::load(cli.config.as_deref())?;
    for warning in &loaded.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            verbosity,
        );
    }
    let config = loaded.config;
    if let Some(path) = config.loaded_from() {
        output::debug(format!("config loaded from {}", path.display()), verbosity);
    }

    let text_module = match cli
        .text_module
        .or_else(|| config.text_module().map(Into::into))
    {
        Some(path) => path,
        None => bail!(
            "no text module configured; pass --text-module or set storage.text_module in config"
        ),
    };
    let registry = match cli.registry.or_else(|| config.registry().map(Into::into)) {
        Some(path) => path,
        None => {
            bail!("no registry configured; pass --registry or set storage.registry in config")
        }
    };

    output::debug(
        format!(
            "text module: {}; registry: {}",
            text_module.display(),
            registry.display()
        ),
        verbosity,
    );

    let ctx = Context {
        app: AppContext::open(&text_module, &registry)?,
        json: cli.json,
        verbosity,
    };

    commands::dispatch(cli.command, &ctx)
}
