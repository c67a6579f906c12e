//! Lectern binary entry point.
//!
//! Runs the CLI and maps domain errors to exit codes:
//!
//! - 0: success
//! - 1: configuration or storage failure
//! - 2: the requested reference or resource was not found
//! - 3: invalid argument

use std::process::ExitCode;

use lectern::catalog::CatalogError;
use lectern::core::types::TypeError;
use lectern::text::ReferenceError;
use lectern::ui::output;

fn main() -> ExitCode {
    match lectern::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format_chain(&err));
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Render an anyhow chain as "outer: inner: ...".
fn format_chain(err: &anyhow::Error) -> String {
    err.chain()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}

/// Classify an error chain into a process exit code.
fn exit_code(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(reference) = cause.downcast_ref::<ReferenceError>() {
            return if reference.is_not_found() { 2 } else { 1 };
        }
        if let Some(catalog) = cause.downcast_ref::<CatalogError>() {
            return if catalog.is_invalid_argument() { 3 } else { 1 };
        }
        if cause.downcast_ref::<TypeError>().is_some() {
            return 3;
        }
    }
    1
}
