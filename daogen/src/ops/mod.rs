//! Core operations.
//!
//! This module contains the business logic for daogen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

use std::path::Path;

pub use check::check;
pub use generate::{GenerateOptions, generate};

/// Render a library diagnostic (with its source snippet) into an eyre error.
pub(crate) fn diagnostic<E>(err: Box<E>) -> eyre::Report
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    eyre::eyre!("{:?}", miette::Report::new(*err))
}

/// File name of an entity source, for display.
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
