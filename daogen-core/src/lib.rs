//! Core utilities shared across the daogen crates.
//!
//! This crate owns the file-writing contract used by every generated
//! artifact, plus the small naming helpers the generator depends on.

mod codegen;
mod file;
mod utils;

pub use codegen::{GenerateResult, PreviewFile};
// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult, write_file};
// String utilities
pub use utils::{lower_first, upper_first};
