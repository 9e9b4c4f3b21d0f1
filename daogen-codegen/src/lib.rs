//! Java repository and service generation for daogen.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`java`] - Java AST nodes (JavaFile, TypeDecl, FieldDecl)
//! - [`finder`] - Finder methods derived from entity fields
//! - [`files`] - The repository, service and service implementation files
//! - [`Generator`] - Plans, previews and writes the files of one entity

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
mod error;
pub mod files;
pub mod finder;
mod generator;
pub mod java;
mod plan;
pub mod types;

pub use error::{Error, Result};
pub use finder::{FinderKind, FinderMethod, RenderMode, finder_methods};
pub use generator::Generator;
pub use plan::EntityPlan;
