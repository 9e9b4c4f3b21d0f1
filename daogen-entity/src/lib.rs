//! Entity model extraction for daogen.
//!
//! Turns a Java source file into an [`EntityClass`]: the class name and its
//! fields in declaration order, each tagged with the [`Marker`]s the
//! generator cares about. [`FieldFilter`] decides which fields get finder
//! methods.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod classify;
mod discover;
mod entity;
mod error;
mod marker;
mod parse;

pub use classify::{Exclusion, FieldFilter};
pub use discover::discover_entities;
pub use entity::{EntityClass, Field, Roles};
pub use error::{Error, Result};
pub use marker::Marker;
pub use parse::{parse_file, parse_str};
