//! Java AST nodes rendered through the shared code builder.

mod field;
mod file;
mod type_decl;

pub use field::FieldDecl;
pub use file::JavaFile;
pub use type_decl::{TypeDecl, TypeKind};
