use daogen_entity::Exclusion;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for daogen-codegen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("entity '{entity}' has no primary key")]
    #[diagnostic(
        code(daogen::codegen::missing_primary_key),
        help("annotate the identity field with @Id or @EmbeddedId")
    )]
    MissingPrimaryKey { entity: String },

    #[error("primary key '{field}' of entity '{entity}' is {reason}")]
    #[diagnostic(
        code(daogen::codegen::ineligible_primary_key),
        help("the identity field needs a finder; remove the exclusion or the conflicting marker")
    )]
    IneligiblePrimaryKey {
        entity: String,
        field: String,
        reason: Exclusion,
    },
}
