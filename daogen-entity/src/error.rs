use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for entity extraction (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load the Java grammar")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("failed to parse {filename}: {message}")]
    #[diagnostic(code(daogen::entity::parse_error))]
    Parse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },

    #[error("no class declaration found in {filename}")]
    #[diagnostic(
        code(daogen::entity::no_class),
        help("entity files must declare a top-level class")
    )]
    NoClass { filename: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::Io {
            path: path.into(),
            source,
        })
    }

    pub(crate) fn parse(
        src: &str,
        filename: &str,
        span: impl Into<SourceSpan>,
        message: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Self::Parse {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span: span.into(),
            message: message.into(),
        })
    }
}
