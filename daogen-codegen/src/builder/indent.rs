//! Indentation configuration for code generation.

use daogen_config::IndentStyle;

const SPACES: &str = "        ";

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width, at most 8.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Tab indentation, the layout of hand-written Spring sources.
    pub const JAVA: Self = Self::Tab;

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(width) => &SPACES[..usize::from(*width).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

impl From<IndentStyle> for Indent {
    fn from(style: IndentStyle) -> Self {
        match style {
            IndentStyle::Tab => Self::Tab,
            IndentStyle::Spaces(width) => Self::Spaces(width),
        }
    }
}
