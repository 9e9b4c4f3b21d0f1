//! Java field declarations.

use crate::builder::{CodeFragment, Renderable};

/// A private instance field with optional annotations.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    annotations: Vec<String>,
    ty: String,
    name: String,
}

impl FieldDecl {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            annotations: Vec::new(),
            ty: ty.into(),
            name: name.into(),
        }
    }

    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }
}

impl Renderable for FieldDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.annotations
            .iter()
            .map(CodeFragment::line)
            .chain(std::iter::once(CodeFragment::Line(format!(
                "private {} {};",
                self.ty, self.name
            ))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injected_field() {
        let field = FieldDecl::new("UserDao", "dao").annotation("@Autowired");
        assert_eq!(
            field.to_fragments(),
            vec![
                CodeFragment::line("@Autowired"),
                CodeFragment::line("private UserDao dao;"),
            ]
        );
    }
}
