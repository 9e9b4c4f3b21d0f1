//! Java interface and class declarations.

use crate::builder::{CodeFragment, Renderable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Interface,
    Class,
}

impl TypeKind {
    fn keyword(self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::Class => "class",
        }
    }
}

/// A public top-level type.
///
/// The body opens with a blank line and every member is followed by one,
/// so a declaration with two methods renders as:
///
/// ```text
/// public interface UserService {
///
///     Optional<User> findOne(Integer id);
///
///     List<User> findByEmail(String email);
///
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TypeDecl {
    kind: TypeKind,
    name: String,
    annotations: Vec<String>,
    extends: Option<String>,
    implements: Vec<String>,
    members: Vec<Vec<CodeFragment>>,
}

impl TypeDecl {
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            annotations: Vec::new(),
            extends: None,
            implements: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Interface, name)
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Class, name)
    }

    /// Add an annotation line, written with its `@`.
    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn extends(mut self, ty: impl Into<String>) -> Self {
        self.extends = Some(ty.into());
        self
    }

    pub fn implements(mut self, ty: impl Into<String>) -> Self {
        self.implements.push(ty.into());
        self
    }

    /// Add a member (field or method).
    pub fn member<R: Renderable>(mut self, node: R) -> Self {
        self.members.push(node.to_fragments());
        self
    }

    /// Add members from an iterator.
    pub fn members<R: Renderable>(self, nodes: impl IntoIterator<Item = R>) -> Self {
        nodes.into_iter().fold(self, |decl, node| decl.member(node))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn header(&self) -> String {
        let mut header = format!("public {} {}", self.kind.keyword(), self.name);
        if let Some(parent) = &self.extends {
            header.push_str(" extends ");
            header.push_str(parent);
        }
        if !self.implements.is_empty() {
            header.push_str(" implements ");
            header.push_str(&self.implements.join(", "));
        }
        header.push_str(" {");
        header
    }
}

impl Renderable for TypeDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = vec![CodeFragment::Blank];
        for member in &self.members {
            body.extend(member.iter().cloned());
            body.push(CodeFragment::Blank);
        }

        let mut fragments: Vec<CodeFragment> =
            self.annotations.iter().map(CodeFragment::line).collect();
        fragments.push(CodeFragment::block(
            self.header(),
            body,
            Some("}".to_string()),
        ));
        fragments
    }
}
