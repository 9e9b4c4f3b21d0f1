//! JavaFile abstraction for structured Java source generation.

use std::collections::BTreeSet;

use crate::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A structured representation of a Java compilation unit.
///
/// Organizes code into three sections: package clause, imports and body.
/// Imports are kept sorted and deduplicated.
///
/// # Example
///
/// ```
/// use daogen_codegen::java::{JavaFile, TypeDecl};
///
/// let source = JavaFile::new("com.example.services")
///     .import("org.springframework.stereotype.Service")
///     .add(TypeDecl::interface("UserService").annotation("@Service"))
///     .render();
///
/// assert!(source.starts_with("package com.example.services;\n\nimport"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct JavaFile {
    package: String,
    imports: BTreeSet<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl JavaFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    /// Add a single-type import.
    ///
    /// Types from the file's own package and from the unnamed package need
    /// no import and are dropped.
    pub fn import(mut self, qualified: impl Into<String>) -> Self {
        let qualified = qualified.into();
        match qualified.rsplit_once('.') {
            Some((package, _)) if package != self.package => {
                self.imports.insert(qualified);
            }
            _ => {}
        }
        self
    }

    /// Add imports from an iterator.
    pub fn imports<S: Into<String>>(self, imports: impl IntoIterator<Item = S>) -> Self {
        imports.into_iter().fold(self, |file, import| file.import(import))
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with tab indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::JAVA)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        if !self.package.is_empty() {
            builder
                .push_line(&format!("package {};", self.package))
                .push_blank();
        }

        for import in &self.imports {
            builder.push_line(&format!("import {};", import));
        }
        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}
