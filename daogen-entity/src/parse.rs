//! Java source extraction with tree-sitter.

use std::path::Path;

use tree_sitter::{Node, Parser, Tree};

use crate::{EntityClass, Error, Field, Marker, Result};

/// Parse an entity class from a Java file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<EntityClass> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_str(&source, &path.display().to_string())
}

/// Parse an entity class from Java source text.
///
/// The first top-level class declaration is the entity. Only fields declared
/// directly in its body are kept; nested types and methods are ignored.
pub fn parse_str(source: &str, filename: &str) -> Result<EntityClass> {
    let tree = syntax_tree(source, filename)?;
    let root = tree.root_node();

    if let Some(node) = first_error(root) {
        let message = if node.is_missing() {
            format!("expected `{}`", node.kind())
        } else {
            "unexpected syntax".to_string()
        };
        return Err(Error::parse(source, filename, node.byte_range(), message));
    }

    let mut cursor = root.walk();
    let class = root
        .named_children(&mut cursor)
        .find(|node| node.kind() == "class_declaration")
        .ok_or_else(|| {
            Box::new(Error::NoClass {
                filename: filename.to_string(),
            })
        })?;

    let name = class
        .child_by_field_name("name")
        .map(|node| text(node, source).to_string())
        .ok_or_else(|| Error::parse(source, filename, class.byte_range(), "class has no name"))?;

    let mut entity = EntityClass::new(name);
    let mut cursor = root.walk();
    for node in root.named_children(&mut cursor) {
        match node.kind() {
            "package_declaration" => entity.package = qualified_name(node, source),
            "import_declaration" => entity.imports.extend(single_type_import(node, source)),
            _ => {}
        }
    }

    if let Some(body) = class.child_by_field_name("body") {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            if member.kind() == "field_declaration" {
                entity.fields.extend(fields_of(member, source));
            }
        }
    }

    Ok(entity)
}

fn syntax_tree(source: &str, filename: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    let language: tree_sitter::Language = tree_sitter_java::LANGUAGE.into();
    parser
        .set_language(&language)
        .map_err(|e| Box::new(Error::from(e)))?;
    parser
        .parse(source, None)
        .ok_or_else(|| Error::parse(source, filename, (0, 0), "parser produced no tree"))
}

/// One field per declarator: `String first, last;` declares two fields.
fn fields_of(declaration: Node<'_>, source: &str) -> Vec<Field> {
    let markers = markers_of(declaration, source);

    let Some(ty) = declaration.child_by_field_name("type") else {
        return Vec::new();
    };
    let (declared_type, array_type) = if ty.kind() == "array_type" {
        let element = ty.child_by_field_name("element").unwrap_or(ty);
        (normalize(text(element, source)), true)
    } else {
        (normalize(text(ty, source)), false)
    };

    let mut cursor = declaration.walk();
    declaration
        .children_by_field_name("declarator", &mut cursor)
        .filter_map(|declarator| {
            let name = declarator.child_by_field_name("name")?;
            let c_style_array = declarator.child_by_field_name("dimensions").is_some();
            Some(Field {
                name: text(name, source).to_string(),
                declared_type: declared_type.clone(),
                markers: markers.clone(),
                is_array: array_type || c_style_array,
            })
        })
        .collect()
}

fn markers_of(declaration: Node<'_>, source: &str) -> Vec<Marker> {
    let mut cursor = declaration.walk();
    let Some(modifiers) = declaration
        .children(&mut cursor)
        .find(|node| node.kind() == "modifiers")
    else {
        return Vec::new();
    };

    let mut cursor = modifiers.walk();
    modifiers
        .named_children(&mut cursor)
        .filter(|node| matches!(node.kind(), "marker_annotation" | "annotation"))
        .filter_map(|annotation| annotation.child_by_field_name("name"))
        .map(|name| Marker::from_annotation(text(name, source)))
        .collect()
}

fn qualified_name(node: Node<'_>, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|child| matches!(child.kind(), "scoped_identifier" | "identifier"))
        .map(|name| text(name, source).to_string())
}

/// `import a.b.C;` yields `a.b.C`; static and on-demand imports yield nothing.
fn single_type_import(node: Node<'_>, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    let skip = node
        .children(&mut cursor)
        .any(|child| matches!(child.kind(), "static" | "asterisk"));
    if skip {
        None
    } else {
        qualified_name(node, source)
    }
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn text<'a>(node: Node<'_>, source: &'a str) -> &'a str {
    &source[node.byte_range()]
}

fn normalize(type_text: &str) -> String {
    type_text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = r#"
package com.example.entities;

import java.util.Date;
import javax.persistence.*;

@Entity
@Table(name = "users")
public class User implements Serializable {

    private static final long serialVersionUID = 1L;

    @Id
    @GeneratedValue(strategy = GenerationType.IDENTITY)
    private int id;

    @Column(name = "email", nullable = false)
    private String email;

    private Date[] createdAt;

    public String getEmail() {
        return email;
    }
}
"#;

    #[test]
    fn test_class_name_and_field_order() {
        let entity = parse_str(USER, "User.java").unwrap();
        assert_eq!(entity.name, "User");

        let names: Vec<_> = entity.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["serialVersionUID", "id", "email", "createdAt"]);
    }

    #[test]
    fn test_field_types_and_markers() {
        let entity = parse_str(USER, "User.java").unwrap();

        let id = &entity.fields[1];
        assert_eq!(id.declared_type, "int");
        assert_eq!(
            id.markers,
            vec![Marker::Identity, Marker::Other("GeneratedValue".into())]
        );
        assert!(!id.is_array);

        let email = &entity.fields[2];
        assert_eq!(email.declared_type, "String");
        assert_eq!(email.markers, vec![Marker::Other("Column".into())]);

        let created = &entity.fields[3];
        assert_eq!(created.declared_type, "Date");
        assert!(created.is_array);
        assert!(created.markers.is_empty());
    }

    #[test]
    fn test_package_and_imports() {
        let entity = parse_str(USER, "User.java").unwrap();
        assert_eq!(entity.package.as_deref(), Some("com.example.entities"));
        // The on-demand javax.persistence.* import is dropped
        assert_eq!(entity.imports, vec!["java.util.Date".to_string()]);
    }

    #[test]
    fn test_static_imports_are_dropped() {
        let src = "import static java.util.Objects.requireNonNull;\nimport java.time.Instant;\nclass A {}\n";
        let entity = parse_str(src, "A.java").unwrap();
        assert_eq!(entity.package, None);
        assert_eq!(entity.imports, vec!["java.time.Instant".to_string()]);
    }

    #[test]
    fn test_primary_key() {
        let entity = parse_str(USER, "User.java").unwrap();
        assert_eq!(entity.primary_key().map(|f| f.name.as_str()), Some("id"));
    }

    #[test]
    fn test_multiple_declarators_and_c_style_arrays() {
        let src = r#"
public class Person {
    @Column
    private String firstName, lastName;
    private byte photo[];
}
"#;
        let entity = parse_str(src, "Person.java").unwrap();
        let fields: Vec<_> = entity
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.declared_type.as_str(), f.is_array))
            .collect();
        assert_eq!(
            fields,
            [
                ("firstName", "String", false),
                ("lastName", "String", false),
                ("photo", "byte", true),
            ]
        );
        assert_eq!(entity.fields[1].markers, vec![Marker::Other("Column".into())]);
    }

    #[test]
    fn test_generic_and_qualified_types() {
        let src = r#"
public class Team {
    @javax.persistence.EmbeddedId
    private TeamPK key;

    @OneToMany(mappedBy = "team")
    private Set<Member>   members;

    private java.util.Map<String,  Integer> scores;
}
"#;
        let entity = parse_str(src, "Team.java").unwrap();
        assert_eq!(entity.fields[0].markers, vec![Marker::Identity]);
        assert_eq!(entity.fields[0].declared_type, "TeamPK");
        assert_eq!(entity.fields[1].markers, vec![Marker::OneToMany]);
        assert_eq!(entity.fields[1].declared_type, "Set<Member>");
        assert_eq!(
            entity.fields[2].declared_type,
            "java.util.Map<String, Integer>"
        );
    }

    #[test]
    fn test_nested_class_fields_are_ignored() {
        let src = r#"
public class Outer {
    @Id
    private Long id;

    public static class Inner {
        private String hidden;
    }
}
"#;
        let entity = parse_str(src, "Outer.java").unwrap();
        assert_eq!(entity.fields.len(), 1);
        assert_eq!(entity.fields[0].name, "id");
    }

    #[test]
    fn test_syntax_error_is_parse_failure() {
        let src = "public class Broken {\n    private String name\n    private int id;\n}\n";
        let err = parse_str(src, "Broken.java").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
        assert!(err.to_string().contains("Broken.java"));
    }

    #[test]
    fn test_no_class_declaration() {
        let src = "public interface Named {\n    String name();\n}\n";
        let err = parse_str(src, "Named.java").unwrap_err();
        assert!(matches!(*err, Error::NoClass { .. }));
    }

    #[test]
    fn test_empty_class() {
        let entity = parse_str("class Empty {}", "Empty.java").unwrap();
        assert_eq!(entity.name, "Empty");
        assert!(entity.fields.is_empty());
    }
}
