//! Validation of configured Java names.

use miette::SourceSpan;

use crate::{Config, Result, error::SourceContext};

/// Java reserved words and literals that cannot be used as identifiers
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "_",
    // Literals
    "true", "false", "null",
];

/// Whether `name` is a Java reserved word or literal.
pub fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Returns None if `name` is a valid Java identifier, Some(reason) otherwise
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, '_' or '$'"),
    }

    if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return Some("name must contain only letters, digits, '_' and '$'");
    }

    if is_java_keyword(name) {
        return Some("name is a Java reserved word");
    }

    None
}

/// Returns None if `name` is a dotted package name, Some(reason) otherwise
pub(crate) fn validate_package(name: &str) -> Option<&'static str> {
    name.split('.').find_map(validate_identifier)
}

/// Find the span of a quoted value in the TOML source
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    if let Some(pos) = src.find(&quoted) {
        return Some(SourceSpan::from((pos + 1, value.len())));
    }
    if value.is_empty() {
        return None;
    }
    src.find(value)
        .map(|pos| SourceSpan::from((pos, value.len())))
}

/// Validate a parsed configuration against its source.
pub(crate) fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    let base = &config.project.base_package;
    if let Some(reason) = validate_package(base).filter(|_| !base.is_empty()) {
        return Err(ctx.invalid_identifier_error(base.as_str(), "base package", reason));
    }

    for package in [
        &config.packages.entities,
        &config.packages.repositories,
        &config.packages.services,
    ] {
        if package.is_empty() && base.is_empty() {
            return Err(ctx.validation_error(
                "a package must be set when project.base_package is empty",
                "[packages]",
            ));
        }
        if let Some(reason) = validate_package(package).filter(|_| !package.is_empty()) {
            return Err(ctx.invalid_identifier_error(package.as_str(), "package", reason));
        }
    }

    if config.project.extension.is_empty() || config.project.extension.starts_with('.') {
        return Err(ctx.validation_error(
            "extension must be non-empty and given without the leading dot",
            "extension",
        ));
    }

    for field in &config.generate.exclude_fields {
        if let Some(reason) = validate_identifier(field) {
            return Err(ctx.invalid_identifier_error(field.as_str(), "excluded field", reason));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("email").is_none());
        assert!(validate_identifier("serialVersionUID").is_none());
        assert!(validate_identifier("_hidden").is_none());
        assert!(validate_identifier("$proxy").is_none());
        assert!(validate_identifier("field2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2fast").is_some());
        assert!(validate_identifier("with-dash").is_some());
        assert!(validate_identifier("with space").is_some());
        assert!(validate_identifier("class").is_some());
        assert!(validate_identifier("null").is_some());
    }

    #[test]
    fn test_packages() {
        assert!(validate_package("com.example.app").is_none());
        assert!(validate_package("single").is_none());
        assert!(validate_package("com..example").is_some());
        assert!(validate_package("com.example.").is_some());
        assert!(validate_package("com.new.app").is_some());
    }

    #[test]
    fn test_find_value_span_quoted() {
        let src = "[project]\nbase_package = \"com.1bad\"\n";
        let span = find_value_span(src, "com.1bad").unwrap();
        assert_eq!(span.offset(), 26);
        assert_eq!(span.len(), 8);
    }

    #[test]
    fn test_find_value_span_missing() {
        assert!(find_value_span("[project]", "absent").is_none());
    }
}
