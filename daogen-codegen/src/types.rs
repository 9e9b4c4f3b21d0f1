//! Java type-name helpers.

use daogen_config::is_java_keyword;

/// `java.lang` types an entity field is declared with; these never need an import.
const JAVA_LANG: &[&str] = &[
    "Boolean", "Byte", "Character", "CharSequence", "Double", "Enum", "Float", "Integer",
    "Long", "Number", "Object", "Short", "String", "Void",
];

/// Boxed form of a primitive type usable as a generic argument.
///
/// Only the numeric primitives an identity column is declared with are
/// boxed; every other type is returned unchanged.
pub fn wrapper_type(ty: &str) -> &str {
    match ty {
        "int" => "Integer",
        "long" => "Long",
        "double" => "Double",
        "float" => "Float",
        other => other,
    }
}

pub fn optional_of(ty: &str) -> String {
    format!("Optional<{}>", ty)
}

pub fn list_of(ty: &str) -> String {
    format!("List<{}>", ty)
}

/// Unqualified type names referenced by a type expression.
///
/// `Map<String, java.util.Date>` yields `Map` and `String`; qualified names
/// need no import and are skipped, as are keywords such as the `extends` of
/// a bounded wildcard.
pub fn simple_names(ty: &str) -> impl Iterator<Item = &str> {
    ty.split(|c: char| !(c.is_alphanumeric() || matches!(c, '_' | '$' | '.')))
        .filter(|name| !name.is_empty() && !name.contains('.') && !is_java_keyword(name))
}

/// Whether a simple name is visible in every compilation unit.
pub fn is_implicit(name: &str) -> bool {
    is_java_keyword(name) || JAVA_LANG.contains(&name)
}

/// `name` qualified with `package`; the unnamed package leaves it bare.
pub fn qualified(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", package, name)
    }
}
