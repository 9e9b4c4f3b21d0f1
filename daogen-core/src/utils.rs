//! Shared utility functions for code generation.

/// Uppercase the first character, leaving the rest untouched (e.g., "email" -> "Email")
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character, leaving the rest untouched (e.g., "UserId" -> "userId")
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_first() {
        assert_eq!(upper_first("email"), "Email");
        assert_eq!(upper_first("createdAt"), "CreatedAt");
        assert_eq!(upper_first("URL"), "URL");
        assert_eq!(upper_first("x"), "X");
        assert_eq!(upper_first(""), "");
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("Email"), "email");
        assert_eq!(lower_first("userId"), "userId");
        assert_eq!(lower_first("URL"), "uRL");
        assert_eq!(lower_first(""), "");
    }
}
