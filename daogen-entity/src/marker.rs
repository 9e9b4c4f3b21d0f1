/// Field annotation kinds recognised by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// `@Id` or `@EmbeddedId`
    Identity,
    /// `@Transient`
    Transient,
    /// `@OneToMany`
    OneToMany,
    /// Any other annotation, kept by simple name
    Other(String),
}

impl Marker {
    /// Classify an annotation by name. Qualified names match on their last segment.
    pub fn from_annotation(name: &str) -> Self {
        let simple = name.rsplit('.').next().unwrap_or(name).trim();
        match simple {
            "Id" | "EmbeddedId" => Self::Identity,
            "Transient" => Self::Transient,
            "OneToMany" => Self::OneToMany,
            other => Self::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_markers() {
        assert_eq!(Marker::from_annotation("Id"), Marker::Identity);
        assert_eq!(Marker::from_annotation("EmbeddedId"), Marker::Identity);
        assert_eq!(Marker::from_annotation("Transient"), Marker::Transient);
        assert_eq!(Marker::from_annotation("OneToMany"), Marker::OneToMany);
    }

    #[test]
    fn test_qualified_names() {
        assert_eq!(
            Marker::from_annotation("javax.persistence.Id"),
            Marker::Identity
        );
        assert_eq!(
            Marker::from_annotation("jakarta.persistence.Transient"),
            Marker::Transient
        );
    }

    #[test]
    fn test_other_markers() {
        assert_eq!(
            Marker::from_annotation("Column"),
            Marker::Other("Column".to_string())
        );
        assert_eq!(
            Marker::from_annotation("ManyToOne"),
            Marker::Other("ManyToOne".to_string())
        );
        // Case matters, as in Java
        assert_eq!(
            Marker::from_annotation("id"),
            Marker::Other("id".to_string())
        );
    }
}
