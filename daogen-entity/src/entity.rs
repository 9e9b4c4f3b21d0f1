use crate::Marker;

/// A field declared directly in an entity class body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Declared name
    pub name: String,
    /// Type as written, without array dimensions (generic arguments kept)
    pub declared_type: String,
    /// Annotations on the declaration, in source order
    pub markers: Vec<Marker>,
    /// Whether the type or the declarator carries array dimensions
    pub is_array: bool,
}

/// The roles a field plays, folded from its markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Roles {
    pub identity: bool,
    pub transient: bool,
    pub one_to_many: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            markers: Vec::new(),
            is_array: false,
        }
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    pub fn roles(&self) -> Roles {
        let mut roles = Roles::default();
        for marker in &self.markers {
            match marker {
                Marker::Identity => roles.identity = true,
                Marker::Transient => roles.transient = true,
                Marker::OneToMany => roles.one_to_many = true,
                Marker::Other(_) => {}
            }
        }
        roles
    }

    pub fn is_identity(&self) -> bool {
        self.roles().identity
    }
}

/// A parsed entity class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityClass {
    pub name: String,
    /// Declared package, if any
    pub package: Option<String>,
    /// Single-type imports of the source file (no static or on-demand imports)
    pub imports: Vec<String>,
    /// Fields in declaration order
    pub fields: Vec<Field>,
}

impl EntityClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
            imports: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    /// The import that brings `simple_name` into scope, if the source has one.
    pub fn import_for(&self, simple_name: &str) -> Option<&str> {
        self.imports
            .iter()
            .find(|import| import.rsplit('.').next() == Some(simple_name))
            .map(String::as_str)
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// The first field marked `@Id` or `@EmbeddedId`.
    pub fn primary_key(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.is_identity())
    }
}
