//! Finder-method generation.
//!
//! Every eligible field yields one finder: the identity field a `findOne`
//! lookup, every other field a `findBy<Field>` query. The same method is
//! rendered three ways depending on the artifact it lands in.

use daogen_core::{lower_first, upper_first};
use daogen_entity::{EntityClass, Field, FieldFilter};

use crate::{
    builder::{CodeFragment, Renderable},
    types::{list_of, optional_of, wrapper_type},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinderKind {
    /// Lookup by primary key, returning `Optional<E>`
    FindOne,
    /// Query by a plain field, returning `List<E>`
    FindBy,
}

/// How a finder method is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Repository interface method
    Declaration,
    /// Service interface method
    Abstract,
    /// Service implementation delegating to the repository
    Concrete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderMethod {
    pub kind: FinderKind,
    pub name: String,
    pub return_type: String,
    pub param_type: String,
    pub param_name: String,
}

impl FinderMethod {
    /// The finder for `field` of the entity named `entity`.
    pub fn for_field(entity: &str, field: &Field) -> Self {
        if field.is_identity() {
            Self {
                kind: FinderKind::FindOne,
                name: "findOne".to_string(),
                return_type: optional_of(entity),
                param_type: wrapper_type(&field.declared_type).to_string(),
                param_name: "id".to_string(),
            }
        } else {
            Self {
                kind: FinderKind::FindBy,
                name: format!("findBy{}", upper_first(&field.name)),
                return_type: list_of(entity),
                param_type: field.declared_type.clone(),
                param_name: lower_first(&field.name),
            }
        }
    }

    /// `<Return> <name>(<ParamType> <param>)`
    pub fn signature(&self) -> String {
        format!(
            "{} {}({} {})",
            self.return_type, self.name, self.param_type, self.param_name
        )
    }

    pub fn render(&self, mode: RenderMode) -> Vec<CodeFragment> {
        match mode {
            RenderMode::Declaration | RenderMode::Abstract => {
                vec![CodeFragment::Line(format!("{};", self.signature()))]
            }
            RenderMode::Concrete => vec![CodeFragment::block(
                format!("public {} {{", self.signature()),
                vec![CodeFragment::Line(format!(
                    "return dao.{}({});",
                    self.name, self.param_name
                ))],
                Some("}".to_string()),
            )],
        }
    }

    /// Bind a render mode so the method can be added as a type member.
    pub fn in_mode(&self, mode: RenderMode) -> Finder<'_> {
        Finder { method: self, mode }
    }
}

/// A [`FinderMethod`] paired with the mode it renders in.
#[derive(Debug, Clone, Copy)]
pub struct Finder<'a> {
    method: &'a FinderMethod,
    mode: RenderMode,
}

impl Renderable for Finder<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.method.render(self.mode)
    }
}

/// Finder methods for every eligible field, in declaration order.
pub fn finder_methods(entity: &EntityClass, filter: &FieldFilter) -> Vec<FinderMethod> {
    entity
        .fields
        .iter()
        .filter(|field| filter.is_eligible(field))
        .map(|field| FinderMethod::for_field(&entity.name, field))
        .collect()
}

#[cfg(test)]
mod tests {
    use daogen_entity::Marker;

    use super::*;
    use crate::builder::CodeBuilder;

    fn user() -> EntityClass {
        EntityClass::new("User")
            .field(Field::new("id", "int").marker(Marker::Identity))
            .field(Field::new("email", "String"))
            .field(Field::new("createdAt", "Date").array())
    }

    fn render(method: &FinderMethod, mode: RenderMode) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(&method.in_mode(mode));
        builder.build()
    }

    #[test]
    fn test_user_finders() {
        let methods = finder_methods(&user(), &FieldFilter::default());
        let signatures: Vec<_> = methods.iter().map(FinderMethod::signature).collect();
        assert_eq!(
            signatures,
            [
                "Optional<User> findOne(Integer id)",
                "List<User> findByEmail(String email)"
            ]
        );
    }

    #[test]
    fn test_find_one_per_identity_field() {
        let methods = finder_methods(&user(), &FieldFilter::default());
        let find_one = methods
            .iter()
            .filter(|m| m.kind == FinderKind::FindOne)
            .count();
        assert_eq!(find_one, 1);
        assert_eq!(methods.len(), 2);
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let entity = EntityClass::new("Order")
            .field(Field::new("total", "BigDecimal"))
            .field(Field::new("id", "long").marker(Marker::Identity))
            .field(Field::new("items", "Set<Item>").marker(Marker::OneToMany))
            .field(Field::new("note", "String").marker(Marker::Transient))
            .field(Field::new("Status", "Status"));

        let names: Vec<_> = finder_methods(&entity, &FieldFilter::default())
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, ["findByTotal", "findOne", "findByStatus"]);
    }

    #[test]
    fn test_configured_exclusion() {
        let filter = FieldFilter::new(["email"]);
        let methods = finder_methods(&user(), &filter);
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].kind, FinderKind::FindOne);
    }

    #[test]
    fn test_param_name_is_lowered() {
        let field = Field::new("Status", "Status");
        let method = FinderMethod::for_field("Order", &field);
        assert_eq!(method.name, "findByStatus");
        assert_eq!(method.param_name, "status");
    }

    #[test]
    fn test_generic_types_are_kept() {
        let field = Field::new("tags", "Set<String>");
        let method = FinderMethod::for_field("Post", &field);
        assert_eq!(method.signature(), "List<Post> findByTags(Set<String> tags)");
    }

    #[test]
    fn test_embedded_id_type_unchanged() {
        let field = Field::new("key", "TeamPK").marker(Marker::Identity);
        let method = FinderMethod::for_field("Team", &field);
        assert_eq!(method.signature(), "Optional<Team> findOne(TeamPK id)");
    }

    #[test]
    fn test_declaration_and_abstract_modes() {
        let method = FinderMethod::for_field("User", &Field::new("email", "String"));
        let expected = "List<User> findByEmail(String email);\n";
        assert_eq!(render(&method, RenderMode::Declaration), expected);
        assert_eq!(render(&method, RenderMode::Abstract), expected);
    }

    #[test]
    fn test_concrete_mode_delegates() {
        let id = Field::new("id", "long").marker(Marker::Identity);
        let method = FinderMethod::for_field("User", &id);
        assert_eq!(
            render(&method, RenderMode::Concrete),
            "public Optional<User> findOne(Long id) {\n\treturn dao.findOne(id);\n}\n"
        );
    }
}
