//! Per-entity generation plan.

use std::collections::BTreeSet;

use daogen_entity::{EntityClass, Exclusion, Field, FieldFilter};

use crate::{
    Error, Result,
    finder::{FinderKind, FinderMethod, finder_methods},
    types::{is_implicit, qualified, simple_names, wrapper_type},
};

/// Everything the artifact renderers need to know about one entity.
///
/// Building a plan is the only fallible step of rendering, so an entity
/// either gets all of its files or none.
#[derive(Debug, Clone)]
pub struct EntityPlan<'a> {
    entity: &'a EntityClass,
    primary_key: &'a Field,
    finders: Vec<FinderMethod>,
    excluded: Vec<(&'a Field, Exclusion)>,
}

impl<'a> EntityPlan<'a> {
    pub fn new(entity: &'a EntityClass, filter: &FieldFilter) -> Result<Self> {
        let primary_key = entity.primary_key().ok_or_else(|| {
            Box::new(Error::MissingPrimaryKey {
                entity: entity.name.clone(),
            })
        })?;

        if let Some(reason) = filter.exclusion(primary_key) {
            return Err(Box::new(Error::IneligiblePrimaryKey {
                entity: entity.name.clone(),
                field: primary_key.name.clone(),
                reason,
            }));
        }

        let excluded = entity
            .fields
            .iter()
            .filter_map(|field| filter.exclusion(field).map(|reason| (field, reason)))
            .collect();

        Ok(Self {
            entity,
            primary_key,
            finders: finder_methods(entity, filter),
            excluded,
        })
    }

    pub fn name(&self) -> &str {
        &self.entity.name
    }

    /// Package the entity source declares, if any.
    pub fn package(&self) -> Option<&str> {
        self.entity.package.as_deref()
    }

    /// Primary key type as a generic argument (`int` becomes `Integer`).
    pub fn primary_key_type(&self) -> &str {
        wrapper_type(&self.primary_key.declared_type)
    }

    pub fn finders(&self) -> &[FinderMethod] {
        &self.finders
    }

    /// Fields without a finder, with the first reason each was dropped.
    pub fn excluded(&self) -> &[(&'a Field, Exclusion)] {
        &self.excluded
    }

    /// `java.util` imports the finder return types need.
    pub fn collection_imports(&self) -> Vec<&'static str> {
        let mut imports = Vec::new();
        if self.finders.iter().any(|m| m.kind == FinderKind::FindBy) {
            imports.push("java.util.List");
        }
        if self.finders.iter().any(|m| m.kind == FinderKind::FindOne) {
            imports.push("java.util.Optional");
        }
        imports
    }

    /// Imports for the types used by finder parameters and the primary key.
    ///
    /// A name the entity source imports keeps that import. Any other name
    /// outside `java.lang` lives next to the entity, in `entity_package`.
    pub fn type_imports(&self, entity_package: &str) -> BTreeSet<String> {
        self.finders
            .iter()
            .map(|m| m.param_type.as_str())
            .chain(std::iter::once(self.primary_key_type()))
            .flat_map(simple_names)
            .filter(|name| !is_implicit(name) && *name != self.entity.name)
            .map(|name| match self.entity.import_for(name) {
                Some(import) => import.to_string(),
                None => qualified(entity_package, name),
            })
            .collect()
    }
}
