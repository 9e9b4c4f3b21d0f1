use std::{collections::BTreeSet, fmt};

use crate::Field;

/// Why a field gets no finder method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    Transient,
    OneToMany,
    Array,
    /// Listed in `generate.exclude_fields`
    Configured,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Transient => "marked @Transient",
            Self::OneToMany => "a @OneToMany relation",
            Self::Array => "array-typed",
            Self::Configured => "listed in exclude_fields",
        };
        f.write_str(reason)
    }
}

/// Decides which fields are eligible for finder methods.
#[derive(Debug, Clone, Default)]
pub struct FieldFilter {
    excluded: BTreeSet<String>,
}

impl FieldFilter {
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: excluded.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_eligible(&self, field: &Field) -> bool {
        self.exclusion(field).is_none()
    }

    /// The first reason `field` is excluded, if any.
    pub fn exclusion(&self, field: &Field) -> Option<Exclusion> {
        let roles = field.roles();
        if roles.transient {
            Some(Exclusion::Transient)
        } else if roles.one_to_many {
            Some(Exclusion::OneToMany)
        } else if field.is_array {
            Some(Exclusion::Array)
        } else if self.excluded.contains(&field.name) {
            Some(Exclusion::Configured)
        } else {
            None
        }
    }
}
