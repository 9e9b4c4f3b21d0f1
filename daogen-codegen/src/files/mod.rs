//! Java source file generators, one per artifact kind.

mod dao_java;
mod service_impl_java;
mod service_java;

pub use dao_java::DaoJava;
use daogen_config::Config;
pub use service_impl_java::ServiceImplJava;
pub use service_java::ServiceJava;

use crate::{EntityPlan, types::qualified};

/// Imports every artifact of an entity shares: the finder collection types,
/// the entity itself and the types its finder parameters mention.
///
/// The entity lives in the package its source declares, or in the
/// configured entities package when it declares none.
fn entity_imports(plan: &EntityPlan<'_>, config: &Config) -> Vec<String> {
    let package = plan
        .package()
        .map(str::to_string)
        .unwrap_or_else(|| config.entities_package());

    plan.collection_imports()
        .into_iter()
        .map(str::to_string)
        .chain(std::iter::once(qualified(&package, plan.name())))
        .chain(plan.type_imports(&package))
        .collect()
}

fn file_name(class: &str, config: &Config) -> String {
    format!("{}.{}", class, config.project.extension)
}
