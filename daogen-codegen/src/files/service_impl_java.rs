//! `<Entity>ServiceImpl.java` service implementation.

use std::path::{Path, PathBuf};

use daogen_config::Config;
use daogen_core::GeneratedFile;

use crate::{
    EntityPlan,
    finder::RenderMode,
    java::{FieldDecl, JavaFile, TypeDecl},
};

/// Service implementation delegating every finder to the repository.
pub struct ServiceImplJava<'a> {
    plan: &'a EntityPlan<'a>,
    config: &'a Config,
}

impl<'a> ServiceImplJava<'a> {
    pub fn new(plan: &'a EntityPlan<'a>, config: &'a Config) -> Self {
        Self { plan, config }
    }

    pub fn class_name(&self) -> String {
        format!("{}ServiceImpl", self.plan.name())
    }
}

impl GeneratedFile for ServiceImplJava<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        self.config
            .services_dir(base)
            .join(super::file_name(&self.class_name(), self.config))
    }

    fn render(&self) -> String {
        let name = self.plan.name();
        let dao = format!("{}Dao", name);

        let implementation = TypeDecl::class(self.class_name())
            .annotation("@Component")
            .implements(format!("{}Service", name))
            .member(FieldDecl::new(&dao, "dao").annotation("@Autowired"))
            .members(
                self.plan
                    .finders()
                    .iter()
                    .map(|m| m.in_mode(RenderMode::Concrete)),
            );

        JavaFile::new(self.config.services_package())
            .imports(super::entity_imports(self.plan, self.config))
            .import(format!("{}.{}", self.config.repositories_package(), dao))
            .import("org.springframework.beans.factory.annotation.Autowired")
            .import("org.springframework.stereotype.Component")
            .add(implementation)
            .render_with_indent(self.config.generate.indent.into())
    }
}
