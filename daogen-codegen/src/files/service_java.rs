//! `<Entity>Service.java` service interface.

use std::path::{Path, PathBuf};

use daogen_config::Config;
use daogen_core::GeneratedFile;

use crate::{
    EntityPlan,
    finder::RenderMode,
    java::{JavaFile, TypeDecl},
};

/// Read-only transactional service interface for one entity.
pub struct ServiceJava<'a> {
    plan: &'a EntityPlan<'a>,
    config: &'a Config,
}

impl<'a> ServiceJava<'a> {
    pub fn new(plan: &'a EntityPlan<'a>, config: &'a Config) -> Self {
        Self { plan, config }
    }

    pub fn class_name(&self) -> String {
        format!("{}Service", self.plan.name())
    }
}

impl GeneratedFile for ServiceJava<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        self.config
            .services_dir(base)
            .join(super::file_name(&self.class_name(), self.config))
    }

    fn render(&self) -> String {
        let service = TypeDecl::interface(self.class_name())
            .annotation("@Transactional(readOnly = true)")
            .annotation("@Service")
            .members(
                self.plan
                    .finders()
                    .iter()
                    .map(|m| m.in_mode(RenderMode::Abstract)),
            );

        JavaFile::new(self.config.services_package())
            .imports(super::entity_imports(self.plan, self.config))
            .import("org.springframework.stereotype.Service")
            .import("org.springframework.transaction.annotation.Transactional")
            .add(service)
            .render_with_indent(self.config.generate.indent.into())
    }
}
