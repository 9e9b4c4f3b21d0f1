//! `<Entity>Dao.java` repository interface.

use std::path::{Path, PathBuf};

use daogen_config::Config;
use daogen_core::GeneratedFile;

use crate::{
    EntityPlan,
    finder::RenderMode,
    java::{JavaFile, TypeDecl},
};

/// Spring Data repository for one entity.
pub struct DaoJava<'a> {
    plan: &'a EntityPlan<'a>,
    config: &'a Config,
}

impl<'a> DaoJava<'a> {
    pub fn new(plan: &'a EntityPlan<'a>, config: &'a Config) -> Self {
        Self { plan, config }
    }

    pub fn class_name(&self) -> String {
        format!("{}Dao", self.plan.name())
    }
}

impl GeneratedFile for DaoJava<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        self.config
            .repositories_dir(base)
            .join(super::file_name(&self.class_name(), self.config))
    }

    fn render(&self) -> String {
        let repository = TypeDecl::interface(self.class_name())
            .annotation("@Repository")
            .extends(format!(
                "JpaRepository<{}, {}>",
                self.plan.name(),
                self.plan.primary_key_type()
            ))
            .members(
                self.plan
                    .finders()
                    .iter()
                    .map(|m| m.in_mode(RenderMode::Declaration)),
            );

        JavaFile::new(self.config.repositories_package())
            .imports(super::entity_imports(self.plan, self.config))
            .import("org.springframework.data.jpa.repository.JpaRepository")
            .import("org.springframework.stereotype.Repository")
            .add(repository)
            .render_with_indent(self.config.generate.indent.into())
    }
}
