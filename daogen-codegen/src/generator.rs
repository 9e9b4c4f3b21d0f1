//! Java repository and service generator.

use std::path::Path;

use daogen_config::Config;
use daogen_core::{GenerateResult, GeneratedFile, PreviewFile, write_file};
use daogen_entity::{EntityClass, FieldFilter};

use crate::{
    EntityPlan, Result,
    files::{DaoJava, ServiceImplJava, ServiceJava},
};

/// Generates the repository, service and service implementation of an entity.
pub struct Generator<'a> {
    config: &'a Config,
    filter: FieldFilter,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            filter: FieldFilter::new(config.generate.exclude_fields.iter().cloned()),
        }
    }

    pub fn filter(&self) -> &FieldFilter {
        &self.filter
    }

    /// Resolve the primary key and finder methods of `entity`.
    pub fn plan<'e>(&self, entity: &'e EntityClass) -> Result<EntityPlan<'e>> {
        EntityPlan::new(entity, &self.filter)
    }

    /// Render every artifact without writing to disk.
    ///
    /// Paths are relative to the project root.
    pub fn preview(&self, plan: &EntityPlan<'_>) -> Vec<PreviewFile> {
        self.artifacts(plan)
            .iter()
            .map(|file| PreviewFile {
                path: file.path(Path::new("")).display().to_string(),
                content: file.render(),
            })
            .collect()
    }

    /// Write every artifact below `root`.
    ///
    /// All sources are rendered before the first file is touched.
    pub fn generate(&self, plan: &EntityPlan<'_>, root: &Path) -> eyre::Result<GenerateResult> {
        let rendered: Vec<_> = self
            .artifacts(plan)
            .iter()
            .map(|file| (file.path(root), file.render()))
            .collect();

        let mut result = GenerateResult::default();
        for (path, content) in rendered {
            write_file(&path, &content)?;
            result.written.push(path);
        }
        Ok(result)
    }

    fn artifacts<'p>(&'p self, plan: &'p EntityPlan<'p>) -> Vec<Box<dyn GeneratedFile + 'p>> {
        vec![
            Box::new(DaoJava::new(plan, self.config)),
            Box::new(ServiceJava::new(plan, self.config)),
            Box::new(ServiceImplJava::new(plan, self.config)),
        ]
    }
}
