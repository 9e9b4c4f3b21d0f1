//! Check command report data structures.

use std::path::PathBuf;

use daogen_config::ConfigSource;

use super::{
    generate::describe_source,
    output::{Output, Report},
};

/// Report data from entity checking.
#[derive(Debug)]
pub struct CheckReport {
    pub config_source: ConfigSource,
    pub entities_dir: PathBuf,
    pub entities: Vec<EntityCheck>,
}

/// What generation would produce for one entity.
#[derive(Debug)]
pub struct EntityCheck {
    pub name: String,
    /// Source file name.
    pub file: String,
    /// Finder signatures, in declaration order.
    pub finders: Vec<String>,
    pub excluded: Vec<ExcludedField>,
}

#[derive(Debug)]
pub struct ExcludedField {
    pub name: String,
    pub reason: String,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Config", &describe_source(&self.config_source));
        out.newline();

        if self.entities.is_empty() {
            out.warning(&format!(
                "no entity files found in {}",
                self.entities_dir.display()
            ));
            return;
        }

        for entity in &self.entities {
            out.section(&format!("{} ({})", entity.name, entity.file));
            for finder in &entity.finders {
                out.added_item(finder);
            }
            for field in &entity.excluded {
                out.removed_item(&format!("{}: {}", field.name, field.reason));
            }
            out.newline();
        }

        let count = self.entities.len();
        out.preformatted(&format!(
            "✓ {} entit{} ready for generation",
            count,
            if count == 1 { "y" } else { "ies" }
        ));
    }
}
