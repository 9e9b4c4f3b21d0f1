//! Generate command report data structures.

use std::path::PathBuf;

use daogen_config::ConfigSource;
use daogen_core::PreviewFile;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Where the configuration came from.
    pub config_source: ConfigSource,
    /// Directory the entities were read from.
    pub entities_dir: PathBuf,
    /// Names of the processed entities, in processing order.
    pub entities: Vec<String>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Project root, for display of relative paths.
    pub root: PathBuf,
    /// Written files, in write order.
    pub files: Vec<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.entities.is_empty() {
            out.warning(&format!(
                "no entity files found in {}",
                self.entities_dir.display()
            ));
            return;
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.newline();
        out.key_value("Config", &describe_source(&self.config_source));
        out.section(&format!(
            "Generated {} files for {} entities",
            written.files.len(),
            self.entities.len()
        ));
        for file in &written.files {
            let display = file.strip_prefix(&written.root).unwrap_or(file);
            out.added_item(&display.display().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

pub(super) fn describe_source(source: &ConfigSource) -> String {
    match source {
        ConfigSource::File(path) => path.display().to_string(),
        ConfigSource::Defaults => "defaults (no daogen.toml found)".to_string(),
    }
}
