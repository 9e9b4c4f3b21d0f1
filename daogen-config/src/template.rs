//! Default daogen.toml written by `daogen init`.

use std::path::{Path, PathBuf};

use daogen_core::{FileRules, GeneratedFile, Overwrite};

use crate::CONFIG_FILE;

const TEMPLATE: &str = r#"# daogen configuration

[project]
# Package the generated repositories and services live under
base_package = "com.example"
extension = "java"

[paths]
# Directories relative to the project root
entities = "entities"
repositories = "repositories"
services = "services"

[packages]
# Appended to base_package
entities = "entities"
repositories = "repositories"
services = "services"

[generate]
# Fields that never get a finder method
exclude_fields = []
# Entity files whose name ends with one of these are skipped
skip_suffixes = ["PK", "_"]
# "tab" or a number of spaces
indent = "tab"
"#;

/// The default `daogen.toml` (never overwrites an existing one)
pub struct ConfigTemplate;

impl GeneratedFile for ConfigTemplate {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(CONFIG_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::IfMissing,
        }
    }

    fn render(&self) -> String {
        TEMPLATE.to_string()
    }
}
