//! Configuration values for a generation run.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Root of `daogen.toml`.
///
/// Every section is optional; missing keys fall back to the defaults that
/// match a plain `entities/`, `repositories/`, `services/` project layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub project: ProjectConfig,
    pub paths: PathsConfig,
    pub packages: PackagesConfig,
    pub generate: GenerateConfig,
}

/// `[project]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Package every generated namespace hangs off (e.g. `com.example.app`)
    pub base_package: String,
    /// Source file extension, without the dot
    pub extension: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            base_package: "com.example".to_string(),
            extension: "java".to_string(),
        }
    }
}

/// `[paths]`, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub entities: PathBuf,
    pub repositories: PathBuf,
    pub services: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            entities: PathBuf::from("entities"),
            repositories: PathBuf::from("repositories"),
            services: PathBuf::from("services"),
        }
    }
}

/// `[packages]`, each appended to `project.base_package`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackagesConfig {
    pub entities: String,
    pub repositories: String,
    pub services: String,
}

impl Default for PackagesConfig {
    fn default() -> Self {
        Self {
            entities: "entities".to_string(),
            repositories: "repositories".to_string(),
            services: "services".to_string(),
        }
    }
}

/// `[generate]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Field names that never get finder methods
    pub exclude_fields: Vec<String>,
    /// Entity files whose stem ends with one of these are ignored
    pub skip_suffixes: Vec<String>,
    pub indent: IndentStyle,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            exclude_fields: Vec::new(),
            skip_suffixes: vec!["PK".to_string(), "_".to_string()],
            indent: IndentStyle::Tab,
        }
    }
}

/// Indentation of generated sources: `"tab"` or a number of spaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawIndent")]
pub enum IndentStyle {
    #[default]
    Tab,
    Spaces(u8),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIndent {
    Name(String),
    Width(i64),
}

impl TryFrom<RawIndent> for IndentStyle {
    type Error = String;

    fn try_from(raw: RawIndent) -> Result<Self, Self::Error> {
        match raw {
            RawIndent::Name(name) if name == "tab" => Ok(Self::Tab),
            RawIndent::Name(name) => Err(format!(
                "unknown indent '{name}', expected \"tab\" or a number of spaces"
            )),
            RawIndent::Width(width @ 1..=8) => Ok(Self::Spaces(width as u8)),
            RawIndent::Width(width) => Err(format!(
                "indent width must be between 1 and 8, got {width}"
            )),
        }
    }
}

impl Config {
    pub fn entities_package(&self) -> String {
        self.qualify(&self.packages.entities)
    }

    pub fn repositories_package(&self) -> String {
        self.qualify(&self.packages.repositories)
    }

    pub fn services_package(&self) -> String {
        self.qualify(&self.packages.services)
    }

    pub fn entities_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.entities)
    }

    pub fn repositories_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.repositories)
    }

    pub fn services_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.services)
    }

    fn qualify(&self, package: &str) -> String {
        if self.project.base_package.is_empty() {
            package.to_string()
        } else if package.is_empty() {
            self.project.base_package.clone()
        } else {
            format!("{}.{}", self.project.base_package, package)
        }
    }
}
