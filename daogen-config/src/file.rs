use std::path::{Path, PathBuf};

use crate::{CONFIG_FILE, Config, Result};

/// Where a run's configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from this file
    File(PathBuf),
    /// No daogen.toml was found; built-in defaults apply
    Defaults,
}

/// Configuration resolved for a project root.
#[derive(Debug, Clone)]
pub struct DaogenToml {
    source: ConfigSource,
    config: Config,
}

impl DaogenToml {
    /// Open and parse a daogen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let config = Config::from_file(&path)?;
        Ok(Self {
            source: ConfigSource::File(path),
            config,
        })
    }

    /// Resolve the configuration for `root`.
    ///
    /// An explicit path must exist. Without one, `<root>/daogen.toml` is used
    /// when present and the defaults otherwise.
    pub fn resolve(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::open(path);
        }

        let candidate = root.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::open(candidate)
        } else {
            Ok(Self {
                source: ConfigSource::Defaults,
                config: Config::default(),
            })
        }
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
