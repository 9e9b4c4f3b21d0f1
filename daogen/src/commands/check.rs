use std::path::PathBuf;

use clap::Args;
use daogen_config::DaogenToml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Project root containing the entities directory
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Path to daogen.toml (defaults to <root>/daogen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let daogen_toml = DaogenToml::resolve(&self.root, self.config.as_deref()).unwrap_or_exit();

        let report = ops::check(&daogen_toml, &self.root)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
