use std::path::PathBuf;

use clap::Args;
use daogen_config::DaogenToml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Project root containing the entities directory
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Path to daogen.toml (defaults to <root>/daogen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let daogen_toml = DaogenToml::resolve(&self.root, self.config.as_deref()).unwrap_or_exit();
        let mut out = TerminalOutput::new();

        let report = ops::generate(
            &daogen_toml,
            GenerateOptions {
                root: &self.root,
                dry_run: self.dry_run,
            },
            &mut out,
        )?;
        report.render(&mut out);

        Ok(())
    }
}
