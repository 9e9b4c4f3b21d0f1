use std::path::PathBuf;

use clap::Args;
use daogen_config::{CONFIG_FILE, ConfigTemplate};
use daogen_core::{GeneratedFile, WriteResult};
use eyre::Result;

#[derive(Args)]
pub struct InitCommand {
    /// Project root to write daogen.toml into
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let path = ConfigTemplate.path(&self.root);

        match ConfigTemplate.write(&self.root)? {
            WriteResult::Written => {
                println!("Created {}", path.display());
                println!();
                println!("Next steps:");
                println!("  edit {} to match your project layout", CONFIG_FILE);
                println!("  daogen check");
                println!("  daogen generate");
            }
            WriteResult::Skipped => {
                println!("{} already exists, leaving it unchanged", path.display());
            }
        }

        Ok(())
    }
}
