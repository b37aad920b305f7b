use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use protods_codegen::generation::GeneratorRegistry;
use protods_core::{CONFIG_FILE_NAME, Config};
use protods_schema::Proto;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Generator to run (see `protods list`)
    pub generator: String,

    /// Schema files to generate code for
    #[arg(required = true)]
    pub protos: Vec<PathBuf>,

    /// Output directory (defaults to the config value, then the current directory)
    #[arg(short, long, visible_alias = "go_out")]
    pub output: Option<PathBuf>,

    /// Write generated code without running the formatter
    #[arg(long)]
    pub no_format: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Path to protods.toml
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self, registry: &GeneratorRegistry) -> Result<()> {
        let config = Config::load(&self.config)?;
        let generator = registry.get(&self.generator)?;

        let output_dir = self.output.as_ref().unwrap_or(&config.generate.output);
        let opts = GenerateOptions {
            output_dir,
            format: config.generate.format && !self.no_format,
            dry_run: self.dry_run,
        };

        let mut out = TerminalOutput::new();
        for path in &self.protos {
            let proto = Proto::from_file(path).unwrap_or_exit();
            let report = ops::generate(path, &proto, generator, &opts)?;
            report.render(&mut out);
        }

        Ok(())
    }
}
