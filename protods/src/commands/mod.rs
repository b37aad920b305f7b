mod check;
mod completions;
mod generate;
mod inspect;
mod list;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use inspect::InspectCommand;
use list::ListCommand;
use protods_codegen::generation::GeneratorRegistry;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for protods_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "protods")]
#[command(version)]
#[command(about = "Generate Go interface types and setters from protobuf schemas")]
pub(crate) struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self, registry: &GeneratorRegistry) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(registry),
            Commands::List(cmd) => cmd.run(registry),
            Commands::Check(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate code for one or more .proto files
    Generate(GenerateCommand),

    /// List available generators
    List(ListCommand),

    /// Parse and build a .proto file without generating code
    Check(CheckCommand),

    /// Print the built model of a .proto file
    Inspect(InspectCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
