use clap::Args;
use eyre::Result;
use protods_codegen::generation::GeneratorRegistry;

#[derive(Args)]
pub struct ListCommand {}

impl ListCommand {
    pub fn run(&self, registry: &GeneratorRegistry) -> Result<()> {
        if registry.is_empty() {
            println!("No generators registered");
            return Ok(());
        }

        let width = registry.names().map(str::len).max().unwrap_or_default();

        println!("Generators:");
        for generator in registry.iter() {
            println!(
                "  {:width$}  {}",
                generator.name(),
                generator.usage(),
                width = width
            );
        }

        Ok(())
    }
}
