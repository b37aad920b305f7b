use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use protods_codegen::build;
use protods_schema::Proto;

use super::UnwrapOrExit;
use crate::reports::{InspectReport, Report, TerminalOutput};

#[derive(Args)]
pub struct InspectCommand {
    /// Schema file to inspect
    pub proto: PathBuf,

    /// Print the model as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectCommand {
    pub fn run(&self) -> Result<()> {
        let proto = Proto::from_file(&self.proto).unwrap_or_exit();
        let file = build(&proto)
            .wrap_err_with(|| format!("failed to build '{}'", self.proto.display()))?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&file)?);
        } else {
            InspectReport::new(&file).render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
