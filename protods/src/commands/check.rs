use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use protods_schema::Proto;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Schema file to check
    pub proto: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let proto = Proto::from_file(&self.proto).unwrap_or_exit();
        let report = ops::check(&self.proto, &proto)?;

        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
