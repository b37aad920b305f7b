//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod inspect;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult};
pub use inspect::InspectReport;
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Report, TerminalOutput};
