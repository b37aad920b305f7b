//! Built-in pipeline phases.
//!
//! - [`LowerPhase`] - scans the schema into an unresolved IR
//! - [`ResolvePhase`] - resolves message references and orders the IR

mod lower;
mod resolve;

pub use lower::LowerPhase;
pub use resolve::ResolvePhase;
