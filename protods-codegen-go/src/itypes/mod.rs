//! The `itypes` emitter: Go interface types, map containers and proto
//! setters for a built [`File`].
//!
//! Output order is fixed: header and package clause, then every map type in
//! canonical-name order, then every message in name order. Given the same
//! `File` the output is byte-identical.

mod maps;
mod messages;

use eyre::Result;
use protods_ir::File;

use crate::ast::GoFile;

/// Render the Go source for `file`.
pub fn render(file: &File) -> Result<String> {
    let mut go = GoFile::new(&file.package);

    for map in &file.maps {
        maps::push_map(&mut go, map);
    }
    for message in &file.messages {
        messages::push_message(&mut go, file, message)?;
    }

    Ok(go.build())
}
