//! `gofmt` formatter.

use std::{
    io::Write,
    process::{Command, Stdio},
};

use eyre::{Context, Result, bail, eyre};
use protods_codegen::language::Formatter;

/// Pipes generated source through the `gofmt` binary on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoFmt;

impl Formatter for GoFmt {
    fn name(&self) -> &'static str {
        "gofmt"
    }

    fn format(&self, source: &[u8]) -> Result<Vec<u8>> {
        let mut child = Command::new("gofmt")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .wrap_err("failed to run gofmt")?;

        // gofmt reads all of stdin before writing anything, so writing the
        // whole source up front cannot block on a full stdout pipe.
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| eyre!("gofmt stdin not captured"))?;
        stdin
            .write_all(source)
            .wrap_err("failed to write source to gofmt")?;
        drop(stdin);

        let output = child.wait_with_output().wrap_err("gofmt did not finish")?;
        if !output.status.success() {
            bail!(
                "gofmt exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gofmt_available() -> bool {
        Command::new("gofmt")
            .arg("-l")
            .stdin(Stdio::null())
            .output()
            .is_ok_and(|o| o.status.success())
    }

    #[test]
    fn test_formats_source() {
        if !gofmt_available() {
            eprintln!("skipping: gofmt not found");
            return;
        }
        let out = GoFmt.format(b"package demo\n\nvar  x   =1\n").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "package demo\n\nvar x = 1\n");
    }

    #[test]
    fn test_invalid_source_is_error() {
        if !gofmt_available() {
            eprintln!("skipping: gofmt not found");
            return;
        }
        assert!(GoFmt.format(b"package demo\nfunc {").is_err());
    }
}
