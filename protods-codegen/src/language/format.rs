//! Best-effort formatting of generated source.

use eyre::Result;

/// A source formatter for generated code (e.g., `gofmt`).
pub trait Formatter: Send + Sync {
    /// Formatter name, used in log messages.
    fn name(&self) -> &'static str;

    /// Format `source`, returning the formatted bytes.
    fn format(&self, source: &[u8]) -> Result<Vec<u8>>;
}

/// Format `source`, falling back to the unformatted bytes on failure.
///
/// Formatting never fails a run; the failure is logged at `warn`.
pub fn format_or_passthrough(formatter: &dyn Formatter, source: Vec<u8>) -> Vec<u8> {
    match formatter.format(&source) {
        Ok(formatted) => formatted,
        Err(err) => {
            tracing::warn!(
                formatter = formatter.name(),
                error = %err,
                "formatting failed, writing unformatted output"
            );
            source
        }
    }
}
