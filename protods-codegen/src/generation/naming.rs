use std::path::{Path, PathBuf};

use protods_schema::PROTO_SUFFIX;

use crate::{GenerateError, language::Generator};

/// Output file name for a schema: the schema's base name with its `.proto`
/// suffix replaced by `.<short-name>.<ext>` (e.g., `demo/hello.proto` ->
/// `hello.itypes.go`). The caller joins it onto the output directory.
pub fn output_file_name(
    proto_path: &Path,
    generator: &dyn Generator,
) -> Result<PathBuf, GenerateError> {
    let base = proto_path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_suffix(PROTO_SUFFIX))
        .filter(|base| !base.is_empty())
        .ok_or_else(|| GenerateError::NotProto {
            path: proto_path.to_path_buf(),
        })?;

    Ok(PathBuf::from(format!(
        "{base}.{}.{}",
        generator.short_name(),
        generator.file_extension()
    )))
}
