use crate::error::DocBuildError;
use std::path::Path;

type Result<T> = std::result::Result<T, DocBuildError>;

/// Writes the assembled document to `output_path`, creating the parent
/// directory if it is absent.
pub fn write_document<P: AsRef<Path>>(output_path: P, html: &str) -> Result<()> {
    let output_path = output_path.as_ref();
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty() {
        std::fs::create_dir_all(parent).map_err(|source| {
            DocBuildError::OutputDirCreation {
                dir_path: parent.to_path_buf(),
                source,
            }
        })?;
    }

    std::fs::write(output_path, html).map_err(|source| {
        DocBuildError::DocumentWrite {
            output_path: output_path.to_path_buf(),
            source,
        }
    })
}
