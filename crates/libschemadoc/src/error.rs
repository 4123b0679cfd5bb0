use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a documentation build.
///
/// Individually malformed record files are not represented here: they are
/// skipped with a warning and the run continues. Only failures at the
/// acquisition and persistence boundaries are fatal.
#[derive(Debug, Error)]
pub enum DocBuildError {
    #[error(
        "Failed to write the document artifact to `{}`: {source}",
        output_path.display(),
    )]
    DocumentWrite {
        output_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Failed to create the output directory `{}`: {source}",
        dir_path.display(),
    )]
    OutputDirCreation {
        dir_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Failed to enumerate descriptor records under `{}`: {source}",
        dir_path.display(),
    )]
    UnreadableRecordDir {
        dir_path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
