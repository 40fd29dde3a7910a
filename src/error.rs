use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A dictionary or the file being checked could not be read
    #[error("Failed to read {what}: {}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        what: &'static str,
        #[source]
        source: io::Error,
    },

    /// The report file could not be created or written
    #[error("Failed to write report: {}", .path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unknown output mode '{0}' (expected p/print or w/write)")]
    InvalidModeSelection(String),

    #[error("Failed to build dictionary")]
    DictionaryBuild(#[from] fst::Error),
}

impl Error {
    pub(crate) fn source_unavailable(
        path: impl Into<PathBuf>,
        what: &'static str,
        source: io::Error,
    ) -> Self {
        Error::SourceUnavailable {
            path: path.into(),
            what,
            source,
        }
    }

    pub(crate) fn destination_unwritable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::DestinationUnwritable {
            path: path.into(),
            source,
        }
    }
}
