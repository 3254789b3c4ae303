use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no usernames provided: pass a file path or a list of usernames")]
    Empty,
    #[error("unable to read usernames from '{}': {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Unavailable {
            path: path.into(),
            source,
        }
    }
}
