use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the corpus loader.
///
/// `RootNotFound`, `UnknownCategory` and `DocumentNotFound` are
/// configuration problems: the caller picked something that does not
/// exist. `Io` and `Encoding` are fatal for the affected document only;
/// other documents keep processing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("corpus root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("no such song {name:?} in category {category:?}")]
    DocumentNotFound { category: String, name: String },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8", .path.display())]
    Encoding { path: PathBuf },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
