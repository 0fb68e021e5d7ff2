use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while searching a directory for links to a target.
///
/// Directory-access problems are kept apart from path-resolution problems,
/// so a caller can tell a missing alias directory from a vanished target.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A path could not be canonicalized (missing file, dangling link
    /// chain, permission denied on a component).
    #[error("unable to resolve {}: {}", path.display(), source)]
    Resolve { path: PathBuf, source: io::Error },

    /// The searched directory could not be opened or iterated.
    #[error("unable to open directory {}: {}", path.display(), source)]
    Access { path: PathBuf, source: io::Error },

    /// An entry's metadata or link text could not be read.
    #[error("unable to read link {}: {}", path.display(), source)]
    ReadLink { path: PathBuf, source: io::Error },
}
