use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Query the symbolic target of a `path`.
///
/// This is a generic wrapper around `read_link()` to also check whether it's
/// a symlink before reading its target. The check never follows the link
/// itself. The path need not be a symlink, in which case `None` is returned.
fn readlink(path: &Path) -> io::Result<Option<PathBuf>> {
    let metadata = fs::symlink_metadata(path)?;
    if !metadata.file_type().is_symlink() {
        Ok(None)
    } else {
        let target = fs::read_link(path)?;
        Ok(Some(target))
    }
}

/// Find the symbolic links in `directory` that point at `target`.
///
/// Every entry of `directory` that is itself a symlink is resolved and
/// compared against the canonicalized `target`; the full paths of the
/// matching entries are returned in directory iteration order. A relative
/// link target is interpreted relative to `directory`, not to the caller's
/// working directory, so links like `../event0` match the same node their
/// creator meant.
///
/// An unresolvable `target` is an error, not an empty match set, and any
/// failure on a single entry aborts the whole call: a partially reported
/// set of aliases would be misleading.
pub fn find_links_to(target: &Path, directory: &Path) -> Result<Vec<PathBuf>> {
    let target = fs::canonicalize(target).map_err(|source| Error::Resolve {
        path: target.to_path_buf(),
        source,
    })?;

    let entries = fs::read_dir(directory).map_err(|source| Error::Access {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut links = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::Access {
            path: directory.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        let raw = match readlink(&path).map_err(|source| Error::ReadLink {
            path: path.clone(),
            source,
        })? {
            Some(raw) => raw,
            None => continue,
        };

        // A relative link text is only meaningful from within `directory`;
        // joining before canonicalizing anchors it there. join() discards
        // the left side when `raw` is absolute.
        let destination =
            fs::canonicalize(directory.join(&raw)).map_err(|source| Error::Resolve {
                path: path.clone(),
                source,
            })?;

        if destination == target {
            links.push(path);
        }
    }

    Ok(links)
}
