use std::io;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use walkdir::WalkDir;

use crate::target::DirSize;

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The directory being sized could not be read at all.
    #[error("{}: {source}", path.display())]
    Root { path: PathBuf, source: io::Error },
    #[error("{}: {source}", path.display())]
    Walk { path: PathBuf, source: io::Error },
}

impl ScanError {
    fn from_walk(root: &Path, err: walkdir::Error) -> Self {
        let depth = err.depth();
        let path = err.path().unwrap_or(root).to_path_buf();
        let source = match err.into_io_error() {
            Some(source) => source,
            None => io::Error::other("filesystem loop detected"),
        };
        if depth == 0 {
            ScanError::Root { path, source }
        } else {
            ScanError::Walk { path, source }
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ScanError::Root { path, .. } | ScanError::Walk { path, .. } => path,
        }
    }
}

fn is_permission_denied(err: &walkdir::Error) -> bool {
    err.io_error()
        .is_some_and(|e| e.kind() == io::ErrorKind::PermissionDenied)
}

/// Compute the accessible size of a directory tree.
///
/// Entries that cannot be read for lack of permission are counted in
/// `skipped` instead of failing the scan. A directory that cannot be listed
/// counts once and its subtree is left out entirely. Any other I/O error
/// aborts the walk. Symlinks are never followed.
///
/// The caller is expected to have checked that `root` exists.
pub fn dir_size(root: &Path) -> Result<DirSize, ScanError> {
    let mut size = DirSize::default();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_permission_denied(&err) => {
                // walkdir does not descend into a directory it failed to open
                trace!("skipping {:?}: permission denied", err.path());
                size.skipped += 1;
                continue;
            }
            Err(err) => return Err(ScanError::from_walk(root, err)),
        };

        if entry.file_type().is_dir() {
            continue;
        }

        match entry.metadata() {
            Ok(meta) => size.bytes += meta.len(),
            Err(err) if is_permission_denied(&err) => {
                trace!("skipping {}: permission denied", entry.path().display());
                size.skipped += 1;
            }
            Err(err) => return Err(ScanError::from_walk(root, err)),
        }
    }

    debug!(
        "sized {}: {} bytes, {} skipped",
        root.display(),
        size.bytes,
        size.skipped
    );
    Ok(size)
}
