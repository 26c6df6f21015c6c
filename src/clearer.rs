use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum ClearError {
    #[error("list {}: permission denied", path.display())]
    ListDenied { path: PathBuf },
    #[error("read dir {}: {source}", path.display())]
    List { path: PathBuf, source: io::Error },
}

impl ClearError {
    fn from_list(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::PermissionDenied {
            ClearError::ListDenied {
                path: path.to_path_buf(),
            }
        } else {
            ClearError::List {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Progress reported while a directory is being cleared.
#[derive(Debug)]
pub enum ClearEvent<'a> {
    /// The directory has no children; nothing is removed.
    Empty,
    Started { path: &'a Path, children: usize },
    Deleted { path: &'a Path },
    Skipped { path: &'a Path, error: &'a io::Error },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearTally {
    pub deleted: usize,
    pub skipped: usize,
}

/// Remove one child, recursively if it is a real directory. Symlinks are
/// unlinked, never followed.
fn remove_entry(path: &Path) -> io::Result<()> {
    let meta = fs::symlink_metadata(path)?;
    if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Delete every direct child of `dir`, leaving `dir` itself in place.
///
/// A child that cannot be removed is counted as skipped and the loop moves
/// on. Only a failure to list `dir` is returned as an error.
pub fn clear_dir_contents(
    dir: &Path,
    on_event: &mut dyn FnMut(ClearEvent<'_>),
) -> Result<ClearTally, ClearError> {
    let children = fs::read_dir(dir)
        .and_then(|rd| rd.map(|e| e.map(|e| e.path())).collect::<io::Result<Vec<_>>>())
        .map_err(|e| ClearError::from_list(dir, e))?;

    let mut tally = ClearTally::default();
    if children.is_empty() {
        on_event(ClearEvent::Empty);
        return Ok(tally);
    }

    on_event(ClearEvent::Started {
        path: dir,
        children: children.len(),
    });

    for child in &children {
        match remove_entry(child) {
            Ok(()) => {
                debug!("removed {}", child.display());
                tally.deleted += 1;
                on_event(ClearEvent::Deleted { path: child });
            }
            Err(error) => {
                if error.kind() != io::ErrorKind::PermissionDenied {
                    warn!("failed to remove {}: {error}", child.display());
                }
                tally.skipped += 1;
                on_event(ClearEvent::Skipped {
                    path: child,
                    error: &error,
                });
            }
        }
    }

    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::tests::write_file;

    fn clear(dir: &Path) -> (Result<ClearTally, ClearError>, Vec<String>) {
        let mut seen = Vec::new();
        let result = clear_dir_contents(dir, &mut |event| {
            seen.push(match event {
                ClearEvent::Empty => "empty".to_string(),
                ClearEvent::Started { children, .. } => format!("start {children}"),
                ClearEvent::Deleted { path } => {
                    format!("deleted {}", path.file_name().unwrap().to_string_lossy())
                }
                ClearEvent::Skipped { path, .. } => {
                    format!("skipped {}", path.file_name().unwrap().to_string_lossy())
                }
            })
        });
        (result, seen)
    }

    #[test]
    fn empty_directory_is_success() {
        let dir = tempfile::tempdir().unwrap();

        let (result, seen) = clear(dir.path());
        let tally = result.unwrap();
        assert_eq!(tally, ClearTally::default());
        assert_eq!(seen, vec!["empty"]);
    }

    #[test]
    fn removes_children_but_keeps_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_file(&dir.path().join("a.log"), 10);
        write_file(&dir.path().join("sub/deep/b.log"), 10);

        let (result, seen) = clear(dir.path());
        let tally = result.unwrap();
        assert_eq!(tally.deleted, 2);
        assert_eq!(tally.skipped, 0);
        assert_eq!(seen[0], "start 2");
        assert_eq!(seen.len(), 3);

        assert!(dir.path().is_dir());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_child_is_unlinked_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        let outside = tempfile::tempdir().unwrap();
        write_file(&outside.path().join("keep.txt"), 5);
        std::os::unix::fs::symlink(outside.path(), dir.path().join("link")).unwrap();

        let (result, _) = clear(dir.path());
        assert_eq!(result.unwrap().deleted, 1);
        assert!(outside.path().join("keep.txt").exists());
    }

    #[test]
    fn missing_directory_is_a_list_error() {
        let dir = tempfile::tempdir().unwrap();
        let (result, seen) = clear(&dir.path().join("missing"));
        assert!(matches!(result, Err(ClearError::List { .. })));
        assert!(seen.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn unlistable_directory_is_denied() {
        use crate::scanner::tests::perms;

        let dir = tempfile::tempdir().unwrap();
        if !perms::denial_enforced(dir.path()) {
            return;
        }
        let locked = dir.path().join("locked");
        write_file(&locked.join("a.log"), 1);
        perms::set_mode(&locked, 0o000);

        let (result, _) = clear(&locked);
        perms::set_mode(&locked, 0o755);

        let err = result.unwrap_err();
        assert!(matches!(err, ClearError::ListDenied { .. }));
        assert!(err.to_string().ends_with("permission denied"));
        assert!(locked.join("a.log").exists());
    }

    #[cfg(unix)]
    #[test]
    fn one_bad_child_does_not_stop_the_batch() {
        use crate::scanner::tests::perms;

        let dir = tempfile::tempdir().unwrap();
        if !perms::denial_enforced(dir.path()) {
            return;
        }
        write_file(&dir.path().join("a.log"), 1);
        write_file(&dir.path().join("z.log"), 1);
        let stuck = dir.path().join("stuck");
        write_file(&stuck.join("inner.log"), 1);
        // entries of a read-only directory cannot be unlinked
        perms::set_mode(&stuck, 0o555);

        let (result, seen) = clear(dir.path());
        perms::set_mode(&stuck, 0o755);

        let tally = result.unwrap();
        assert_eq!(tally.deleted, 2);
        assert_eq!(tally.skipped, 1);
        assert!(seen.contains(&"skipped stuck".to_string()));
        assert!(stuck.join("inner.log").exists());
    }
}
