//! Advisory locks on the store's sidecar lock file.
//!
//! The store file itself is replaced by rename on every write, so locking
//! it directly would lock an inode that disappears. A separate
//! `<store>.lock` file is locked instead and never deleted.

use crate::error::{StoreError, StoreResult};
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Held for the duration of one store operation; unlocks on drop.
#[derive(Debug)]
pub(crate) struct StoreLock {
    file: File,
    path: PathBuf,
}

impl StoreLock {
    /// Blocks until no other reader or writer holds the lock.
    pub(crate) fn exclusive(path: &Path) -> StoreResult<Self> {
        let file = open_lock_file(path)?;
        fs2::FileExt::lock_exclusive(&file).map_err(|source| StoreError::Lock {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Acquired exclusive store lock");
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Blocks until no writer holds the lock.
    ///
    /// Returns `None` when the lock file can neither be created nor opened
    /// because the directory is read-only to this caller. Writes are atomic
    /// renames, so an unlocked reader still sees a whole snapshot, possibly a
    /// stale one.
    pub(crate) fn shared(path: &Path) -> StoreResult<Option<Self>> {
        let file = match open_lock_file(path) {
            Ok(file) => file,
            Err(StoreError::Lock { source, .. }) if source.kind() == ErrorKind::PermissionDenied => {
                debug!(path = %path.display(), "Lock file not accessible, reading unlocked");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        fs2::FileExt::lock_shared(&file).map_err(|source| StoreError::Lock {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Acquired shared store lock");
        Ok(Some(Self {
            file,
            path: path.to_path_buf(),
        }))
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(e) = fs2::FileExt::unlock(&self.file) {
            debug!(path = %self.path.display(), error = %e, "Failed to release store lock");
        }
    }
}

/// Mode requested for files other users must reach: the store and its lock
/// file. The process umask still applies.
#[cfg(unix)]
pub(crate) const SHARED_FILE_MODE: u32 = 0o666;

/// Opens (creating if needed) the lock file. A lock file created by another
/// user may not be writable here; advisory locks only need a readable
/// handle, so that case falls back to a read-only open.
fn open_lock_file(path: &Path) -> StoreResult<File> {
    let mut options = OpenOptions::new();
    options.create(true).truncate(false).read(true).write(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(SHARED_FILE_MODE);
    }
    let opened = match options.open(path) {
        Err(e) if e.kind() == ErrorKind::PermissionDenied => File::open(path).map_err(|_| e),
        other => other,
    };
    opened.map_err(|source| StoreError::Lock {
        path: path.to_path_buf(),
        source,
    })
}
