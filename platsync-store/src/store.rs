//! The master point store.

use crate::error::{StoreError, StoreResult};
use crate::format::{PointRecord, StoreDocument, FORMAT_VERSION};
use crate::lock::StoreLock;
use platsync_types::{FeatureClass, Point2, StoredPoint, TrueFrame};
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Everything read from the store in one pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSnapshot {
    /// Stored points in file order.
    pub points: Vec<StoredPoint>,
    /// Whether a store file existed at the time of the read. A missing store
    /// means "nothing to pull", which is different from an existing store
    /// with no points in the caller's region.
    pub existed: bool,
}

impl StoreSnapshot {
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Shared, file-backed collection of true-frame points.
///
/// Many processes may point at the same path. Writers hold an exclusive
/// lock on `<path>.lock` across their whole read-modify-write; readers hold
/// a shared one. Each write goes to a temporary file in the same directory
/// and is renamed over the store, so a failure at any step leaves the
/// previous contents in place.
#[derive(Debug, Clone)]
pub struct MasterPointStore {
    path: PathBuf,
    lock_path: PathBuf,
}

impl MasterPointStore {
    /// Creates a handle for the store at `path`. Touches nothing on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lock_path = sidecar_lock_path(&path);
        Self { path, lock_path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lock_path(&self) -> &Path {
        &self.lock_path
    }

    /// Whether the store file is present. A path that cannot be inspected
    /// (a parent without search permission, a parent that is a regular
    /// file) is an error, never "missing".
    pub fn exists(&self) -> StoreResult<bool> {
        match fs::metadata(&self.path) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Creates an empty store if none exists. Returns `true` when this call
    /// created it.
    pub fn ensure_exists(&self) -> StoreResult<bool> {
        self.create_parent_dir()?;
        let _lock = StoreLock::exclusive(&self.lock_path)?;
        if self.exists()? {
            return Ok(false);
        }
        self.write_document(&StoreDocument::default())?;
        info!(path = %self.path.display(), "Created master point store");
        Ok(true)
    }

    /// Reads every stored point.
    pub fn read_all(&self) -> StoreResult<StoreSnapshot> {
        if !self.exists()? {
            debug!(path = %self.path.display(), "Master point store does not exist");
            return Ok(StoreSnapshot::default());
        }
        let _lock = StoreLock::shared(&self.lock_path)?;
        // A concurrent writer cannot remove the store, but a caller outside
        // the lock discipline can.
        if !self.exists()? {
            return Ok(StoreSnapshot::default());
        }
        let document = self.read_document()?;
        let points: Vec<StoredPoint> = document.points.into_iter().map(Into::into).collect();
        debug!(path = %self.path.display(), count = points.len(), "Read master point store");
        Ok(StoreSnapshot {
            points,
            existed: true,
        })
    }

    /// Number of stored points, or `None` when the store does not exist.
    pub fn count(&self) -> StoreResult<Option<usize>> {
        let snapshot = self.read_all()?;
        Ok(snapshot.existed.then_some(snapshot.len()))
    }

    /// Tags `points` with `class`, appends them and rewrites the store,
    /// creating it first if needed. Points with a non-finite coordinate are
    /// dropped. Returns the number of points appended.
    ///
    /// When no valid points remain the existing file is not rewritten.
    pub fn append_and_save(
        &self,
        points: &[Point2<TrueFrame>],
        class: FeatureClass,
    ) -> StoreResult<usize> {
        let valid: Vec<StoredPoint> = points
            .iter()
            .filter(|p| p.is_finite())
            .map(|&p| StoredPoint::new(p, class))
            .collect();
        let dropped = points.len() - valid.len();
        if dropped > 0 {
            warn!(dropped, "Dropping non-finite points before append");
        }
        if valid.is_empty() {
            self.ensure_exists()?;
            return Ok(0);
        }

        self.create_parent_dir()?;
        let _lock = StoreLock::exclusive(&self.lock_path)?;
        let mut document = if self.exists()? {
            self.read_document()?
        } else {
            StoreDocument::default()
        };
        document.points.extend(valid.iter().map(PointRecord::from));
        self.write_document(&document)?;

        info!(
            path = %self.path.display(),
            appended = valid.len(),
            total = document.points.len(),
            class = %class,
            "Appended points to master store"
        );
        Ok(valid.len())
    }

    fn read_document(&self) -> StoreResult<StoreDocument> {
        let bytes = fs::read(&self.path)?;
        // An empty file is what an external `touch` leaves behind.
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(StoreDocument::default());
        }
        let document: StoreDocument =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        if document.version != FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                path: self.path.clone(),
                found: document.version,
            });
        }
        Ok(document)
    }

    fn write_document(&self, document: &StoreDocument) -> StoreResult<()> {
        let mut tmp = new_store_file(self.parent_dir())?;
        // The rename replaces the inode; carry the existing mode over.
        match fs::metadata(&self.path) {
            Ok(metadata) => tmp.as_file().set_permissions(metadata.permissions())?,
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(StoreError::Io(e)),
        }
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer(&mut writer, document).map_err(std::io::Error::from)?;
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        debug!(path = %self.path.display(), count = document.points.len(), "Wrote master point store");
        Ok(())
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn create_parent_dir(&self) -> StoreResult<()> {
        fs::create_dir_all(self.parent_dir())?;
        Ok(())
    }
}

/// Temporary file for the next store revision. Created with the mode a
/// plain `File::create` would get (0o666 less the umask) instead of
/// tempfile's private 0o600.
fn new_store_file(dir: &Path) -> StoreResult<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".platsync-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(crate::lock::SHARED_FILE_MODE));
    }
    Ok(builder.tempfile_in(dir)?)
}

fn sidecar_lock_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "store".into());
    name.push(".lock");
    path.with_file_name(name)
}
