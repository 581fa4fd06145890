//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs::FileType;
use std::path::Path;

use walkdir::WalkDir;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult, RemoveOutcome};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::io("create_dir", path, e))
    }

    fn remove_file(&self, path: &Path) -> FsResult<RemoveOutcome> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(RemoveOutcome::Removed),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(RemoveOutcome::AlreadyAbsent),
            Err(e) => Err(FsError::io("remove", path, e)),
        }
    }

    fn remove_tree(&self, path: &Path) -> FsResult<RemoveOutcome> {
        let meta = match std::fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RemoveOutcome::AlreadyAbsent)
            }
            Err(e) => return Err(FsError::io("stat", path, e)),
        };

        let file_type = meta.file_type();
        let result = if file_type.is_symlink() {
            remove_symlink(path, file_type)
        } else if file_type.is_dir() {
            std::fs::remove_dir_all(path)
        } else {
            std::fs::remove_file(path)
        };

        match result {
            Ok(()) => Ok(RemoveOutcome::Removed),
            // Raced with another writer; the path is gone either way
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(RemoveOutcome::AlreadyAbsent),
            Err(e) => Err(FsError::io("remove_tree", path, e)),
        }
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> FsResult<()> {
        std::fs::copy(src, dst)
            .map(|_| ())
            .map_err(|e| FsError::io("copy", src, e))
    }

    fn copy_dir(&self, src: &Path, dst: &Path) -> FsResult<()> {
        if !src.is_dir() {
            return Err(FsError::NotFound(src.to_path_buf()));
        }
        self.create_dir_all(dst)?;

        for entry in WalkDir::new(src).min_depth(1).follow_links(true) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(src).to_path_buf();
                let io = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
                FsError::io("walk", &path, io)
            })?;

            let rel = entry
                .path()
                .strip_prefix(src)
                .map_err(|e| FsError::Unsupported(e.to_string()))?;
            let target = dst.join(rel);

            if entry.file_type().is_dir() {
                self.create_dir_all(&target)?;
            } else {
                if let Some(parent) = target.parent() {
                    self.create_dir_all(parent)?;
                }
                self.copy_file(entry.path(), &target)?;
            }
        }

        Ok(())
    }

    fn symlink_file(&self, src: &Path, dst: &Path) -> FsResult<()> {
        symlink_file(src, dst)
    }

    fn symlink_dir(&self, src: &Path, dst: &Path) -> FsResult<()> {
        symlink_dir(src, dst)
    }
}

#[cfg(windows)]
fn remove_symlink(path: &Path, file_type: FileType) -> std::io::Result<()> {
    use std::os::windows::fs::FileTypeExt;
    if file_type.is_symlink_dir() {
        std::fs::remove_dir(path)
    } else {
        std::fs::remove_file(path)
    }
}

#[cfg(not(windows))]
fn remove_symlink(path: &Path, _file_type: FileType) -> std::io::Result<()> {
    std::fs::remove_file(path)
}

#[cfg(unix)]
fn symlink_file(src: &Path, dst: &Path) -> FsResult<()> {
    std::os::unix::fs::symlink(src, dst).map_err(|e| FsError::io("symlink", dst, e))
}

#[cfg(unix)]
fn symlink_dir(src: &Path, dst: &Path) -> FsResult<()> {
    std::os::unix::fs::symlink(src, dst).map_err(|e| FsError::io("symlink", dst, e))
}

#[cfg(windows)]
fn symlink_file(src: &Path, dst: &Path) -> FsResult<()> {
    std::os::windows::fs::symlink_file(src, dst).map_err(|e| FsError::io("symlink", dst, e))
}

#[cfg(windows)]
fn symlink_dir(src: &Path, dst: &Path) -> FsResult<()> {
    std::os::windows::fs::symlink_dir(src, dst).map_err(|e| FsError::io("symlink", dst, e))
}

#[cfg(not(any(unix, windows)))]
fn symlink_file(_src: &Path, _dst: &Path) -> FsResult<()> {
    Err(FsError::Unsupported(
        "symlinks are not supported on this platform".to_string(),
    ))
}

#[cfg(not(any(unix, windows)))]
fn symlink_dir(src: &Path, dst: &Path) -> FsResult<()> {
    symlink_file(src, dst)
}
