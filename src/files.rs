//! File probing
//!
//! The only part of the server that touches the filesystem before a body is
//! streamed. Probing answers two questions for a resolved path: can it be
//! read, and how many bytes does it hold right now.

use std::io::SeekFrom;
use std::path::{Component, Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncSeekExt;

/// Result of probing a path on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub path: PathBuf,
    pub exists: bool,
    /// Byte length at probe time, 0 when `exists` is false
    pub size_bytes: u64,
}

impl FileMetadata {
    fn missing(path: PathBuf) -> Self {
        Self {
            path,
            exists: false,
            size_bytes: 0,
        }
    }
}

/// Opens `path` for reading and seeks to the end to learn its size.
///
/// Missing files, directories and permission errors are all reported the
/// same way, as a file that does not exist.
pub async fn probe(path: impl AsRef<Path>) -> FileMetadata {
    let path = path.as_ref().to_path_buf();

    let mut file = match File::open(&path).await {
        Ok(f) => f,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Probe could not open file");
            return FileMetadata::missing(path);
        }
    };

    match file.metadata().await {
        Ok(meta) if meta.is_file() => {}
        _ => return FileMetadata::missing(path),
    }

    match file.seek(SeekFrom::End(0)).await {
        Ok(size_bytes) => FileMetadata {
            path,
            exists: true,
            size_bytes,
        },
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Probe could not seek file");
            FileMetadata::missing(path)
        }
    }
}

/// Maps a request path onto `root`.
///
/// Leading `/` characters are dropped. Targets with a `..` component are
/// refused, so a resolved path never leaves the document root.
pub fn resolve(root: &Path, resource_path: &str) -> Option<PathBuf> {
    let relative = Path::new(resource_path.trim_start_matches('/'));
    if relative
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
    {
        return None;
    }
    Some(root.join(relative))
}
