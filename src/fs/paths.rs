//! Local data layout and path helpers.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// File name of the experiment metadata document.
pub const EXPERIMENTS_FILE: &str = "_experiments.json";

/// File name of the legal notice.
pub const IMPRINT_FILE: &str = "impressum.txt";

/// Layout of the local data directory that mirrors the remote repository.
#[derive(Debug, Clone)]
pub struct DataLayout {
    data_dir: PathBuf,
}

impl DataLayout {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Local path of the experiment metadata document.
    pub fn experiments_path(&self) -> PathBuf {
        self.data_dir.join(EXPERIMENTS_FILE)
    }

    /// Local path of the legal notice.
    pub fn imprint_path(&self) -> PathBuf {
        self.data_dir.join(IMPRINT_FILE)
    }

    /// Local directory mirroring a remote folder.
    pub fn folder_dir(&self, folder: &str) -> PathBuf {
        self.data_dir.join(folder)
    }
}

/// Last path component of a remote entry path.
pub fn remote_basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Destination for a remote entry inside a local directory.
///
/// Entries from nested remote paths are flattened to their basename; two
/// entries sharing a basename map to the same destination.
pub fn dest_for_entry(dir: &Path, remote_path: &str) -> PathBuf {
    dir.join(remote_basename(remote_path))
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
