//! GitLab API response types.

use serde::Deserialize;

/// One entry of a repository tree listing.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeEntry {
    /// Path of the entry relative to the repository root.
    pub path: String,

    /// Entry kind as reported by the API.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

/// Kind of a tree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// A regular file.
    Blob,
    /// A sub-directory.
    Tree,
    /// Anything else the API may report (submodules etc.).
    #[serde(other)]
    Other,
}

impl TreeEntry {
    /// Whether this entry is a downloadable file.
    pub fn is_blob(&self) -> bool {
        self.entry_type == EntryType::Blob
    }
}
