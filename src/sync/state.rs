//! Sync pass state tracking.

use std::fmt;

/// Kind of media asset being mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Audio,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Image => write!(f, "image"),
            AssetKind::Audio => write!(f, "audio"),
        }
    }
}

/// Counters for one sync pass.
///
/// Purely informational; the counters never influence control flow.
#[derive(Debug, Default)]
pub struct SyncState {
    pub image_count: u64,
    pub audio_count: u64,
    pub skipped_entries: u64,
    pub metadata_synced: bool,
    pub imprint_synced: bool,
}

impl SyncState {
    /// Record one downloaded media file.
    pub fn record_download(&mut self, kind: AssetKind) {
        match kind {
            AssetKind::Image => self.image_count += 1,
            AssetKind::Audio => self.audio_count += 1,
        }
    }

    /// Record one skipped non-file entry.
    pub fn record_skipped(&mut self) {
        self.skipped_entries += 1;
    }

    /// Total number of files written during this pass.
    pub fn total_downloaded(&self) -> u64 {
        self.image_count
            + self.audio_count
            + u64::from(self.metadata_synced)
            + u64::from(self.imprint_synced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_downloads() {
        let mut state = SyncState::default();
        state.record_download(AssetKind::Image);
        state.record_download(AssetKind::Image);
        state.record_download(AssetKind::Audio);
        state.record_skipped();

        assert_eq!(state.image_count, 2);
        assert_eq!(state.audio_count, 1);
        assert_eq!(state.skipped_entries, 1);
        assert_eq!(state.total_downloaded(), 3);
    }

    #[test]
    fn test_total_counts_fixed_files() {
        let mut state = SyncState::default();
        state.metadata_synced = true;
        state.imprint_synced = true;

        assert_eq!(state.total_downloaded(), 2);
    }
}
