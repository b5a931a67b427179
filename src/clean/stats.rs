//! Run statistics.

use crate::fs::EntryKind;

/// Outcome counts for one cleaning run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanStats {
    pub files_renamed: u64,
    pub files_skipped: u64,
    pub folders_renamed: u64,
    pub folders_skipped: u64,
    pub errors: u64,
}

impl CleanStats {
    /// Count an entry that got a new name.
    pub fn record_renamed(&mut self, kind: EntryKind) {
        match kind {
            EntryKind::File => self.files_renamed += 1,
            EntryKind::Folder => self.folders_renamed += 1,
        }
    }

    /// Count an entry whose name was already clean.
    pub fn record_skipped(&mut self, kind: EntryKind) {
        match kind {
            EntryKind::File => self.files_skipped += 1,
            EntryKind::Folder => self.folders_skipped += 1,
        }
    }

    /// Count a failed rename or an unreadable entry.
    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    pub fn total_renamed(&self) -> u64 {
        self.files_renamed + self.folders_renamed
    }

    pub fn total_skipped(&self) -> u64 {
        self.files_skipped + self.folders_skipped
    }
}
