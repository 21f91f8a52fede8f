use std::{
    collections::VecDeque,
    path::{
        Path,
        PathBuf,
    },
};

use crate::{
    core::{
        models::HistoryEntry,
        WordsheetError,
    },
    persistence::{
        get_data_file_path,
        load_json_from,
        save_json_to,
    },
};

pub const MAX_HISTORY_ENTRIES: usize = 20;
pub const HISTORY_FILE: &str = "history.json";

/// Past worksheet requests, most recent first, persisted after every change.
#[derive(Debug)]
pub struct HistoryStore {
    entries: VecDeque<HistoryEntry>,
    file_path: PathBuf,
}

impl HistoryStore {
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self, WordsheetError> {
        let file_path = file_path.into();
        let mut entries: VecDeque<HistoryEntry> = load_json_from(&file_path)?;
        entries.truncate(MAX_HISTORY_ENTRIES);
        log::info!("Loaded {} history entries from {}", entries.len(), file_path.display());
        Ok(Self { entries, file_path })
    }

    /// Opens the store in the app data directory, starting empty if the file is unreadable.
    pub fn open_default() -> Self {
        let file_path = get_data_file_path(HISTORY_FILE);
        match Self::open(&file_path) {
            Ok(store) => store,
            Err(e) => {
                log::warn!("Failed to load history: {}. Starting empty.", e);
                Self { entries: VecDeque::new(), file_path }
            }
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn record(&mut self, entry: HistoryEntry) -> Result<(), WordsheetError> {
        self.entries.push_front(entry);
        self.entries.truncate(MAX_HISTORY_ENTRIES);
        self.save()
    }

    pub fn list(&self) -> &VecDeque<HistoryEntry> {
        &self.entries
    }

    pub fn load_entry(&self, index: usize) -> Result<&HistoryEntry, WordsheetError> {
        self.entries.get(index).ok_or(WordsheetError::NotFound(index))
    }

    pub fn clear(&mut self) -> Result<(), WordsheetError> {
        self.entries.clear();
        self.save()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn save(&self) -> Result<(), WordsheetError> {
        save_json_to(&self.entries, &self.file_path)
    }
}
