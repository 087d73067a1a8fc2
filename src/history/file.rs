//! History persistence as a JSON file under the user's config directory.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::{HistoryBackend, HistoryEntry};

/// JSON file backend.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `$HOME/.config/passforge/history.json`.
    pub fn default_path() -> PathBuf {
        let home = env::var("HOME").unwrap_or_else(|_| ".".into());
        Path::new(&home).join(".config/passforge/history.json")
    }
}

impl Default for FileBackend {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl HistoryBackend for FileBackend {
    fn load(&self) -> Vec<HistoryEntry> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            // Missing file is a fresh start, not an error.
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&data) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("history file {} is corrupt, starting empty: {e}", self.path.display());
                Vec::new()
            }
        }
    }

    fn save(&self, entries: &[HistoryEntry]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string(entries)?;
        fs::write(&self.path, data)?;
        debug!("saved {} history entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::SecretKind;
    use crate::history::HistoryStore;
    use anyhow::Result;
    use time::OffsetDateTime;

    fn entry(id: u64, value: &str) -> HistoryEntry {
        HistoryEntry {
            id,
            value: value.into(),
            kind: SecretKind::Password,
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn round_trip_preserves_order() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let backend = FileBackend::new(dir.path().join("history.json"));
        let entries = vec![entry(2, "newest"), entry(1, "middle"), entry(0, "oldest")];
        backend.save(&entries)?;
        assert_eq!(backend.load(), entries);
        Ok(())
    }

    #[test]
    fn missing_file_loads_empty() {
        let backend = FileBackend::new(PathBuf::from("/nonexistent/passforge/history.json"));
        assert!(backend.load().is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("history.json");
        fs::write(&path, "{not json")?;
        let backend = FileBackend::new(path);
        assert!(backend.load().is_empty());
        Ok(())
    }

    #[test]
    fn store_round_trips_through_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("history.json");
        let mut rng = crate::rand::SystemSource;

        let mut store = HistoryStore::open(Box::new(FileBackend::new(path.clone())));
        for _ in 0..5 {
            store.record(&crate::engines::pin::generate(&mut rng, 4));
        }
        let before = store.entries().to_vec();

        let reopened = HistoryStore::open(Box::new(FileBackend::new(path)));
        assert_eq!(reopened.entries(), &before[..]);
        Ok(())
    }

    #[test]
    fn save_creates_parent_directories() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested/config/history.json");
        let backend = FileBackend::new(path.clone());
        backend.save(&[entry(0, "x")])?;
        assert!(path.exists());
        Ok(())
    }
}
