//! Bounded, ordered log of generated secrets.
//!
//! Most-recent-first, capped at [`MAX_ENTRIES`]; persistence sits behind the
//! [`HistoryBackend`] trait so the store never knows where its data lives.

mod file;

pub use file::FileBackend;

use log::warn;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::engines::{GeneratedSecret, SecretKind};

/// Entries retained before the oldest is evicted.
pub const MAX_ENTRIES: usize = 50;

/// One recorded secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Monotonic per-store identity.
    pub id: u64,
    pub value: String,
    pub kind: SecretKind,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl HistoryEntry {
    /// Relative age against `now`, e.g. "just now" or "3 minutes ago".
    pub fn time_ago(&self, now: OffsetDateTime) -> String {
        let seconds = (now - self.timestamp).whole_seconds().max(0);
        for (unit, name) in [
            (31_536_000, "year"),
            (2_592_000, "month"),
            (86_400, "day"),
            (3_600, "hour"),
            (60, "minute"),
        ] {
            if seconds > unit {
                let count = seconds / unit;
                let plural = if count == 1 { "" } else { "s" };
                return format!("{count} {name}{plural} ago");
            }
        }
        if seconds < 10 {
            "just now".to_string()
        } else {
            format!("{seconds} seconds ago")
        }
    }
}

/// Where history is persisted.
///
/// `load` must swallow corrupt or missing data and hand back an empty list;
/// a broken history file is never a user-facing failure.
pub trait HistoryBackend {
    fn load(&self) -> Vec<HistoryEntry>;
    fn save(&self, entries: &[HistoryEntry]) -> std::io::Result<()>;
}

/// In-memory backend; nothing survives the process.
#[derive(Default)]
pub struct MemoryBackend {
    entries: std::cell::RefCell<Vec<HistoryEntry>>,
}

impl HistoryBackend for MemoryBackend {
    fn load(&self) -> Vec<HistoryEntry> {
        self.entries.borrow().clone()
    }

    fn save(&self, entries: &[HistoryEntry]) -> std::io::Result<()> {
        *self.entries.borrow_mut() = entries.to_vec();
        Ok(())
    }
}

/// Bounded secret log, most-recent-first.
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    next_id: u64,
    backend: Box<dyn HistoryBackend>,
}

impl HistoryStore {
    /// Load existing history from `backend`.
    pub fn open(backend: Box<dyn HistoryBackend>) -> Self {
        let entries = backend.load();
        let next_id = entries.iter().map(|e| e.id + 1).max().unwrap_or(0);
        Self { entries, next_id, backend }
    }

    /// Record a generated secret. Evicts the oldest entry past capacity and
    /// persists the new list.
    pub fn record(&mut self, secret: &GeneratedSecret) -> &HistoryEntry {
        let entry = HistoryEntry {
            id: self.next_id,
            value: secret.value.clone(),
            kind: secret.kind,
            timestamp: secret.created,
        };
        self.next_id += 1;
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_ENTRIES);
        self.persist();
        &self.entries[0]
    }

    /// Remove every entry and persist the empty list.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) {
        if let Err(e) = self.backend.save(&self.entries) {
            warn!("failed to persist history: {e}");
        }
    }
}
