//! Interfaces the notes page consumes: a note store and a host bridge.
//!
//! Both are treated as fire-and-forget by the page. Failures are logged and
//! never change what the page shows.

use super::note::Note;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

/// Failures reported by a [`NoteStore`] or [`HostBridge`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No note with this id.
    #[error("note {0} not found")]
    NotFound(String),
    /// The backend could not be reached.
    #[error("note store unavailable: {0}")]
    Unavailable(String),
    /// The host refused a request.
    #[error("host bridge rejected {action} for note {id}")]
    Rejected {
        /// `"pin"` or `"delete"`.
        action: &'static str,
        /// Note id.
        id: String,
    },
}

/// Persistent note storage.
pub trait NoteStore: Send + fmt::Debug {
    /// All notes, in display order.
    fn load_notes(&mut self) -> Result<Vec<Note>, StoreError>;

    /// Writes `note` over the stored note with the same id.
    fn update_note(&mut self, note: &Note) -> Result<(), StoreError>;
}

/// Requests handled by the host process.
pub trait HostBridge: Send + fmt::Debug {
    /// Pins a note on the desktop.
    fn pin_note(&mut self, id: &str) -> Result<(), StoreError>;

    /// Deletes a note.
    fn delete_note(&mut self, id: &str) -> Result<(), StoreError>;
}

/// In-memory store. Clones share the same notes, so one handle can serve as
/// the page's store and another as its bridge.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    notes: Arc<Mutex<Vec<Note>>>,
}

impl MemoryStore {
    /// A store holding `notes`.
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            notes: Arc::new(Mutex::new(notes)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Note>>, StoreError> {
        self.notes
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }

    /// A copy of the stored notes.
    pub fn snapshot(&self) -> Result<Vec<Note>, StoreError> {
        Ok(self.lock()?.clone())
    }

    fn with_note<R>(&self, id: &str, f: impl FnOnce(&mut Note) -> R) -> Result<R, StoreError> {
        let mut notes = self.lock()?;
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(f(note))
    }
}

impl NoteStore for MemoryStore {
    fn load_notes(&mut self) -> Result<Vec<Note>, StoreError> {
        self.snapshot()
    }

    fn update_note(&mut self, note: &Note) -> Result<(), StoreError> {
        self.with_note(&note.id, |stored| *stored = note.clone())
    }
}

impl HostBridge for MemoryStore {
    fn pin_note(&mut self, id: &str) -> Result<(), StoreError> {
        self.with_note(id, |note| note.is_pinned = true)
    }

    fn delete_note(&mut self, id: &str) -> Result<(), StoreError> {
        let mut notes = self.lock()?;
        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemoryStore {
        MemoryStore::new(vec![Note::new("a", "first"), Note::new("b", "second")])
    }

    #[test]
    fn test_update_replaces_by_id() {
        let mut store = store();
        store.update_note(&Note::new("b", "changed")).unwrap();
        let notes = store.load_notes().unwrap();
        assert_eq!(notes[1].title, "changed");
        assert_eq!(
            store.update_note(&Note::new("zz", "x")),
            Err(StoreError::NotFound("zz".to_string()))
        );
    }

    #[test]
    fn test_clones_share_notes() {
        let store = store();
        let mut bridge = store.clone();
        bridge.pin_note("a").unwrap();
        bridge.delete_note("b").unwrap();

        let notes = store.snapshot().unwrap();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].is_pinned);
        assert!(bridge.delete_note("b").is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = StoreError::Rejected {
            action: "pin",
            id: "a".to_string(),
        };
        assert_eq!(err.to_string(), "host bridge rejected pin for note a");
    }
}
