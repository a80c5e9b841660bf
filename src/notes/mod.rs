//! Notes page component.
//!
//! Shows the user's notes as cards and turns key presses into edits, pins
//! and deletes. The page does not own persistence: it reads from a
//! [`NoteStore`], writes edits back to it after a quiet period, and hands pins
//! and deletes to a [`HostBridge`].
//!
//! # Wiring
//!
//! ```rust
//! use notedeck_widgets::notes::{MemoryStore, Model as NotesPage, Note};
//! use notedeck_widgets::Component;
//!
//! let store = MemoryStore::new(vec![Note::new("1", "Standup"), Note::new("2", "")]);
//! let mut page = NotesPage::new(Box::new(store.clone()), Box::new(store));
//! page.load_notes();
//! page.focus();
//!
//! assert_eq!(page.notes().len(), 2);
//! assert!(page.view().contains("Untitled Note"));
//! ```
//!
//! Forward every message to [`Model::update`]: it consumes the flush
//! messages of its own debouncer as well as key presses.

pub mod debounce;
pub mod keymap;
pub mod model;
pub mod note;
pub mod store;


pub use debounce::{Debouncer, FlushMsg};
pub use keymap::KeyMap;
pub use model::{Model, Styles};
pub use note::{Note, NoteField, NoteTheme};
pub use store::{HostBridge, MemoryStore, NoteStore, StoreError};
