//! The notes page: a selectable list of note cards.

use super::debounce::{Debouncer, FlushMsg};
use super::keymap::KeyMap;
use super::note::{Note, NoteField};
use super::store::{HostBridge, NoteStore};
use crate::config::NotesSettings;
use crate::help;
use crate::key::matches_binding;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss::Color;
use lipgloss_extras::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const EMPTY_MESSAGE: &str = "No notes available.";
const CREATE_PROMPT: &str = "Create one now!";

/// Styles for the notes page.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Page heading.
    pub heading: Style,
    /// Empty-state text.
    pub empty: Style,
    /// Empty-state call to action.
    pub create_link: Style,
    /// Selection marker.
    pub marker: Style,
    /// Content preview line.
    pub preview: Style,
    /// Pinned badge.
    pub pinned: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            heading: Style::new().bold(true).padding(0, 0, 1, 0),
            empty: Style::new().foreground(Color::from("#9CA3AF")),
            create_link: Style::new()
                .underline(true)
                .foreground(Color::from("#3B82F6")),
            marker: Style::new().foreground(Color::from("#EE6FF8")),
            preview: Style::new().foreground(Color::from("#777777")),
            pinned: Style::new().foreground(Color::from("#AD58B4")),
        }
    }
}

/// Cuts `text` to `width` display columns, ending in `…` when shortened.
/// A width of 0 leaves the text alone.
fn truncate(text: &str, width: usize) -> String {
    if width == 0 || UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Lists notes and forwards edits, pins and deletes to its collaborators.
///
/// Edits update the page at once; saving them is debounced. Pins and deletes
/// go straight to the host bridge. None of these calls can fail from the
/// page's point of view: errors are logged and the page moves on.
///
/// ```rust
/// use notedeck_widgets::notes::{MemoryStore, Model, Note, NoteField};
///
/// let store = MemoryStore::new(vec![Note::new("1", "Groceries")]);
/// let mut page = Model::new(Box::new(store.clone()), Box::new(store.clone()));
/// page.load_notes();
///
/// let _save = page.change_note("1", NoteField::Title, "Shopping");
/// assert_eq!(page.notes()[0].title, "Shopping");
///
/// page.flush_pending();
/// assert_eq!(store.snapshot().unwrap()[0].title, "Shopping");
/// ```
#[derive(Debug)]
pub struct Model {
    /// Key bindings.
    pub key_map: KeyMap,
    /// Help line renderer.
    pub help: help::Model,
    /// View styles.
    pub styles: Styles,
    /// Width used to cut content previews; 0 disables cutting.
    pub width: usize,

    notes: Vec<Note>,
    cursor: usize,
    editing_title: bool,
    focus: bool,
    untitled_label: String,

    store: Box<dyn NoteStore>,
    bridge: Box<dyn HostBridge>,
    saves: Debouncer<Note>,
}

impl Model {
    /// An empty page using default settings.
    pub fn new(store: Box<dyn NoteStore>, bridge: Box<dyn HostBridge>) -> Self {
        Self::from_settings(store, bridge, &NotesSettings::default())
    }

    /// An empty page using `settings`.
    pub fn from_settings(
        store: Box<dyn NoteStore>,
        bridge: Box<dyn HostBridge>,
        settings: &NotesSettings,
    ) -> Self {
        let mut model = Self {
            key_map: KeyMap::default(),
            help: help::Model::new(),
            styles: Styles::default(),
            width: 60,
            notes: Vec::new(),
            cursor: 0,
            editing_title: false,
            focus: false,
            untitled_label: settings.untitled_label.clone(),
            store,
            bridge,
            saves: Debouncer::new(settings.save_debounce()),
        };
        model.sync_keys();
        model
    }

    /// Notes in display order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Index of the selected note.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The selected note.
    pub fn selected(&self) -> Option<&Note> {
        self.notes.get(self.cursor)
    }

    /// Whether the selected title is being edited.
    pub fn editing_title(&self) -> bool {
        self.editing_title
    }

    /// Number of notes with unsaved edits.
    pub fn pending_saves(&self) -> usize {
        self.saves.pending()
    }

    fn sync_keys(&mut self) {
        self.key_map
            .update_enabled(!self.notes.is_empty(), self.editing_title);
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.notes.len().saturating_sub(1));
        if self.notes.is_empty() {
            self.editing_title = false;
        }
        self.sync_keys();
    }

    /// Replaces the list with the store's notes. A failing store leaves the
    /// page empty.
    pub fn load_notes(&mut self) {
        self.notes = match self.store.load_notes() {
            Ok(notes) => {
                log::debug!("loaded {} notes", notes.len());
                notes
            }
            Err(err) => {
                log::warn!("loading notes failed: {err}");
                Vec::new()
            }
        };
        self.clamp_cursor();
    }

    /// Sets a field of note `id` and schedules a save. Unknown ids are ignored.
    pub fn change_note(&mut self, id: &str, field: NoteField, value: &str) -> Option<Cmd> {
        let note = self.notes.iter_mut().find(|n| n.id == id)?;
        note.set_field(field, value);
        let snapshot = note.clone();
        Some(self.saves.push(snapshot.id.clone(), snapshot))
    }

    /// Asks the host to pin note `id`. Unknown ids are ignored.
    pub fn pin_note(&mut self, id: &str) {
        if !self.notes.iter().any(|n| n.id == id) {
            return;
        }
        if let Err(err) = self.bridge.pin_note(id) {
            log::warn!("pinning note {id} failed: {err}");
        }
    }

    /// Asks the host to delete note `id` and drops it from the page, along
    /// with any unsaved edit to it.
    pub fn delete_note(&mut self, id: &str) {
        if let Err(err) = self.bridge.delete_note(id) {
            log::warn!("deleting note {id} failed: {err}");
        }
        self.saves.cancel(id);
        self.notes.retain(|n| n.id != id);
        self.clamp_cursor();
    }

    fn save(&mut self, notes: Vec<Note>) {
        for note in notes {
            log::trace!("saving note {}", note.id);
            if let Err(err) = self.store.update_note(&note) {
                log::warn!("saving note {} failed: {err}", note.id);
            }
        }
    }

    /// Saves every unsaved edit now.
    pub fn flush_pending(&mut self) {
        let notes = self.saves.drain();
        self.save(notes);
    }

    /// Selects the previous note.
    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Selects the next note.
    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.notes.len() {
            self.cursor += 1;
        }
    }

    fn edit_selected_title(&mut self, edit: impl FnOnce(&mut String)) -> Option<Cmd> {
        let note = self.selected()?;
        let id = note.id.clone();
        let mut title = note.title.clone();
        edit(&mut title);
        self.change_note(&id, NoteField::Title, &title)
    }

    fn handle_title_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if matches_binding(key_msg, &self.key_map.finish) {
            self.editing_title = false;
            self.sync_keys();
            return None;
        }
        if matches_binding(key_msg, &self.key_map.delete_char) {
            return self.edit_selected_title(|title| {
                title.pop();
            });
        }
        let typed = key_msg.modifiers.difference(KeyModifiers::SHIFT).is_empty();
        match key_msg.key {
            KeyCode::Char(c) if typed => self.edit_selected_title(|title| title.push(c)),
            _ => None,
        }
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.editing_title {
            return self.handle_title_key(key_msg);
        }

        if matches_binding(key_msg, &self.key_map.up) {
            self.select_previous();
        } else if matches_binding(key_msg, &self.key_map.down) {
            self.select_next();
        } else if matches_binding(key_msg, &self.key_map.pin) {
            if let Some(id) = self.selected().map(|n| n.id.clone()) {
                self.pin_note(&id);
            }
        } else if matches_binding(key_msg, &self.key_map.delete) {
            if let Some(id) = self.selected().map(|n| n.id.clone()) {
                self.delete_note(&id);
            }
        } else if matches_binding(key_msg, &self.key_map.edit_title) {
            self.editing_title = true;
            self.sync_keys();
        }
        None
    }

    /// Handles save flushes and, while focused, key presses.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(flush) = msg.downcast_ref::<FlushMsg>() {
            if let Some(notes) = self.saves.accept(flush) {
                self.save(notes);
            }
            return None;
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.focus {
                return self.handle_key(key_msg);
            }
        }
        None
    }

    fn view_card(&self, index: usize, note: &Note) -> String {
        let selected = index == self.cursor && self.focus;
        let marker = if selected {
            self.styles.marker.render(">")
        } else {
            " ".to_string()
        };

        let mut title = note.display_title(&self.untitled_label).to_string();
        if selected && self.editing_title {
            title.push('▏');
        }
        let mut heading = format!("{} {}", marker, note.theme.title_style().render(&title));
        if note.is_pinned {
            heading.push(' ');
            heading.push_str(&self.styles.pinned.render("(pinned)"));
        }

        let first_line = note.content.lines().next().unwrap_or("");
        let preview_width = self.width.saturating_sub(2);
        let preview = truncate(first_line, preview_width);
        format!("{}\n  {}", heading, self.styles.preview.render(&preview))
    }

    /// Renders the page.
    pub fn view(&self) -> String {
        let mut out = self.styles.heading.render("Notes");
        out.push('\n');

        if self.notes.is_empty() {
            out.push_str(&format!(
                "{} {}",
                self.styles.empty.render(EMPTY_MESSAGE),
                self.styles.create_link.render(CREATE_PROMPT)
            ));
        } else {
            let cards: Vec<String> = self
                .notes
                .iter()
                .enumerate()
                .map(|(i, note)| self.view_card(i, note))
                .collect();
            out.push_str(&cards.join("\n\n"));
        }

        let help = self.help.view(&self.key_map);
        if !help.is_empty() {
            out.push_str("\n\n");
            out.push_str(&help);
        }
        out
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
        self.editing_title = false;
        self.sync_keys();
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
