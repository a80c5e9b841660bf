//! Key bindings for the notes page.

use crate::key::{self, new_binding, with_help, with_keys_str, Binding};

/// Bindings for browsing and editing notes.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Select the previous note.
    pub up: Binding,
    /// Select the next note.
    pub down: Binding,
    /// Pin the selected note.
    pub pin: Binding,
    /// Delete the selected note.
    pub delete: Binding,
    /// Edit the selected note's title.
    pub edit_title: Binding,
    /// Stop editing the title.
    pub finish: Binding,
    /// Delete the last title character.
    pub delete_char: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            up: new_binding(vec![with_keys_str(&["up", "k"]), with_help("↑/k", "up")]),
            down: new_binding(vec![with_keys_str(&["down", "j"]), with_help("↓/j", "down")]),
            pin: new_binding(vec![with_keys_str(&["p"]), with_help("p", "pin")]),
            delete: new_binding(vec![
                with_keys_str(&["d", "delete"]),
                with_help("d", "delete"),
            ]),
            edit_title: new_binding(vec![
                with_keys_str(&["enter"]),
                with_help("enter", "edit title"),
            ]),
            finish: new_binding(vec![
                with_keys_str(&["enter", "esc"]),
                with_help("enter", "done"),
            ]),
            delete_char: new_binding(vec![
                with_keys_str(&["backspace"]),
                with_help("⌫", "delete"),
            ]),
        }
    }
}

impl KeyMap {
    /// Enables browsing keys when notes exist and editor keys while editing.
    pub fn update_enabled(&mut self, has_notes: bool, editing: bool) {
        let browsing = has_notes && !editing;
        self.up.set_enabled(browsing);
        self.down.set_enabled(browsing);
        self.pin.set_enabled(browsing);
        self.delete.set_enabled(browsing);
        self.edit_title.set_enabled(browsing);
        self.finish.set_enabled(editing);
        self.delete_char.set_enabled(editing);
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.up,
            &self.down,
            &self.pin,
            &self.delete,
            &self.edit_title,
            &self.finish,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.up, &self.down],
            vec![&self.pin, &self.delete, &self.edit_title],
            vec![&self.delete_char, &self.finish],
        ]
    }
}
