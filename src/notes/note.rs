//! Note records as delivered by the note store.

use lipgloss_extras::lipgloss::Color;
use lipgloss_extras::prelude::*;
use serde::{Deserialize, Serialize};

/// Card colour of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteTheme {
    /// Neutral card.
    #[default]
    Default,
    /// Yellow card.
    Yellow,
    /// Green card.
    Green,
    /// Blue card.
    Blue,
    /// Pink card.
    Pink,
    /// Purple card.
    Purple,
}

impl NoteTheme {
    /// Accent colour used for the card title.
    pub fn color(self) -> &'static str {
        match self {
            NoteTheme::Default => "#E5E7EB",
            NoteTheme::Yellow => "#FACC15",
            NoteTheme::Green => "#4ADE80",
            NoteTheme::Blue => "#60A5FA",
            NoteTheme::Pink => "#F472B6",
            NoteTheme::Purple => "#C084FC",
        }
    }

    /// Title style for cards of this theme.
    pub fn title_style(self) -> Style {
        Style::new().bold(true).foreground(Color::from(self.color()))
    }
}

/// Editable text field of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteField {
    /// The one-line title.
    Title,
    /// The body.
    Content,
}

/// A note as held by the page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Note {
    /// Store id.
    pub id: String,
    /// Title; may be blank.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Card colour.
    pub theme: NoteTheme,
    /// Whether the host has pinned the note.
    pub is_pinned: bool,
}

impl Note {
    /// A note with the given id and title and an empty body.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the body.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the theme.
    pub fn with_theme(mut self, theme: NoteTheme) -> Self {
        self.theme = theme;
        self
    }

    /// The value of `field`.
    pub fn field(&self, field: NoteField) -> &str {
        match field {
            NoteField::Title => &self.title,
            NoteField::Content => &self.content,
        }
    }

    /// Replaces the value of `field`.
    pub fn set_field(&mut self, field: NoteField, value: impl Into<String>) {
        match field {
            NoteField::Title => self.title = value.into(),
            NoteField::Content => self.content = value.into(),
        }
    }

    /// The title, or `untitled` when the title is blank.
    pub fn display_title<'a>(&'a self, untitled: &'a str) -> &'a str {
        if self.title.trim().is_empty() {
            untitled
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_falls_back() {
        let note = Note::new("1", "  ");
        assert_eq!(note.display_title("Untitled Note"), "Untitled Note");
        let note = Note::new("1", "Groceries");
        assert_eq!(note.display_title("Untitled Note"), "Groceries");
    }

    #[test]
    fn test_set_field() {
        let mut note = Note::new("1", "a");
        note.set_field(NoteField::Content, "body");
        note.set_field(NoteField::Title, "b");
        assert_eq!(note.field(NoteField::Title), "b");
        assert_eq!(note.field(NoteField::Content), "body");
    }

    #[test]
    fn test_deserialize_store_record() {
        let note: Note = toml::from_str(
            "id = \"n1\"\ntitle = \"Plan\"\ntheme = \"yellow\"\nisPinned = true\n",
        )
        .unwrap();
        assert_eq!(note.id, "n1");
        assert_eq!(note.theme, NoteTheme::Yellow);
        assert!(note.is_pinned);
        assert_eq!(note.content, "");
    }
}
