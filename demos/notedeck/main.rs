//! Task timer and notes page side by side.
//!
//! Run with an optional settings file:
//!
//! ```text
//! cargo run -- notedeck.toml
//! ```
//!
//! `tab` switches focus, `q` or `ctrl+c` quits.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program};
use crossterm::event::{KeyCode, KeyModifiers};
use notedeck_widgets::prelude::*;
use notedeck_widgets::notes::FlushMsg;
use notedeck_widgets::{Settings, TimerTickMsg};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Timer,
    Notes,
}

struct App {
    timer: Timer,
    notes: NotesPage,
    pane: Pane,
}

fn sample_notes() -> Vec<Note> {
    vec![
        Note::new("1", "Standup").with_content("Demo the timer widget"),
        Note::new("2", "Groceries")
            .with_content("milk, eggs, coffee")
            .with_theme(NoteTheme::Yellow),
        Note::new("3", "").with_theme(NoteTheme::Green),
    ]
}

fn load_settings() -> Settings {
    let Some(path) = std::env::args().nth(1) else {
        return Settings::default();
    };
    match Settings::load(&path) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("{err}; using defaults");
            Settings::default()
        }
    }
}

impl App {
    fn switch_pane(&mut self) {
        self.pane = match self.pane {
            Pane::Timer => {
                self.timer.blur();
                self.notes.focus();
                Pane::Notes
            }
            Pane::Notes => {
                self.notes.blur();
                self.timer.focus();
                Pane::Timer
            }
        };
    }

    fn typing(&self) -> bool {
        self.timer.editing() || self.notes.editing_title()
    }
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let settings = load_settings();
        let store = MemoryStore::new(sample_notes());

        let mut timer = Timer::from_settings(&settings.timer);
        timer.focus();
        let mut notes = NotesPage::from_settings(
            Box::new(store.clone()),
            Box::new(store),
            &settings.notes,
        );
        notes.load_notes();

        (
            Self {
                timer,
                notes,
                pane: Pane::Timer,
            },
            None,
        )
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            let ctrl_c =
                key.key == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            if ctrl_c || (key.key == KeyCode::Char('q') && !self.typing()) {
                self.notes.flush_pending();
                return Some(quit());
            }
            if key.key == KeyCode::Tab && !self.typing() {
                self.switch_pane();
                return None;
            }
        }

        // Flushes go to the notes page, ticks to the timer, keys to the focused pane.
        if msg.is::<FlushMsg>() {
            return self.notes.update(msg);
        }
        if msg.is::<TimerTickMsg>() {
            return self.timer.update(msg);
        }
        match self.pane {
            Pane::Timer => self.timer.update(msg),
            Pane::Notes => self.notes.update(msg),
        }
    }

    fn view(&self) -> String {
        format!(
            "{}\n\n{}\n\ntab switch pane • q quit",
            self.timer.view(),
            self.notes.view()
        )
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let program = Program::<App>::builder().build()?;
    program.run().await?;
    Ok(())
}
