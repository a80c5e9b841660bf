#![warn(missing_docs)]

//! # notedeck-widgets
//!
//! Terminal UI components for a note-taking desk, built on
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) and styled with
//! lipgloss.
//!
//! ## Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`timer::Model`] | Task timer that counts down and keeps counting past zero |
//! | [`notes::Model`] | Notes page with debounced saves to a note store |
//!
//! Both follow the Elm Architecture: feed every message to `update()` and
//! render with `view()`. Keyboard input is only handled while a component is
//! focused (see [`Component`]); timer ticks and save flushes are always
//! handled.
//!
//! ## Quick Start
//!
//! ```rust
//! use notedeck_widgets::prelude::*;
//!
//! let mut timer = Timer::new();
//! timer.set_unit(TimeUnit::Minutes);
//! timer.set_duration(25);
//! let _first_tick = timer.start();
//! assert_eq!(timer.display(), "25:00");
//! ```
//!
//! ## Configuration
//!
//! Defaults for both components can be read from TOML with
//! [`config::Settings`].
//!
//! ## Logging
//!
//! The crate logs through the `log` facade: transitions at `debug`, ticks and
//! saves at `trace`, and failed store or host calls at `warn`.

pub mod config;
pub mod help;
pub mod key;
pub mod notes;
pub mod timer;

use bubbletea_rs::Cmd;

/// Keyboard focus management shared by the components.
///
/// A focused component reacts to key presses; a blurred one ignores them but
/// keeps processing its own background messages.
///
/// ```rust
/// use notedeck_widgets::prelude::*;
///
/// let mut timer = Timer::new();
/// assert!(!timer.focused());
/// timer.focus();
/// assert!(timer.focused());
/// timer.blur();
/// assert!(!timer.focused());
/// ```
pub trait Component {
    /// Gives the component keyboard focus. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Takes keyboard focus away.
    fn blur(&mut self);

    /// Whether the component has keyboard focus.
    fn focused(&self) -> bool;
}

pub use config::{ConfigError, NotesSettings, Settings, TimerSettings};
pub use help::Model as HelpModel;
pub use key::{
    matches_binding, new_binding, with_disabled, with_help, with_keys_str, Binding,
    Help as KeyHelp, KeyMap, KeyPress,
};
pub use notes::{
    HostBridge, MemoryStore, Model as NotesPage, Note, NoteField, NoteStore, NoteTheme, StoreError,
};
pub use timer::{
    format_remaining, Model as Timer, Scheduler, Status as TimerStatus, TickMsg as TimerTickMsg,
    TickScheduler, TimeUnit, Tone,
};

/// Common imports.
///
/// ```rust
/// use notedeck_widgets::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Settings;
    pub use crate::help::Model as HelpModel;
    pub use crate::key::{matches_binding, Binding, KeyMap, KeyPress};
    pub use crate::notes::{
        HostBridge, MemoryStore, Model as NotesPage, Note, NoteField, NoteStore, NoteTheme,
    };
    pub use crate::timer::{
        format_remaining, Model as Timer, Status as TimerStatus, TimeUnit, Tone,
    };
    pub use crate::Component;
}
