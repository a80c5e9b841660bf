//! Task timer component.
//!
//! A countdown timer whose duration is configured in seconds, minutes or
//! hours. Once started it loses one second per tick and keeps going past
//! zero, so it doubles as a count-up of how far a task has overrun.
//!
//! # Basic Usage
//!
//! ```rust
//! use notedeck_widgets::timer::{Model, Status, TimeUnit};
//!
//! let mut timer = Model::new();
//! timer.set_unit(TimeUnit::Minutes);
//! timer.set_duration(25);
//! assert_eq!(timer.display(), "25:00");
//!
//! let _tick = timer.start();
//! assert_eq!(timer.status(), Status::Running);
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use notedeck_widgets::timer::Model as Timer;
//! use notedeck_widgets::Component;
//!
//! struct App {
//!     timer: Timer,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut timer = Timer::new();
//!         timer.focus();
//!         (Self { timer }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Ticks and key presses are both routed through the timer.
//!         self.timer.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.timer.view()
//!     }
//! }
//! ```
//!
//! # Custom Schedulers
//!
//! Ticks come from a [`Scheduler`]. The default [`TickScheduler`] uses
//! `bubbletea_rs::tick`; tests and hosts with their own event loop can plug in
//! another implementation with [`Model::with_scheduler`].

pub mod format;
pub mod keymap;
pub mod model;
pub mod scheduler;
pub mod unit;


pub use format::{format_remaining, Tone};
pub use keymap::KeyMap;
pub use model::{Model, Status, Styles, MAX_DURATION, MIN_DURATION};
pub use scheduler::{Registration, Scheduler, TickMsg, TickScheduler};
pub use unit::{ParseUnitError, TimeUnit};
