//! Task timer state machine and view.

use super::format::{format_remaining, Tone};
use super::keymap::KeyMap;
use super::scheduler::{Registration, Scheduler, TickMsg, TickScheduler};
use super::unit::TimeUnit;
use crate::config::TimerSettings;
use crate::help;
use crate::key::matches_binding;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss::Color;
use lipgloss_extras::prelude::*;
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Smallest duration the editor accepts.
pub const MIN_DURATION: u32 = 1;
/// Largest duration the editor accepts.
pub const MAX_DURATION: u32 = 99;

const DEFAULT_DURATION: u32 = 60;
const MAX_DRAFT_DIGITS: usize = 2;

/// Lifecycle status of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Freshly created or reset.
    #[default]
    Ready,
    /// Counting down once per interval.
    Running,
    /// Halted by pause.
    Paused,
    /// Halted by stop.
    Stopped,
}

impl Status {
    /// Capitalised name for the status label.
    pub fn label(self) -> &'static str {
        match self {
            Status::Ready => "Ready",
            Status::Running => "Running",
            Status::Paused => "Paused",
            Status::Stopped => "Stopped",
        }
    }

    /// Hint line shown under the controls.
    pub fn hint(self) -> &'static str {
        match self {
            Status::Ready => "Press Start to begin",
            Status::Running => "Timer running",
            Status::Paused => "Timer paused",
            Status::Stopped => "Timer stopped",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Styles for the timer view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Status label.
    pub status: Style,
    /// Clock while time is left.
    pub counting: Style,
    /// Clock at exactly zero.
    pub at_zero: Style,
    /// Clock past zero.
    pub exceeded: Style,
    /// Duration field in edit mode.
    pub editor: Style,
    /// Unit selector in edit mode.
    pub unit: Style,
    /// "Time Exceeded" line.
    pub exceeded_note: Style,
    /// Status hint.
    pub hint: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let dim = Style::new().foreground(Color::from("#B8B8B8"));
        Self {
            status: dim.clone(),
            counting: Style::new()
                .bold(true)
                .foreground(Color::from("#A855F7"))
                .padding(0, 1, 0, 1),
            at_zero: Style::new()
                .bold(true)
                .foreground(Color::from("#EAB308"))
                .padding(0, 1, 0, 1),
            exceeded: Style::new()
                .bold(true)
                .foreground(Color::from("#EF4444"))
                .padding(0, 1, 0, 1),
            editor: Style::new()
                .bold(true)
                .underline(true)
                .foreground(Color::from("#FFFFFF")),
            unit: Style::new().foreground(Color::from("#3B82F6")),
            exceeded_note: Style::new().foreground(Color::from("#EC4899")),
            hint: dim,
        }
    }
}

/// Countdown timer with a configurable duration and unit.
///
/// The remaining time starts at the configured duration and drops by one
/// second per tick while running. It keeps counting past zero into negative
/// values until paused, stopped or reset.
///
/// ```rust
/// use notedeck_widgets::timer::{Model, Status, TimeUnit};
///
/// let mut timer = Model::new();
/// assert_eq!(timer.remaining(), 60);
/// assert_eq!(timer.display(), "60");
///
/// timer.set_unit(TimeUnit::Minutes);
/// assert_eq!(timer.configured_duration(), 1);
/// assert_eq!(timer.remaining(), 60);
///
/// let _first_tick = timer.start();
/// assert_eq!(timer.status(), Status::Running);
/// timer.reset();
/// assert_eq!(timer.status(), Status::Ready);
/// ```
#[derive(Debug)]
pub struct Model<S: Scheduler = TickScheduler> {
    /// Time between decrements.
    pub interval: Duration,
    /// Key bindings.
    pub key_map: KeyMap,
    /// Help line renderer.
    pub help: help::Model,
    /// View styles.
    pub styles: Styles,

    configured: u32,
    unit: TimeUnit,
    remaining: i64,
    status: Status,
    editing: bool,
    draft: String,
    focus: bool,

    id: i64,
    tag: i64,
    scheduler: S,
}

impl Model<TickScheduler> {
    /// A ready timer set to 60 seconds.
    pub fn new() -> Self {
        Self::with_scheduler(TickScheduler)
    }

    /// A ready timer configured from settings.
    pub fn from_settings(settings: &TimerSettings) -> Self {
        let mut model = Self::new().with_interval(settings.tick_interval());
        model.unit = settings.unit;
        model.set_duration(settings.duration);
        model
    }
}

impl Default for Model<TickScheduler> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scheduler> Model<S> {
    /// A ready 60 second timer whose decrement is driven by `scheduler`.
    pub fn with_scheduler(scheduler: S) -> Self {
        let mut model = Self {
            interval: Duration::from_secs(1),
            key_map: KeyMap::default(),
            help: help::Model::new(),
            styles: Styles::default(),
            configured: DEFAULT_DURATION,
            unit: TimeUnit::Seconds,
            remaining: TimeUnit::Seconds.to_seconds(DEFAULT_DURATION),
            status: Status::Ready,
            editing: false,
            draft: DEFAULT_DURATION.to_string(),
            focus: false,
            id: next_id(),
            tag: 0,
            scheduler,
        };
        model.sync_keys();
        model
    }

    /// Sets the tick interval. Takes effect on the next start.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Unique id used to route tick messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether the decrement is armed.
    pub fn running(&self) -> bool {
        self.status == Status::Running
    }

    /// Configured duration, in [`Self::unit`]s.
    pub fn configured_duration(&self) -> u32 {
        self.configured
    }

    /// Unit of the configured duration.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Remaining seconds; negative once the duration is exceeded.
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// True once the remaining time is zero or less.
    pub fn exceeded(&self) -> bool {
        self.remaining <= 0
    }

    /// Presentation category of the remaining time.
    pub fn tone(&self) -> Tone {
        Tone::of(self.remaining)
    }

    /// Whether the duration editor is open.
    pub fn editing(&self) -> bool {
        self.editing
    }

    /// Text of the duration field.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Remaining time formatted for the current unit.
    pub fn display(&self) -> String {
        format_remaining(self.remaining, self.unit)
    }

    /// The armed registration, present only while running.
    pub fn registration(&self) -> Option<Registration> {
        self.running().then(|| self.current_registration())
    }

    /// A reference to the scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn current_registration(&self) -> Registration {
        Registration {
            id: self.id,
            tag: self.tag,
            interval: self.interval,
        }
    }

    fn seconds_for_config(&self) -> i64 {
        self.unit.to_seconds(self.configured)
    }

    // Invalidates the armed registration. Runs before any status change so a
    // tick already in flight can no longer decrement.
    fn disarm(&mut self) {
        if self.status == Status::Running {
            self.scheduler.disarm(self.current_registration());
            self.tag += 1;
        }
    }

    fn sync_keys(&mut self) {
        self.key_map.update_enabled(self.status, self.editing);
    }

    /// Starts counting. Does nothing while already running, so at most one
    /// decrement is ever armed.
    pub fn start(&mut self) -> Option<Cmd> {
        if self.status == Status::Running {
            return None;
        }
        self.tag += 1;
        self.status = Status::Running;
        self.sync_keys();
        log::debug!("timer {}: running from {}s", self.id, self.remaining);
        self.scheduler.arm(self.current_registration())
    }

    /// Pauses a running timer. Other statuses are left alone.
    pub fn pause(&mut self) {
        if self.status != Status::Running {
            return;
        }
        self.disarm();
        self.status = Status::Paused;
        self.sync_keys();
        log::debug!("timer {}: paused at {}s", self.id, self.remaining);
    }

    /// Stops a running or paused timer. Ready and stopped timers are left alone.
    pub fn stop(&mut self) {
        if matches!(self.status, Status::Ready | Status::Stopped) {
            return;
        }
        self.disarm();
        self.status = Status::Stopped;
        self.sync_keys();
        log::debug!("timer {}: stopped at {}s", self.id, self.remaining);
    }

    /// Starts when idle, pauses when running.
    pub fn toggle(&mut self) -> Option<Cmd> {
        if self.running() {
            self.pause();
            None
        } else {
            self.start()
        }
    }

    /// Back to ready with the full configured duration.
    pub fn reset(&mut self) {
        self.disarm();
        self.remaining = self.seconds_for_config();
        self.status = Status::Ready;
        self.sync_keys();
        log::debug!("timer {}: reset to {}s", self.id, self.remaining);
    }

    fn apply_duration(&mut self, duration: u32) {
        self.configured = duration;
        self.remaining = self.seconds_for_config();
    }

    /// Sets the configured duration. The remaining time is overwritten even
    /// while running; the status does not change.
    pub fn set_duration(&mut self, duration: u32) {
        self.apply_duration(duration);
        self.draft = duration.to_string();
    }

    /// Applies the text of the duration field.
    ///
    /// Text that is not an integer is ignored and `false` is returned.
    /// Integers are clamped to `MIN_DURATION..=MAX_DURATION`.
    pub fn set_duration_input(&mut self, text: &str) -> bool {
        self.draft = text.trim().to_string();
        match self.draft.parse::<i64>() {
            Ok(value) => {
                let clamped = value.clamp(i64::from(MIN_DURATION), i64::from(MAX_DURATION));
                self.apply_duration(clamped as u32);
                true
            }
            Err(_) => {
                log::debug!("timer {}: ignoring duration input {:?}", self.id, text);
                false
            }
        }
    }

    /// Switches unit, converting the configured duration so it covers about
    /// the same span. Countdown progress is discarded.
    pub fn set_unit(&mut self, unit: TimeUnit) {
        let converted = self.unit.convert(self.configured, unit);
        self.unit = unit;
        self.set_duration(converted);
    }

    /// Moves to the next unit.
    pub fn cycle_unit(&mut self) {
        self.set_unit(self.unit.next());
    }

    /// Opens or closes the duration editor.
    pub fn toggle_editing(&mut self) {
        self.editing = !self.editing;
        if self.editing {
            self.draft = self.configured.to_string();
        }
        self.sync_keys();
    }

    fn nudge(&mut self, delta: i64) {
        let value = (i64::from(self.configured) + delta)
            .clamp(i64::from(MIN_DURATION), i64::from(MAX_DURATION));
        self.set_duration(value as u32);
    }

    fn push_digit(&mut self, digit: char) {
        if self.draft.len() >= MAX_DRAFT_DIGITS {
            return;
        }
        let mut text = self.draft.clone();
        text.push(digit);
        self.set_duration_input(&text);
    }

    fn pop_digit(&mut self) {
        let mut text = self.draft.clone();
        text.pop();
        self.set_duration_input(&text);
    }

    fn handle_tick(&mut self, tick: &TickMsg) -> Option<Cmd> {
        let registration = self.registration()?;
        if !registration.owns(tick) {
            log::trace!("timer {}: dropping stale tick", self.id);
            return None;
        }
        self.remaining -= 1;
        log::trace!("timer {}: {}s", self.id, self.remaining);
        self.scheduler.repeat(registration)
    }

    // Editor keys; Some when the key was consumed.
    fn handle_edit_key(&mut self, key_msg: &KeyMsg) -> Option<Option<Cmd>> {
        if let KeyCode::Char(c) = key_msg.key {
            if c.is_ascii_digit() && key_msg.modifiers == KeyModifiers::NONE {
                self.push_digit(c);
                return Some(None);
            }
        }

        if matches_binding(key_msg, &self.key_map.delete_digit) {
            self.pop_digit();
        } else if matches_binding(key_msg, &self.key_map.increment) {
            self.nudge(1);
        } else if matches_binding(key_msg, &self.key_map.decrement) {
            self.nudge(-1);
        } else if matches_binding(key_msg, &self.key_map.cycle_unit) {
            self.cycle_unit();
        } else if matches_binding(key_msg, &self.key_map.finish) {
            self.toggle_editing();
        } else {
            return None;
        }
        Some(None)
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.editing {
            if let Some(cmd) = self.handle_edit_key(key_msg) {
                return cmd;
            }
        }

        if matches_binding(key_msg, &self.key_map.start) {
            self.start()
        } else if matches_binding(key_msg, &self.key_map.pause) {
            self.pause();
            None
        } else if matches_binding(key_msg, &self.key_map.toggle) {
            self.toggle()
        } else if matches_binding(key_msg, &self.key_map.stop) {
            self.stop();
            None
        } else if matches_binding(key_msg, &self.key_map.reset) {
            self.reset();
            None
        } else if matches_binding(key_msg, &self.key_map.edit) {
            self.toggle_editing();
            None
        } else {
            None
        }
    }

    /// Handles ticks for this timer and, while focused, key presses.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            return self.handle_tick(tick);
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.focus {
                return self.handle_key(key_msg);
            }
        }
        None
    }

    /// Renders the timer card.
    pub fn view(&self) -> String {
        let mut lines = vec![self.styles.status.render(self.status.label())];

        if self.editing {
            let field = if self.draft.is_empty() {
                "  "
            } else {
                self.draft.as_str()
            };
            lines.push(format!(
                "{} {}",
                self.styles.editor.render(field),
                self.styles.unit.render(&format!("[{}]", self.unit.label()))
            ));
        } else {
            let clock = match self.tone() {
                Tone::Counting => &self.styles.counting,
                Tone::AtZero => &self.styles.at_zero,
                Tone::Exceeded => &self.styles.exceeded,
            };
            lines.push(clock.render(&self.display()));
        }

        if self.exceeded() {
            lines.push(self.styles.exceeded_note.render("Time Exceeded"));
        }

        let help = self.help.view(&self.key_map);
        if !help.is_empty() {
            lines.push(help);
        }
        lines.push(self.styles.hint.render(self.status.hint()));
        lines.join("\n")
    }
}

impl<S: Scheduler> Drop for Model<S> {
    fn drop(&mut self) {
        self.disarm();
    }
}

impl<S: Scheduler> Component for Model<S> {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl BubbleTeaModel for Model<TickScheduler> {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Self::new();
        let cmd = model.focus();
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
