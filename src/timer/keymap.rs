//! Key bindings for the task timer.

use super::model::Status;
use crate::key::{self, new_binding, with_help, with_keys_str, Binding};

/// Bindings for the timer controls and the duration editor.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Start or resume.
    pub start: Binding,
    /// Pause a running timer.
    pub pause: Binding,
    /// Start when idle, pause when running.
    pub toggle: Binding,
    /// Stop a running or paused timer.
    pub stop: Binding,
    /// Back to the configured duration.
    pub reset: Binding,
    /// Enter or leave edit mode.
    pub edit: Binding,
    /// Editor: one more.
    pub increment: Binding,
    /// Editor: one less.
    pub decrement: Binding,
    /// Editor: next unit.
    pub cycle_unit: Binding,
    /// Editor: leave edit mode.
    pub finish: Binding,
    /// Editor: delete the last digit.
    pub delete_digit: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            start: new_binding(vec![with_keys_str(&["s"]), with_help("s", "start")]),
            pause: new_binding(vec![with_keys_str(&["p"]), with_help("p", "pause")]),
            toggle: new_binding(vec![
                with_keys_str(&["space"]),
                with_help("space", "start/pause"),
            ]),
            stop: new_binding(vec![with_keys_str(&["x"]), with_help("x", "stop")]),
            reset: new_binding(vec![with_keys_str(&["r"]), with_help("r", "reset")]),
            edit: new_binding(vec![with_keys_str(&["e"]), with_help("e", "edit")]),
            increment: new_binding(vec![with_keys_str(&["up", "k"]), with_help("↑/k", "more")]),
            decrement: new_binding(vec![
                with_keys_str(&["down", "j"]),
                with_help("↓/j", "less"),
            ]),
            cycle_unit: new_binding(vec![with_keys_str(&["tab", "u"]), with_help("u", "unit")]),
            finish: new_binding(vec![
                with_keys_str(&["enter", "esc"]),
                with_help("enter", "done"),
            ]),
            delete_digit: new_binding(vec![
                with_keys_str(&["backspace"]),
                with_help("⌫", "delete digit"),
            ]),
        }
    }
}

impl KeyMap {
    /// Enables the bindings that make sense for `status` and edit mode.
    pub fn update_enabled(&mut self, status: Status, editing: bool) {
        let running = status == Status::Running;
        self.start.set_enabled(!running);
        self.pause.set_enabled(running);
        self.stop
            .set_enabled(matches!(status, Status::Running | Status::Paused));

        self.increment.set_enabled(editing);
        self.decrement.set_enabled(editing);
        self.cycle_unit.set_enabled(editing);
        self.finish.set_enabled(editing);
        self.delete_digit.set_enabled(editing);
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.start,
            &self.pause,
            &self.stop,
            &self.reset,
            &self.edit,
            &self.cycle_unit,
            &self.finish,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.start, &self.pause, &self.toggle, &self.stop, &self.reset],
            vec![
                &self.edit,
                &self.increment,
                &self.decrement,
                &self.cycle_unit,
                &self.delete_digit,
                &self.finish,
            ],
        ]
    }
}
