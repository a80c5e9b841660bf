//! Key bindings shared by the notedeck components.
//!
//! A [`Binding`] groups the key presses that trigger one action together with
//! the help text shown for it. Bindings can be disabled, in which case they no
//! longer match input and are hidden from help views.
//!
//! # Examples
//!
//! ```rust
//! use notedeck_widgets::key::{matches_binding, new_binding, with_help, with_keys_str};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let start = new_binding(vec![with_keys_str(&["s"]), with_help("s", "start")]);
//!
//! let msg = KeyMsg {
//!     key: KeyCode::Char('s'),
//!     modifiers: KeyModifiers::NONE,
//! };
//! assert!(matches_binding(&msg, &start));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

impl KeyPress {
    /// Parses a key description such as `"s"`, `"up"`, `"ctrl+c"` or
    /// `"space"`. Returns `None` for names it does not know.
    pub fn parse(spec: &str) -> Option<Self> {
        let mut mods = KeyModifiers::NONE;
        let mut rest = spec;
        loop {
            if let Some(tail) = rest.strip_prefix("ctrl+") {
                mods |= KeyModifiers::CONTROL;
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("alt+") {
                mods |= KeyModifiers::ALT;
                rest = tail;
            } else {
                break;
            }
        }

        let code = match rest {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "space" | " " => KeyCode::Char(' '),
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pgup" => KeyCode::PageUp,
            "pgdown" => KeyCode::PageDown,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self { code, mods })
    }

    /// Whether a key message is this key press. Shift is ignored so that
    /// upper-case characters match bindings declared with their character.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        let mut mods = msg.modifiers;
        mods.remove(KeyModifiers::SHIFT);
        self.code == msg.key && self.mods == mods
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"s"` or `"↑/k"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of keys bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given keys with empty help.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// The key presses of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text of this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding is active. Bindings without keys are never active.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether `msg` is one of this binding's keys, ignoring the enabled flag.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Sets the keys of a binding from key descriptions. Unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys
        .iter()
        .filter_map(|k| {
            let press = KeyPress::parse(k);
            if press.is_none() {
                log::debug!("ignoring unknown key name {k:?}");
            }
            press
        })
        .collect();
    Box::new(move |b: &mut Binding| b.keys = parsed)
}

/// Sets the help text of a binding.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Starts the binding out disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

/// Whether `msg` triggers `binding`. Disabled bindings never match.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.enabled() && binding.matches(msg)
}

/// Bindings a component exposes to the help view.
pub trait KeyMap {
    /// Bindings for the single-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for the expanded help.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(KeyPress::parse("up"), Some(KeyPress::from(KeyCode::Up)));
        assert_eq!(
            KeyPress::parse("space"),
            Some(KeyPress::from(KeyCode::Char(' ')))
        );
        assert_eq!(
            KeyPress::parse("ctrl+c"),
            Some(KeyPress::from((KeyCode::Char('c'), KeyModifiers::CONTROL)))
        );
        assert_eq!(KeyPress::parse("hyper"), None);
    }

    #[test]
    fn test_binding_matches_and_disables() {
        let mut b = new_binding(vec![with_keys_str(&["x", "delete"]), with_help("x", "stop")]);
        assert!(matches_binding(&press(KeyCode::Char('x'), KeyModifiers::NONE), &b));
        assert!(matches_binding(&press(KeyCode::Delete, KeyModifiers::NONE), &b));
        assert!(!matches_binding(&press(KeyCode::Char('y'), KeyModifiers::NONE), &b));

        b.set_enabled(false);
        assert!(!b.enabled());
        assert!(!matches_binding(&press(KeyCode::Char('x'), KeyModifiers::NONE), &b));
        assert_eq!(b.help().desc, "stop");
    }

    #[test]
    fn test_shift_is_ignored_but_ctrl_is_not() {
        let b = new_binding(vec![with_keys_str(&["S"])]);
        assert!(matches_binding(&press(KeyCode::Char('S'), KeyModifiers::SHIFT), &b));
        assert!(!matches_binding(&press(KeyCode::Char('S'), KeyModifiers::CONTROL), &b));
    }

    #[test]
    fn test_with_disabled_and_empty_keys() {
        let b = new_binding(vec![with_keys_str(&["q"]), with_disabled()]);
        assert!(!b.enabled());
        let empty = new_binding(vec![with_help("?", "nothing")]);
        assert!(!empty.enabled());
    }
}
