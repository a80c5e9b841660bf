//! Help line rendering for component key maps.
//!
//! The help model renders either a single line of `key desc` pairs or a set
//! of columns, one per binding group. Disabled bindings are skipped, so the
//! help always reflects what the user can press right now.

use crate::key::{Binding, KeyMap};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles for the help view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style of the truncation marker.
    pub ellipsis: Style,
    /// Style of key labels.
    pub key: Style,
    /// Style of binding descriptions.
    pub desc: Style,
    /// Style of separators.
    pub separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let key = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let separator = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: separator.clone(),
            key,
            desc,
            separator,
        }
    }
}

/// Help view state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Render the full multi-column help instead of the short line.
    pub show_all: bool,
    /// Maximum width; 0 means unlimited.
    pub width: usize,
    /// Separator between short help entries.
    pub short_separator: String,
    /// Separator between full help columns.
    pub full_separator: String,
    /// Marker appended when entries are cut off.
    pub ellipsis: String,
    /// Styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help model with default styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the help for `keymap`.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    fn entry(&self, binding: &Binding) -> String {
        let help = binding.help();
        format!(
            "{} {}",
            self.styles.key.clone().inline(true).render(&help.key),
            self.styles.desc.clone().inline(true).render(&help.desc)
        )
    }

    /// Renders enabled bindings on one line.
    pub fn short_help_view(&self, bindings: Vec<&Binding>) -> String {
        let separator = self
            .styles
            .separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        let mut out = String::new();
        let mut total_width = 0;
        for binding in bindings.into_iter().filter(|b| b.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let item = format!("{}{}", sep, self.entry(binding));
            let item_width = lipgloss::width_visible(&item);

            if let Some(tail) = self.overflow_tail(total_width, item_width) {
                out.push_str(&tail);
                break;
            }
            total_width += item_width;
            out.push_str(&item);
        }
        out
    }

    /// Renders each non-empty group as a column.
    pub fn full_help_view(&self, groups: Vec<Vec<&Binding>>) -> String {
        let separator = self
            .styles
            .separator
            .clone()
            .inline(true)
            .render(&self.full_separator);

        let mut columns: Vec<String> = Vec::new();
        let mut total_width = 0;
        for group in groups {
            let rows: Vec<String> = group
                .into_iter()
                .filter(|b| b.enabled())
                .map(|b| self.entry(b))
                .collect();
            if rows.is_empty() {
                continue;
            }

            let column = rows.join("\n");
            let width = lipgloss::width_visible(&column);
            if let Some(tail) = self.overflow_tail(total_width, width) {
                if !tail.is_empty() {
                    columns.push(tail);
                }
                break;
            }
            total_width += width;
            columns.push(column);
        }

        let mut parts: Vec<&str> = Vec::new();
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                parts.push(separator.as_str());
            }
            parts.push(column.as_str());
        }
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    // Some(tail) when the item does not fit; the tail is empty if even the
    // ellipsis would overflow.
    fn overflow_tail(&self, total_width: usize, item_width: usize) -> Option<String> {
        if self.width == 0 || total_width + item_width <= self.width {
            return None;
        }
        let tail = format!(
            " {}",
            self.styles.ellipsis.clone().inline(true).render(&self.ellipsis)
        );
        if total_width + lipgloss::width_visible(&tail) < self.width {
            Some(tail)
        } else {
            Some(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{new_binding, with_disabled, with_help, with_keys_str};

    struct Keys {
        start: Binding,
        stop: Binding,
        quit: Binding,
    }

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.start, &self.stop, &self.quit]
        }

        fn full_help(&self) -> Vec<Vec<&Binding>> {
            vec![vec![&self.start, &self.stop], vec![&self.quit]]
        }
    }

    fn keys() -> Keys {
        Keys {
            start: new_binding(vec![with_keys_str(&["s"]), with_help("s", "start")]),
            stop: new_binding(vec![
                with_keys_str(&["x"]),
                with_help("x", "stop"),
                with_disabled(),
            ]),
            quit: new_binding(vec![with_keys_str(&["q"]), with_help("q", "quit")]),
        }
    }

    fn plain(s: &str) -> String {
        strip_ansi_escapes::strip_str(s)
    }

    #[test]
    fn test_short_help_skips_disabled() {
        let help = Model::new();
        let out = plain(&help.view(&keys()));
        assert_eq!(out, "s start • q quit");
    }

    #[test]
    fn test_short_help_truncates_to_width() {
        let help = Model::new().with_width(10);
        let out = plain(&help.view(&keys()));
        assert!(out.starts_with("s start"));
        assert!(!out.contains("quit"));
    }

    #[test]
    fn test_full_help_has_columns() {
        let mut help = Model::new();
        help.show_all = true;
        let out = plain(&help.view(&keys()));
        assert!(out.contains("s start"));
        assert!(out.contains("q quit"));
        assert!(!out.contains("stop"));
    }

    #[test]
    fn test_empty_keymap_renders_nothing() {
        let help = Model::new();
        assert_eq!(help.short_help_view(Vec::new()), "");
    }
}
