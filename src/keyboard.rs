// keyboard.rs
//! On-screen keyboard for the touch kiosk, which has no physical keys.
//!
//! The keyboard routes key presses into whichever form input last asked
//! for it. It owns a working copy of that input's value; the screen writes
//! it back on every `Edited` outcome.

/// Key rows, top to bottom, as `data-key` values.
pub const LAYOUT: [&[&str]; 4] = [
    &["1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "backspace"],
    &["q", "w", "e", "r", "t", "y", "u", "i", "o", "p"],
    &["a", "s", "d", "f", "g", "h", "j", "k", "l", "enter"],
    &["z", "x", "c", "v", "b", "n", "m", "space"],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Space,
    Enter,
}

impl Key {
    /// Parses a `data-key` attribute. Unknown names yield `None`.
    pub fn from_data_key(data_key: &str) -> Option<Key> {
        match data_key {
            "backspace" => Some(Key::Backspace),
            "space" => Some(Key::Space),
            "enter" => Some(Key::Enter),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::Char(c)),
                    _ => None,
                }
            }
        }
    }

    /// Text printed on the key cap.
    pub fn cap(self) -> String {
        match self {
            Key::Char(c) => c.to_uppercase().collect(),
            Key::Backspace => "⌫".to_string(),
            Key::Space => "Space".to_string(),
            Key::Enter => "Enter".to_string(),
        }
    }
}

/// The input the keyboard is currently typing into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusedInput {
    pub input_id: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keyboard hidden or nothing focused; the press did nothing.
    Ignored,
    /// The focused value changed (or was re-sent unchanged on backspace at
    /// empty). The screen should fire its `input` handlers.
    Edited(FocusedInput),
    /// Enter closed the keyboard; carries the final value.
    Submitted(FocusedInput),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VirtualKeyboard {
    #[default]
    Hidden,
    Visible { target: FocusedInput },
}

impl VirtualKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, VirtualKeyboard::Visible { .. })
    }

    pub fn target(&self) -> Option<&FocusedInput> {
        match self {
            VirtualKeyboard::Hidden => None,
            VirtualKeyboard::Visible { target } => Some(target),
        }
    }

    /// Opens the keyboard on `input_id`, replacing any previous target.
    pub fn show(&mut self, input_id: impl Into<String>, current_value: impl Into<String>) {
        let target = FocusedInput {
            input_id: input_id.into(),
            value: current_value.into(),
        };
        tracing::debug!(input = %target.input_id, "virtual keyboard shown");
        *self = VirtualKeyboard::Visible { target };
    }

    /// Closes the keyboard and hands back the last target, if any.
    pub fn hide(&mut self) -> Option<FocusedInput> {
        match std::mem::take(self) {
            VirtualKeyboard::Hidden => None,
            VirtualKeyboard::Visible { target } => Some(target),
        }
    }

    /// Hides when visible, otherwise shows on `input_id`.
    pub fn toggle(&mut self, input_id: impl Into<String>, current_value: impl Into<String>) {
        if self.is_visible() {
            self.hide();
        } else {
            self.show(input_id, current_value);
        }
    }

    pub fn press(&mut self, key: Key) -> KeyOutcome {
        let VirtualKeyboard::Visible { target } = self else {
            return KeyOutcome::Ignored;
        };

        match key {
            Key::Enter => {
                return match self.hide() {
                    Some(target) => KeyOutcome::Submitted(target),
                    None => KeyOutcome::Ignored,
                };
            }
            Key::Backspace => {
                target.value.pop();
            }
            Key::Space => target.value.push(' '),
            Key::Char(c) => target.value.push(c),
        }

        KeyOutcome::Edited(target.clone())
    }

    /// Convenience for wiring straight from a click on a key element.
    pub fn press_data_key(&mut self, data_key: &str) -> KeyOutcome {
        match Key::from_data_key(data_key) {
            Some(key) => self.press(key),
            None => {
                tracing::warn!(data_key, "unknown virtual key");
                KeyOutcome::Ignored
            }
        }
    }
}
