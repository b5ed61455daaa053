//! Keyboard bindings: terminal key events to session commands

use crate::settings::Settings;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, ModifierKeyCode};
use swipetris::game::Command;

/// What a key press asks the frontend to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Game(Command),
    Quit,
}

/// Key bindings configuration - supports multiple keys per command
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(KeyCode, KeyAction)>,
}

impl KeyBindings {
    /// Parse a key name into a KeyCode
    fn parse_key(s: &str) -> Option<KeyCode> {
        let code = match s.to_lowercase().as_str() {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "space" => KeyCode::Char(' '),
            "enter" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "esc" | "escape" => KeyCode::Esc,
            "shift" => KeyCode::Modifier(ModifierKeyCode::LeftShift),
            s => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };
        Some(code)
    }

    /// Create keybindings from settings. Unknown key names are logged and skipped.
    pub fn from_settings(settings: &Settings) -> Self {
        let keys = &settings.keys;
        let groups: [(&[String], KeyAction); 9] = [
            (keys.move_left.as_slice(), KeyAction::Game(Command::MoveLeft)),
            (keys.move_right.as_slice(), KeyAction::Game(Command::MoveRight)),
            (keys.soft_drop.as_slice(), KeyAction::Game(Command::SoftDrop)),
            (keys.hard_drop.as_slice(), KeyAction::Game(Command::HardDrop)),
            (keys.rotate.as_slice(), KeyAction::Game(Command::Rotate)),
            (keys.start.as_slice(), KeyAction::Game(Command::Start)),
            (keys.pause.as_slice(), KeyAction::Game(Command::Pause)),
            (keys.restart.as_slice(), KeyAction::Game(Command::Restart)),
            (keys.quit.as_slice(), KeyAction::Quit),
        ];

        let mut bindings = Vec::new();
        for (names, action) in groups {
            for name in names {
                match Self::parse_key(name) {
                    Some(code) => bindings.push((code, action)),
                    None => tracing::warn!("Ignoring unknown key name {:?}", name),
                }
            }
        }
        Self { bindings }
    }

    /// Look up the action for a key press
    pub fn action(&self, key: KeyEvent) -> Option<KeyAction> {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(KeyAction::Quit);
        }

        let code = normalize_key(key.code);
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == code)
            .map(|(_, action)| *action)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Normalize key codes for consistent handling
fn normalize_key(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
