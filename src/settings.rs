//! Settings persistence using TOML
//!
//! Stores settings in ~/.config/swipetris/settings.toml (or platform equivalent)

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use swipetris::gesture::{DEFAULT_TAP_THRESHOLD, GestureMapper, Point};
use swipetris::scheduler::DEFAULT_TICK;

/// Frontend settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Keybindings
    pub keys: KeyBindings,
    /// Visual settings
    pub visual: VisualSettings,
    /// Gameplay settings
    pub gameplay: GameplaySettings,
    /// Mouse-drag gesture settings
    pub gesture: GestureSettings,
}

/// Key bindings (stored as strings for easy editing)
/// Each command can have one or more keys bound to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    #[serde(with = "key_list")]
    pub move_left: Vec<String>,
    #[serde(with = "key_list")]
    pub move_right: Vec<String>,
    #[serde(with = "key_list")]
    pub soft_drop: Vec<String>,
    #[serde(with = "key_list")]
    pub hard_drop: Vec<String>,
    #[serde(with = "key_list")]
    pub rotate: Vec<String>,
    #[serde(with = "key_list")]
    pub start: Vec<String>,
    #[serde(with = "key_list")]
    pub pause: Vec<String>,
    #[serde(with = "key_list")]
    pub restart: Vec<String>,
    #[serde(with = "key_list")]
    pub quit: Vec<String>,
}

/// A key list is written as a bare string when it holds one key
/// and as an array otherwise; both forms are accepted on input.
mod key_list {
    use serde::de::{self, SeqAccess, Visitor};
    use serde::ser::SerializeSeq;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    struct KeyListVisitor;

    impl<'de> Visitor<'de> for KeyListVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a key name or a list of key names")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut keys = Vec::with_capacity(seq.size_hint().unwrap_or(2));
            while let Some(key) = seq.next_element::<String>()? {
                keys.push(key);
            }
            Ok(keys)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        deserializer.deserialize_any(KeyListVisitor)
    }

    pub fn serialize<S: Serializer>(keys: &Vec<String>, serializer: S) -> Result<S::Ok, S::Error> {
        if let [only] = keys.as_slice() {
            return serializer.serialize_str(only);
        }
        let mut seq = serializer.serialize_seq(Some(keys.len()))?;
        for key in keys {
            seq.serialize_element(key)?;
        }
        seq.end()
    }
}

/// Visual settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualSettings {
    /// Ghost piece visibility
    pub show_ghost: bool,
    /// Block style: "solid", "bracket", "round"
    pub block_style: String,
}

/// Gameplay settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplaySettings {
    /// Scheduler cadence in milliseconds
    pub tick_ms: u64,
    /// Fixed seed for a reproducible piece sequence
    pub seed: Option<u64>,
}

/// Mouse drags are measured in gesture units; a terminal cell is not square,
/// so each axis gets its own scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Drags shorter than this on both axes are taps
    pub threshold: f32,
    /// Gesture units per terminal column
    pub cell_width: f32,
    /// Gesture units per terminal row
    pub cell_height: f32,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: vec!["Left".to_string(), "a".to_string()],
            move_right: vec!["Right".to_string(), "d".to_string()],
            soft_drop: vec!["Down".to_string(), "s".to_string()],
            hard_drop: vec!["Space".to_string()],
            rotate: vec!["Up".to_string(), "w".to_string()],
            start: vec!["Enter".to_string()],
            pause: vec!["p".to_string(), "Esc".to_string()],
            restart: vec!["r".to_string()],
            quit: vec!["q".to_string()],
        }
    }
}

impl Default for VisualSettings {
    fn default() -> Self {
        Self {
            show_ghost: true,
            block_style: "solid".to_string(),
        }
    }
}

impl Default for GameplaySettings {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK.as_millis() as u64,
            seed: None,
        }
    }
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_TAP_THRESHOLD,
            cell_width: 8.0,
            cell_height: 16.0,
        }
    }
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "swipetris", "swipetris")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.toml"))
    }

    /// Load settings from file, or create default
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) => {
                tracing::debug!("No settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse settings text, falling back to defaults when it is malformed
    pub fn parse(contents: &str) -> Self {
        match toml::from_str(contents) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Malformed settings, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), String> {
        let Some(dir) = Self::config_dir() else {
            return Err("Could not determine config directory".to_string());
        };

        let Some(path) = Self::settings_path() else {
            return Err("Could not determine settings path".to_string());
        };

        // Create directory if needed
        fs::create_dir_all(&dir).map_err(|e| format!("Failed to create config dir: {}", e))?;

        // Serialize and write
        let contents =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize: {}", e))?;

        fs::write(&path, contents).map_err(|e| format!("Failed to write settings: {}", e))?;

        Ok(())
    }
}

impl VisualSettings {
    /// Get the block characters based on style
    pub fn block_chars(&self) -> (&'static str, &'static str) {
        match self.block_style.as_str() {
            "bracket" => ("[]", ".."),
            "round" => ("()", ".."),
            _ => ("██", "░░"), // "solid" or default
        }
    }
}

impl GameplaySettings {
    /// Scheduler cadence, never zero
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

impl GestureSettings {
    pub fn mapper(&self) -> GestureMapper {
        GestureMapper::new(self.threshold)
    }

    /// Convert a terminal cell position into gesture units
    pub fn point(&self, column: u16, row: u16) -> Point {
        Point::new(
            column as f32 * self.cell_width,
            row as f32 * self.cell_height,
        )
    }
}
