use std::path::Path;

use crossterm::style::Stylize;

use crate::error::ConfigError;
use crate::game::Player;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub display: DisplayConfig,
}

/// Turn order and replay prompt answers.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player who moves first in every game
    pub first_player: Player,
    /// Answers to the replay prompt that start a new game (case-insensitive)
    pub replay_answers: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            first_player: Player::Red,
            replay_answers: vec!["y".into(), "yes".into(), "yeah".into()],
        }
    }
}

impl GameConfig {
    /// Whether a line typed at the replay prompt means "play again"
    pub fn wants_replay(&self, answer: &str) -> bool {
        let answer = answer.trim().to_lowercase();
        self.replay_answers
            .iter()
            .any(|accepted| accepted.to_lowercase() == answer)
    }
}

/// Markers used when drawing the rack as text.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Wrap player markers in ANSI color codes
    pub color: bool,
    pub empty_marker: String,
    pub red_marker: String,
    pub yellow_marker: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            color: true,
            empty_marker: " ".into(),
            red_marker: "\u{278A}".into(),
            yellow_marker: "\u{278B}".into(),
        }
    }
}

impl DisplayConfig {
    /// Text for a slot owned by `owner`
    pub fn marker(&self, owner: Option<Player>) -> String {
        match (owner, self.color) {
            (None, _) => self.empty_marker.clone(),
            (Some(Player::Red), false) => self.red_marker.clone(),
            (Some(Player::Yellow), false) => self.yellow_marker.clone(),
            (Some(Player::Red), true) => self.red_marker.as_str().red().to_string(),
            (Some(Player::Yellow), true) => self.yellow_marker.as_str().dark_yellow().to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let markers = [
            ("display.empty_marker", &self.display.empty_marker),
            ("display.red_marker", &self.display.red_marker),
            ("display.yellow_marker", &self.display.yellow_marker),
        ];
        // Cells are three columns wide; a wider marker shears the grid
        for (name, marker) in markers {
            if marker.chars().count() != 1 {
                return Err(ConfigError::Validation(format!(
                    "{name} must be exactly one character"
                )));
            }
        }
        if self.display.red_marker == self.display.yellow_marker {
            return Err(ConfigError::Validation(
                "display.red_marker and display.yellow_marker must differ".into(),
            ));
        }

        if self.game.replay_answers.is_empty() {
            return Err(ConfigError::Validation(
                "game.replay_answers must not be empty".into(),
            ));
        }
        if self.game.replay_answers.iter().any(|a| a.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "game.replay_answers must not contain blank answers".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
