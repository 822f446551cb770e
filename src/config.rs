// Configuration module for reading Outwit.toml
//
// Rules-adjacent preferences (starting team, chip set and layout, undo
// depth) arrive here as opaque inputs; nothing in this module is consulted
// by the legality engine or the bot heuristics themselves.

use rand::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::types::Team;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub recorder: RecorderConfig,
}

/// Game setup and driver parameters
#[derive(Debug, Deserialize, Clone)]
pub struct GameConfig {
    /// "light", "dark", or "random"
    pub starting_team: String,
    /// "standard" (fixed diagonals) or "random" (scattered on neutral cells)
    pub chip_layout: String,
    /// "standard" (one power chip per team), "power", or "regular"
    pub chip_set: String,
    /// "none" for an unbounded undo stack, otherwise a decimal depth
    pub undo_limit: String,
    /// Safety cap for the bot-vs-bot driver
    pub max_turns: u32,
}

/// Game record (JSONL) configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RecorderConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl GameConfig {
    /// Resolves the configured starting team, flipping a coin for "random".
    /// Unrecognized values fall back to a coin flip as well.
    pub fn resolve_starting_team(&self) -> Team {
        match self.starting_team.as_str() {
            "light" => Team::Light,
            "dark" => Team::Dark,
            _ => {
                if rand::rng().random_bool(0.5) {
                    Team::Light
                } else {
                    Team::Dark
                }
            }
        }
    }

    /// Parses the undo depth; `None` means unbounded
    pub fn max_undo_depth(&self) -> Option<usize> {
        if self.undo_limit == "none" {
            None
        } else {
            self.undo_limit.parse::<usize>().ok()
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Outwit.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Outwit.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Outwit.toml
    pub fn default_hardcoded() -> Self {
        Config {
            game: GameConfig {
                starting_team: "random".to_string(),
                chip_layout: "standard".to_string(),
                chip_set: "standard".to_string(),
                undo_limit: "none".to_string(),
                max_turns: 500,
            },
            recorder: RecorderConfig {
                enabled: false,
                log_file_path: "outwit_games.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            eprintln!(
                "Warning: Could not load Outwit.toml ({}), using hardcoded defaults",
                e
            );
            Self::default_hardcoded()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_can_be_created() {
        let config = Config::default_hardcoded();
        assert_eq!(config.game.starting_team, "random");
        assert_eq!(config.game.max_turns, 500);
        assert!(!config.recorder.enabled);
    }

    #[test]
    fn test_outwit_toml_can_be_parsed() {
        // This test ensures Outwit.toml is valid and can be parsed
        let result = Config::from_file("Outwit.toml");
        assert!(
            result.is_ok(),
            "Failed to parse Outwit.toml: {:?}",
            result.err()
        );
    }

    #[test]
    fn test_all_config_values_match_hardcoded_defaults() {
        let file_config = Config::from_file("Outwit.toml").expect("Outwit.toml should be parseable");
        let hardcoded_config = Config::default_hardcoded();

        assert_eq!(
            file_config.game.starting_team,
            hardcoded_config.game.starting_team
        );
        assert_eq!(file_config.game.chip_layout, hardcoded_config.game.chip_layout);
        assert_eq!(file_config.game.chip_set, hardcoded_config.game.chip_set);
        assert_eq!(file_config.game.undo_limit, hardcoded_config.game.undo_limit);
        assert_eq!(file_config.game.max_turns, hardcoded_config.game.max_turns);
        assert_eq!(
            file_config.recorder.enabled,
            hardcoded_config.recorder.enabled
        );
        assert_eq!(
            file_config.recorder.log_file_path,
            hardcoded_config.recorder.log_file_path
        );
    }

    #[test]
    fn test_max_undo_depth_parsing() {
        let mut config = Config::default_hardcoded();
        assert_eq!(config.game.max_undo_depth(), None);
        config.game.undo_limit = "5".to_string();
        assert_eq!(config.game.max_undo_depth(), Some(5));
        config.game.undo_limit = "not-a-number".to_string();
        assert_eq!(config.game.max_undo_depth(), None);
    }

    #[test]
    fn test_resolve_starting_team() {
        let mut config = Config::default_hardcoded();
        config.game.starting_team = "light".to_string();
        assert_eq!(config.game.resolve_starting_team(), Team::Light);
        config.game.starting_team = "dark".to_string();
        assert_eq!(config.game.resolve_starting_team(), Team::Dark);
        config.game.starting_team = "random".to_string();
        // just has to resolve to one of the two sides
        let team = config.game.resolve_starting_team();
        assert!(team == Team::Light || team == Team::Dark);
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        // Test with a non-existent file
        let result = Config::from_file("nonexistent.toml");
        assert!(result.is_err());
    }
}
