// JSONL game recorder
//
// Appends one JSON object per line to a log file: a setup entry when the
// game starts, then one move entry per committed turn. The replay engine
// consumes the same format.

use chrono::Utc;
use log::error;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::Write;

use crate::board::Chip;
use crate::types::{Coord, Move, Team};

/// Initial placement of a single chip, captured in the setup entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChipPlacement {
    pub team: Team,
    pub power: bool,
    pub pos: Coord,
}

/// One line of the game log
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "entry", rename_all = "snake_case")]
pub enum LogEntry {
    Setup {
        chips: Vec<ChipPlacement>,
        starting_team: Team,
        timestamp: String,
    },
    Move {
        turn: i32,
        team: Team,
        source: Coord,
        destination: Coord,
        timestamp: String,
    },
}

/// Writes game log entries as they happen. A recorder that fails to open
/// its file degrades to a disabled recorder rather than aborting the game.
pub struct GameRecorder {
    file: Option<File>,
}

impl GameRecorder {
    /// Opens the log file for appending. When `enabled` is false, or the
    /// file cannot be opened, the recorder silently drops all entries.
    pub fn new(enabled: bool, path: &str) -> GameRecorder {
        if !enabled {
            return Self::disabled();
        }
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => GameRecorder { file: Some(file) },
            Err(e) => {
                error!("Failed to open game log '{}': {}", path, e);
                Self::disabled()
            }
        }
    }

    /// A recorder that discards everything
    pub fn disabled() -> GameRecorder {
        GameRecorder { file: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Records the initial placement and who moves first
    pub fn log_setup(&mut self, chips: &[Chip], starting_team: Team) {
        let entry = LogEntry::Setup {
            chips: chips
                .iter()
                .map(|c| ChipPlacement {
                    team: c.team(),
                    power: c.is_power(),
                    pos: c.pos(),
                })
                .collect(),
            starting_team,
            timestamp: Utc::now().to_rfc3339(),
        };
        self.write_entry(&entry);
    }

    /// Records one committed move
    pub fn log_move(&mut self, turn: i32, team: Team, mv: &Move) {
        let entry = LogEntry::Move {
            turn,
            team,
            source: mv.source,
            destination: mv.destination,
            timestamp: Utc::now().to_rfc3339(),
        };
        self.write_entry(&entry);
    }

    fn write_entry(&mut self, entry: &LogEntry) {
        let file = match self.file.as_mut() {
            Some(f) => f,
            None => return,
        };
        match serde_json::to_string(entry) {
            Ok(line) => {
                if let Err(e) = writeln!(file, "{}", line) {
                    error!("Failed to write game log entry: {}", e);
                } else if let Err(e) = file.flush() {
                    error!("Failed to flush game log: {}", e);
                }
            }
            Err(e) => error!("Failed to serialize game log entry: {}", e),
        }
    }
}
