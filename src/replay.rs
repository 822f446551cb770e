// Replay engine for recorded games
//
// Reads a JSONL game log, rebuilds the board from the setup entry, and
// re-executes every move while re-checking its legality against the rules
// engine. Useful for auditing the bot's play after the fact.

use std::fs;
use std::path::Path;

use crate::board::{check_winner, Board, Chip};
use crate::recorder::LogEntry;
use crate::types::{Coord, Team};

/// One re-executed move with its legality verdict
#[derive(Debug, Clone)]
pub struct ReplayedTurn {
    pub turn: i32,
    pub team: Team,
    pub source: Coord,
    pub destination: Coord,
    pub legal: bool,
}

/// Aggregate statistics over a replayed game
#[derive(Debug)]
pub struct ReplayStats {
    pub total_turns: usize,
    pub legal: usize,
    pub illegal: usize,
    pub legality_rate: f64,
    pub winner: Option<Team>,
}

/// Replays recorded games move by move
pub struct ReplayEngine {
    verbose: bool,
}

impl ReplayEngine {
    pub fn new(verbose: bool) -> Self {
        ReplayEngine { verbose }
    }

    /// Loads and parses a JSONL game log file
    pub fn load_log_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<LogEntry>, String> {
        let contents =
            fs::read_to_string(path.as_ref()).map_err(|e| format!("Failed to read log file: {}", e))?;

        let mut entries = Vec::new();
        for (line_num, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let entry: LogEntry = serde_json::from_str(line)
                .map_err(|e| format!("Failed to parse line {}: {}", line_num + 1, e))?;
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Re-executes every move in the log against a fresh board. The game
    /// state advances even through moves the rules reject, so a single bad
    /// entry does not desynchronize the rest of the replay.
    pub fn replay_all(&self, entries: &[LogEntry]) -> Result<(Vec<ReplayedTurn>, Vec<Chip>), String> {
        let mut board = Board::new();
        let mut chips: Vec<Chip> = Vec::new();
        let mut turns = Vec::new();
        let mut saw_setup = false;

        for entry in entries {
            match entry {
                LogEntry::Setup {
                    chips: placements, ..
                } => {
                    if saw_setup {
                        return Err("Log contains more than one setup entry".to_string());
                    }
                    saw_setup = true;
                    for p in placements {
                        chips.push(board.spawn(p.team, p.power, p.pos)?);
                    }
                    if self.verbose {
                        println!("Setup: {} chips placed", chips.len());
                    }
                }
                LogEntry::Move {
                    turn,
                    team,
                    source,
                    destination,
                    ..
                } => {
                    if !saw_setup {
                        return Err("Log contains a move before the setup entry".to_string());
                    }
                    let idx = chips.iter().position(|c| c.pos() == *source).ok_or_else(|| {
                        format!(
                            "Turn {}: no chip on source cell ({}, {})",
                            turn, source.x, source.y
                        )
                    })?;
                    // log entries come from outside; an off-grid destination
                    // must fail the replay, not the process
                    if !Board::in_bounds(*destination) {
                        return Err(format!(
                            "Turn {}: destination ({}, {}) is off the board",
                            turn, destination.x, destination.y
                        ));
                    }
                    let legal = board
                        .legal_destinations(&chips[idx])
                        .contains(destination);
                    board.relocate(&mut chips[idx], *destination);

                    if self.verbose {
                        println!(
                            "Turn {:3} [{}]: ({}, {}) -> ({}, {}) {}",
                            turn,
                            team.as_str(),
                            source.x,
                            source.y,
                            destination.x,
                            destination.y,
                            if legal { "ok" } else { "ILLEGAL" }
                        );
                    }
                    turns.push(ReplayedTurn {
                        turn: *turn,
                        team: *team,
                        source: *source,
                        destination: *destination,
                        legal,
                    });
                }
            }
        }

        if !saw_setup {
            return Err("Log contains no setup entry".to_string());
        }
        Ok((turns, chips))
    }

    /// Summarizes a replayed game
    pub fn generate_stats(&self, turns: &[ReplayedTurn], chips: &[Chip]) -> ReplayStats {
        let legal = turns.iter().filter(|t| t.legal).count();
        let illegal = turns.len() - legal;
        let legality_rate = if turns.is_empty() {
            100.0
        } else {
            legal as f64 / turns.len() as f64 * 100.0
        };
        ReplayStats {
            total_turns: turns.len(),
            legal,
            illegal,
            legality_rate,
            winner: check_winner(chips),
        }
    }

    /// Prints a human-readable replay report
    pub fn print_report(&self, stats: &ReplayStats) {
        println!("\n═══════════════════════════════════════");
        println!("         GAME REPLAY REPORT");
        println!("═══════════════════════════════════════");
        println!("Total turns:    {}", stats.total_turns);
        println!("Legal moves:    {}", stats.legal);
        println!("Illegal moves:  {}", stats.illegal);
        println!("Legality rate:  {:.1}%", stats.legality_rate);
        match stats.winner {
            Some(team) => println!("Winner:         {}", team.as_str()),
            None => println!("Winner:         none (game unfinished)"),
        }
        println!("═══════════════════════════════════════\n");
    }

    /// Checks that specific turns ended on the expected destinations.
    /// Returns the list of mismatches, empty when everything lines up.
    pub fn validate_expected_moves(
        &self,
        turns: &[ReplayedTurn],
        expected: &[(i32, Coord)],
    ) -> Vec<String> {
        let mut mismatches = Vec::new();
        for (turn_num, dest) in expected {
            match turns.iter().find(|t| t.turn == *turn_num) {
                Some(t) if t.destination == *dest => {}
                Some(t) => mismatches.push(format!(
                    "Turn {}: expected destination ({}, {}), got ({}, {})",
                    turn_num, dest.x, dest.y, t.destination.x, t.destination.y
                )),
                None => mismatches.push(format!("Turn {}: not present in log", turn_num)),
            }
        }
        mismatches
    }
}
