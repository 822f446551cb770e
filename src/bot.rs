// Computer player for Outwit
//
// The bot is a single-ply tiered heuristic, not a search. Each turn it
// enumerates every legal move for its own chips, scores them, and picks one
// through a fixed precedence of tiers: opening randomness, the trap-square
// override, the endgame fill move, then the best forward-progressing
// candidate.

use log::{debug, info};
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::board::{home_cells, home_corner, Board, Chip};
use crate::types::{Coord, Move, Team};

/// Squares adjacent to the light home entrance that deadlock the fill if a
/// chip is left standing on them; a move off either is always taken.
pub const TRAP_SQUARES: [Coord; 2] = [Coord { x: 6, y: 0 }, Coord { x: 8, y: 2 }];

/// The first three turns are played randomly onto neutral cells
pub const OPENING_RANDOM_TURNS: i32 = 4;

/// Endgame fill kicks in once more than this many home cells are occupied
pub const ENDGAME_FILL_THRESHOLD: usize = 7;

/// Extra weight for moves that leave neutral territory intact
const NEUTRAL_SOURCE_WEIGHT: i32 = 2;

/// Base weight of a regular chip's move; power-chip moves score zero base
const REGULAR_CHIP_WEIGHT: i32 = 1;

/// Rows between the home corner's row and the home edge row
const HOME_EDGE_OFFSET: i32 = crate::board::HOME_SIZE - 1;

/// Heuristic move selector for one team
pub struct Bot {
    team: Team,
    chip_indices: Vec<usize>,
    turns_played: i32,
    rng: StdRng,
}

impl Bot {
    /// Creates a bot for the given team. Only that team's chips (by index
    /// into the shared registry) are considered from then on.
    pub fn new(team: Team, chips: &[Chip]) -> Bot {
        Bot::with_rng(team, chips, StdRng::from_os_rng())
    }

    /// Creates a bot with a deterministic RNG, for reproducible games
    pub fn seeded(team: Team, chips: &[Chip], seed: u64) -> Bot {
        Bot::with_rng(team, chips, StdRng::seed_from_u64(seed))
    }

    fn with_rng(team: Team, chips: &[Chip], rng: StdRng) -> Bot {
        let chip_indices = chips
            .iter()
            .enumerate()
            .filter(|(_, c)| c.team() == team)
            .map(|(i, _)| i)
            .collect();
        Bot {
            team,
            chip_indices,
            turns_played: 0,
            rng,
        }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    /// Turns chosen so far, counting each `choose_move` call
    pub fn turns_played(&self) -> i32 {
        self.turns_played
    }

    /// Rolls the turn counter back by one; called when a move is undone so
    /// the opening-randomness phase tracks actual turns taken.
    pub fn decrement(&mut self) {
        self.turns_played -= 1;
    }

    /// Selects one move for this turn, or `None` if no chip of this team
    /// has any legal move. Never mutates the board; committing the move is
    /// the caller's responsibility.
    pub fn choose_move(&mut self, board: &Board, chips: &[Chip]) -> Option<Move> {
        self.turns_played += 1;
        let corner = home_corner(self.team);

        let mut all_moves = Vec::new();
        for &i in &self.chip_indices {
            let chip = &chips[i];
            let base_weight = if chip.is_power() {
                0
            } else {
                REGULAR_CHIP_WEIGHT
            };
            let cell_weight = if Board::home_color(chip.pos()).is_none() {
                NEUTRAL_SOURCE_WEIGHT
            } else {
                0
            };
            for dest in board.legal_destinations(chip) {
                let mut mv = Move::new(chip.pos(), dest);
                mv.weight = base_weight + cell_weight;
                all_moves.push(mv);
            }
        }

        let mut candidates = Vec::new();
        let mut trap_move: Option<Move> = None;
        for mv in &all_moves {
            let dest_distance = mv.destination.manhattan_distance(corner);
            let source_distance = mv.source.manhattan_distance(corner);
            // only forward-progressing moves qualify as candidates
            if dest_distance < source_distance {
                let mut candidate = mv.clone();
                candidate.distance = dest_distance;
                candidates.push(candidate);
            }
            if TRAP_SQUARES.contains(&mv.source) {
                debug!(
                    "{}: forced move off trap square ({}, {})",
                    self.team.as_str(),
                    mv.source.x,
                    mv.source.y
                );
                trap_move = Some(mv.clone());
            }
        }

        let fill_move = self.endgame_fill_move(board, chips);

        if self.turns_played < OPENING_RANDOM_TURNS || candidates.is_empty() {
            return self.random_opening_move(&all_moves);
        }
        if let Some(mv) = trap_move {
            return Some(mv);
        }
        if let Some(mv) = fill_move {
            info!(
                "{}: endgame fill move ({}, {}) -> ({}, {})",
                self.team.as_str(),
                mv.source.x,
                mv.source.y,
                mv.destination.x,
                mv.destination.y
            );
            return Some(mv);
        }
        candidates.sort_by(|a, b| a.heuristic_order(b));
        candidates.into_iter().next()
    }

    /// Picks a random move with a neutral destination, falling back to any
    /// legal move when every destination is a home cell. The draw is a
    /// single bounded pick, never a resampling loop.
    fn random_opening_move(&mut self, all_moves: &[Move]) -> Option<Move> {
        let neutral: Vec<&Move> = all_moves
            .iter()
            .filter(|mv| Board::home_color(mv.destination).is_none())
            .collect();
        if let Some(mv) = neutral.choose(&mut self.rng) {
            return Some((*mv).clone());
        }
        all_moves.choose(&mut self.rng).cloned()
    }

    /// Computes the fill-directed move once the home region is nearly full.
    /// The last-seen own chip still standing on a non-home cell is the
    /// reference; among that set's legal moves, the one making the most
    /// progress in the direction required by the remaining vacancy wins,
    /// with later matches overriding earlier ones.
    fn endgame_fill_move(&self, board: &Board, chips: &[Chip]) -> Option<Move> {
        let home = home_cells(self.team);
        let occupied = home.iter().filter(|&&c| board.is_occupied(c)).count();
        if occupied <= ENDGAME_FILL_THRESHOLD {
            return None;
        }

        let mut field_moves = Vec::new();
        let mut reference: Option<&Chip> = None;
        for &i in &self.chip_indices {
            let chip = &chips[i];
            if Board::home_color(chip.pos()) != Some(self.team) {
                for dest in board.legal_destinations(chip) {
                    field_moves.push(Move::new(chip.pos(), dest));
                }
                reference = Some(chip);
            }
        }
        let last = reference?.pos();

        // Orientation relative to the home corner: `in_x` points toward the
        // corner's column, `out_y` points from the corner's row toward
        // neutral territory. For a light bot these are plain right/down
        // comparisons; a dark bot mirrors them.
        let corner = home_corner(self.team);
        let (in_x, out_y) = match self.team {
            Team::Light => (1, 1),
            Team::Dark => (-1, -1),
        };
        let edge_row = corner.y + (HOME_EDGE_OFFSET * out_y);

        let mut fill: Option<Move> = None;
        for &empty in home.iter().filter(|&&c| !board.is_occupied(c)) {
            if empty.y == edge_row {
                if (empty.y - last.y) * out_y > 0 {
                    // reference sits corner-side of the vacancy: push past it
                    for mv in &field_moves {
                        if (mv.destination.y - empty.y) * out_y > 0 {
                            fill = Some(mv.clone());
                        }
                    }
                } else {
                    for mv in &field_moves {
                        if (mv.destination.x - empty.x) * in_x >= 0 {
                            fill = Some(mv.clone());
                        }
                    }
                }
                if last.x == empty.x {
                    // column-aligned: demand strictly outward progress there
                    for mv in &field_moves {
                        if (mv.destination.y - last.y) * out_y > 0 && mv.destination.x == last.x {
                            fill = Some(mv.clone());
                        }
                    }
                }
            } else {
                if (last.x - empty.x) * in_x > 0 {
                    for mv in &field_moves {
                        if (mv.destination.x - empty.x) * in_x < 0 {
                            fill = Some(mv.clone());
                        }
                    }
                } else {
                    for mv in &field_moves {
                        if (mv.destination.y - empty.y) * out_y <= 0 {
                            fill = Some(mv.clone());
                        }
                    }
                }
                if last.y == empty.y {
                    for mv in &field_moves {
                        if (mv.destination.x - last.x) * in_x > 0 && mv.destination.y == last.y {
                            fill = Some(mv.clone());
                        }
                    }
                }
            }
        }
        fill
    }
}
