// Turn driver: game setup, move commit, undo stack
//
// Owns the board and the chip registry. A move must fully commit here
// (chip relocation plus occupancy update, then the turn passes) before
// legality checks or the bot may run again; that strict alternation is what
// lets the rest of the core stay lock-free and synchronous.

use log::warn;
use rand::prelude::*;

use crate::board::{check_winner, Board, Chip, BOARD_HEIGHT, BOARD_WIDTH, CHIPS_PER_TEAM};
use crate::config::Config;
use crate::types::{Coord, Move, Team};

/// A running game: board, chips, whose turn it is, and the undo history
pub struct Game {
    board: Board,
    chips: Vec<Chip>,
    current_player: Team,
    undo_stack: Vec<Move>,
    undo_limit: Option<usize>,
}

impl Game {
    /// Sets up a new game according to the configuration: starting team,
    /// chip layout, chip set, and undo depth.
    pub fn new(config: &Config) -> Result<Game, String> {
        let mut board = Board::new();
        let chips = match config.game.chip_layout.as_str() {
            "standard" => Self::standard_layout(&mut board, &config.game.chip_set)?,
            "random" => Self::random_layout(&mut board, &config.game.chip_set)?,
            other => {
                warn!("Unknown chip_layout '{}', using standard", other);
                Self::standard_layout(&mut board, &config.game.chip_set)?
            }
        };
        Ok(Game {
            board,
            chips,
            current_player: config.game.resolve_starting_team(),
            undo_stack: Vec::new(),
            undo_limit: config.game.max_undo_depth(),
        })
    }

    /// Opening diagonals: dark chips on (i,i), light chips on (i,i+1)
    fn standard_layout(board: &mut Board, chip_set: &str) -> Result<Vec<Chip>, String> {
        let mut chips = Vec::with_capacity(CHIPS_PER_TEAM * 2);
        for i in 0..CHIPS_PER_TEAM as i32 {
            let power = Self::is_power_chip(chip_set, i);
            chips.push(board.spawn(Team::Dark, power, Coord::new(i, i))?);
            chips.push(board.spawn(Team::Light, power, Coord::new(i, i + 1))?);
        }
        Ok(chips)
    }

    /// Scatters both teams' chips over unoccupied neutral cells
    fn random_layout(board: &mut Board, chip_set: &str) -> Result<Vec<Chip>, String> {
        let mut rng = rand::rng();
        let mut chips = Vec::with_capacity(CHIPS_PER_TEAM * 2);
        for i in 0..CHIPS_PER_TEAM as i32 {
            let power = Self::is_power_chip(chip_set, i);
            for &team in &[Team::Dark, Team::Light] {
                let cell = Self::random_neutral_cell(board, &mut rng);
                chips.push(board.spawn(team, power, cell)?);
            }
        }
        Ok(chips)
    }

    /// Draws an unoccupied neutral cell. Terminates quickly in practice:
    /// 72 of the 90 cells are neutral and at most 18 are ever taken.
    fn random_neutral_cell(board: &Board, rng: &mut impl Rng) -> Coord {
        loop {
            let cell = Coord::new(
                rng.random_range(0..BOARD_WIDTH),
                rng.random_range(0..BOARD_HEIGHT),
            );
            if !board.is_occupied(cell) && Board::home_color(cell).is_none() {
                return cell;
            }
        }
    }

    fn is_power_chip(chip_set: &str, index: i32) -> bool {
        match chip_set {
            "power" => true,
            "regular" => false,
            // standard set: the center pair are power chips
            _ => index == 4,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    pub fn current_player(&self) -> Team {
        self.current_player
    }

    pub fn undo_stack_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Finds the chip sitting on a cell, if any
    pub fn chip_at(&self, cell: Coord) -> Option<usize> {
        self.chips.iter().position(|c| c.pos() == cell)
    }

    /// Legal destinations for the chip at `source`; empty when the cell is
    /// vacant. Used by the selection layer to highlight moves.
    pub fn legal_destinations_from(&self, source: Coord) -> Vec<Coord> {
        match self.chip_at(source) {
            Some(idx) => self.board.legal_destinations(&self.chips[idx]),
            None => Vec::new(),
        }
    }

    /// Commits a move: relocates the chip at the move's source, records the
    /// move for undo, and passes the turn. Callers are expected to take the
    /// move from `legal_destinations_from` or from the bot.
    pub fn commit_move(&mut self, mv: Move) -> Result<(), String> {
        let idx = self.chip_at(mv.source).ok_or_else(|| {
            format!("no chip on source cell ({}, {})", mv.source.x, mv.source.y)
        })?;
        if !Board::in_bounds(mv.destination) || self.board.is_occupied(mv.destination) {
            return Err(format!(
                "destination cell ({}, {}) is not available",
                mv.destination.x, mv.destination.y
            ));
        }
        self.board.relocate(&mut self.chips[idx], mv.destination);
        self.undo_stack.push(mv);
        self.trim_undo_stack();
        self.current_player = self.current_player.opponent();
        Ok(())
    }

    /// Drops the oldest moves once the stack exceeds the configured depth
    fn trim_undo_stack(&mut self) {
        if let Some(limit) = self.undo_limit {
            while self.undo_stack.len() > limit {
                self.undo_stack.remove(0);
            }
        }
    }

    /// Reverts the most recent move and gives the turn back. Returns the
    /// undone move, or `None` when there is nothing to undo. When the
    /// opponent is automated the caller undoes twice and calls
    /// `Bot::decrement` so a full round is rewound.
    pub fn undo_last_move(&mut self) -> Option<Move> {
        let mv = self.undo_stack.pop()?;
        // LIFO: the chip moved last still sits on the move's destination,
        // since every commit pushes and only undo pops
        let idx = self.chip_at(mv.destination);
        debug_assert!(idx.is_some(), "undo stack out of sync with the board");
        let idx = idx?;
        // walk the chip back unchecked; the reverse step may leave a home
        // region
        self.board.relocate(&mut self.chips[idx], mv.source);
        self.current_player = self.current_player.opponent();
        Some(mv)
    }

    /// Terminal-state query; the driver stops the turn loop on `Some`
    pub fn winner(&self) -> Option<Team> {
        check_winner(&self.chips)
    }
}
