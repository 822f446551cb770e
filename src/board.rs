// Board model and move legality engine
//
// The board is a 9x10 grid of cells. Each cell has a fixed home
// classification (light corner, dark corner, or neutral) and a mutable
// occupancy flag. Chips reference their cell by coordinate; occupancy is
// only ever updated through the relocation primitives so the two stay
// consistent.

use crate::types::{Coord, Direction, Team};

/// Number of columns on the playable grid
pub const BOARD_WIDTH: i32 = 9;

/// Number of rows on the playable grid
pub const BOARD_HEIGHT: i32 = 10;

/// Each home region is a 3x3 corner block
pub const HOME_SIZE: i32 = 3;

/// Chips fielded per team; also the number of cells in a home region
pub const CHIPS_PER_TEAM: usize = 9;

/// The light team's home corner cell, used for distance heuristics
pub const LIGHT_CORNER: Coord = Coord { x: 8, y: 0 };

/// The dark team's home corner cell, used for distance heuristics
pub const DARK_CORNER: Coord = Coord { x: 0, y: 9 };

/// Returns the corner cell of a team's home region
pub fn home_corner(team: Team) -> Coord {
    match team {
        Team::Light => LIGHT_CORNER,
        Team::Dark => DARK_CORNER,
    }
}

/// Returns the cells of a team's home region, column-major
/// (x ascending, then y ascending)
pub fn home_cells(team: Team) -> Vec<Coord> {
    let (xs, ys) = match team {
        Team::Light => (6..=8, 0..=2),
        Team::Dark => (0..=2, 7..=9),
    };
    xs.flat_map(|x| ys.clone().map(move |y| Coord::new(x, y)))
        .collect()
}

/// A movable piece, bound to exactly one cell at a time
#[derive(Debug, Clone)]
pub struct Chip {
    team: Team,
    power: bool,
    pos: Coord,
}

impl Chip {
    pub fn team(&self) -> Team {
        self.team
    }

    /// True for power chips (eight directions, any distance);
    /// false for regular chips (four directions, maximal slide)
    pub fn is_power(&self) -> bool {
        self.power
    }

    /// The cell this chip currently sits on
    pub fn pos(&self) -> Coord {
        self.pos
    }
}

/// Occupancy state of the grid. Home classification is a pure function of
/// coordinates; only occupancy mutates.
#[derive(Debug, Clone, Default)]
pub struct Board {
    occupied: [[bool; BOARD_HEIGHT as usize]; BOARD_WIDTH as usize],
}

impl Board {
    pub fn new() -> Board {
        Board::default()
    }

    /// Checks if a coordinate lies on the playable grid
    pub fn in_bounds(coord: Coord) -> bool {
        coord.x >= 0 && coord.x < BOARD_WIDTH && coord.y >= 0 && coord.y < BOARD_HEIGHT
    }

    /// The fixed home classification of a cell; `None` is neutral territory
    pub fn home_color(coord: Coord) -> Option<Team> {
        if coord.x > 5 && coord.y < 3 {
            Some(Team::Light)
        } else if coord.x < 3 && coord.y > 6 {
            Some(Team::Dark)
        } else {
            None
        }
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.occupied[coord.x as usize][coord.y as usize]
    }

    /// Creates a chip on the given cell, marking it occupied.
    /// Fails if the cell is off the grid or already taken.
    pub fn spawn(&mut self, team: Team, power: bool, at: Coord) -> Result<Chip, String> {
        if !Self::in_bounds(at) {
            return Err(format!("cell ({}, {}) is off the board", at.x, at.y));
        }
        if self.is_occupied(at) {
            return Err(format!("cell ({}, {}) is already occupied", at.x, at.y));
        }
        self.occupied[at.x as usize][at.y as usize] = true;
        Ok(Chip {
            team,
            power,
            pos: at,
        })
    }

    /// Moves a chip to a new cell, atomically vacating its old cell and
    /// occupying the new one. Performs no legality check: undo needs to
    /// retrace moves that the forward rules would reject.
    pub fn relocate(&mut self, chip: &mut Chip, dest: Coord) {
        self.occupied[chip.pos.x as usize][chip.pos.y as usize] = false;
        self.occupied[dest.x as usize][dest.y as usize] = true;
        chip.pos = dest;
    }

    /// Checks if placing the given chip on `dest` is permitted by the rules.
    /// A destination is legal when it is a free cell and either belongs to
    /// the chip's own home region, or is neutral while the chip has never
    /// left neutral territory. Chips that entered a home region may not
    /// return to neutral cells, and no chip may enter the opposing home.
    pub fn is_legal_destination(&self, chip: &Chip, dest: Coord) -> bool {
        if !Self::in_bounds(dest) || self.is_occupied(dest) {
            return false;
        }
        let from = Self::home_color(chip.pos);
        let to = Self::home_color(dest);
        match (from, to) {
            (Some(_), None) => false,
            (_, Some(owner)) => owner == chip.team,
            (None, None) => true,
        }
    }

    /// Enumerates every cell the chip may move to. Power chips may stop on
    /// any legal cell along the eight compass rays; regular chips slide to
    /// the single furthest legal cell in each orthogonal direction.
    pub fn legal_destinations(&self, chip: &Chip) -> Vec<Coord> {
        let mut destinations = Vec::new();
        if chip.power {
            for dir in Direction::orthogonal().iter() {
                self.collect_ray(chip, *dir, &mut destinations);
            }
            for dir in Direction::diagonal().iter() {
                self.collect_ray(chip, *dir, &mut destinations);
            }
        } else {
            for dir in Direction::orthogonal().iter() {
                if let Some(dest) = self.slide_destination(chip, *dir) {
                    destinations.push(dest);
                }
            }
        }
        destinations
    }

    /// Adds every legal cell along a ray, stopping at the first illegal one
    fn collect_ray(&self, chip: &Chip, dir: Direction, out: &mut Vec<Coord>) {
        let mut next = dir.apply(&chip.pos);
        while self.is_legal_destination(chip, next) {
            out.push(next);
            next = dir.apply(&next);
        }
    }

    /// Finds the furthest legal cell along a ray, if any
    fn slide_destination(&self, chip: &Chip, dir: Direction) -> Option<Coord> {
        let mut last = None;
        let mut next = dir.apply(&chip.pos);
        while self.is_legal_destination(chip, next) {
            last = Some(next);
            next = dir.apply(&next);
        }
        last
    }
}

/// Scans chip placements for a terminal state: a team wins once all of its
/// chips stand on cells of its own home color.
pub fn check_winner(chips: &[Chip]) -> Option<Team> {
    for &team in &[Team::Light, Team::Dark] {
        let home_count = chips
            .iter()
            .filter(|c| c.team == team && Board::home_color(c.pos) == Some(team))
            .count();
        if home_count == CHIPS_PER_TEAM {
            return Some(team);
        }
    }
    None
}
