// Core value types for the Outwit rules engine

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sentinel for a move whose heuristic fields have not been computed yet
pub const UNSCORED: i32 = -1;

/// The two playing sides. Cells that belong to neither side are represented
/// as `Option<Team>::None` wherever a home classification is needed.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Light,
    Dark,
}

impl Team {
    /// Returns the other side
    pub fn opponent(&self) -> Team {
        match self {
            Team::Light => Team::Dark,
            Team::Dark => Team::Light,
        }
    }

    /// Converts team to string representation for logs and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Light => "light",
            Team::Dark => "dark",
        }
    }
}

/// 2D coordinate on the board
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Coord {
        Coord { x, y }
    }

    /// Calculates the Manhattan distance to another coordinate
    pub fn manhattan_distance(&self, other: Coord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Represents the eight compass directions a chip can slide in.
/// Rows grow downward, so `Up` decreases `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// The four orthogonal directions every chip may slide in
    pub fn orthogonal() -> [Direction; 4] {
        [
            Direction::Right,
            Direction::Left,
            Direction::Up,
            Direction::Down,
        ]
    }

    /// The four diagonal directions reserved for power chips
    pub fn diagonal() -> [Direction; 4] {
        [
            Direction::UpRight,
            Direction::UpLeft,
            Direction::DownRight,
            Direction::DownLeft,
        ]
    }

    /// Calculates the next coordinate when moving in this direction
    pub fn apply(&self, coord: &Coord) -> Coord {
        let (dx, dy) = self.delta();
        Coord {
            x: coord.x + dx,
            y: coord.y + dy,
        }
    }

    fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (1, -1),
            Direction::DownLeft => (-1, 1),
            Direction::DownRight => (1, 1),
        }
    }
}

/// A proposed or committed chip relocation. `weight` and `distance` are
/// heuristic fields filled in by the bot; they default to [`UNSCORED`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub source: Coord,
    pub destination: Coord,
    pub weight: i32,
    pub distance: i32,
}

impl Move {
    /// Creates an unscored move between two cells
    pub fn new(source: Coord, destination: Coord) -> Move {
        Move {
            source,
            destination,
            weight: UNSCORED,
            distance: UNSCORED,
        }
    }

    /// Ranking used to pick the bot's best candidate: higher weight first,
    /// then smaller destination-to-corner distance.
    pub fn heuristic_order(&self, other: &Move) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then(self.distance.cmp(&other.distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let a = Coord::new(5, 1);
        let b = Coord::new(8, 0);
        assert_eq!(a.manhattan_distance(b), 4);
        assert_eq!(b.manhattan_distance(a), 4);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Team::Light.opponent(), Team::Dark);
        assert_eq!(Team::Dark.opponent(), Team::Light);
    }

    #[test]
    fn test_direction_apply() {
        let c = Coord::new(4, 4);
        assert_eq!(Direction::Up.apply(&c), Coord::new(4, 3));
        assert_eq!(Direction::Down.apply(&c), Coord::new(4, 5));
        assert_eq!(Direction::Left.apply(&c), Coord::new(3, 4));
        assert_eq!(Direction::Right.apply(&c), Coord::new(5, 4));
        assert_eq!(Direction::UpRight.apply(&c), Coord::new(5, 3));
        assert_eq!(Direction::DownLeft.apply(&c), Coord::new(3, 5));
    }

    #[test]
    fn test_move_ordering_prefers_weight_then_distance() {
        let mut a = Move::new(Coord::new(0, 0), Coord::new(1, 0));
        a.weight = 3;
        a.distance = 4;
        let mut b = Move::new(Coord::new(0, 1), Coord::new(1, 1));
        b.weight = 3;
        b.distance = 2;
        let mut c = Move::new(Coord::new(0, 2), Coord::new(1, 2));
        c.weight = 1;
        c.distance = 0;

        let mut moves = vec![a.clone(), b.clone(), c.clone()];
        moves.sort_by(|m, n| m.heuristic_order(n));

        assert_eq!(moves[0], b);
        assert_eq!(moves[1], a);
        assert_eq!(moves[2], c);
    }
}
