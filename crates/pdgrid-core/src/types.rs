//! Shared types used across the simulation crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Simulation tick counter.
pub type Tick = u64;

/// A cell coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// A Prisoner's Dilemma strategy.
///
/// Serialized as the one-letter symbols `"C"` and `"D"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Move {
    #[serde(rename = "C", alias = "Cooperate")]
    Cooperate,
    #[serde(rename = "D", alias = "Defect")]
    Defect,
}

impl Move {
    /// Both strategies, cooperate first.
    pub const ALL: [Move; 2] = [Move::Cooperate, Move::Defect];

    /// The one-letter symbol for this move.
    pub fn symbol(&self) -> char {
        match self {
            Move::Cooperate => 'C',
            Move::Defect => 'D',
        }
    }

    pub fn is_cooperating(&self) -> bool {
        matches!(self, Move::Cooperate)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Error returned when a string is not one of the two strategy symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMoveError(pub String);

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown move '{}' (expected C or D)", self.0)
    }
}

impl std::error::Error for ParseMoveError {}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "cooperate" => Ok(Move::Cooperate),
            "d" | "defect" => Ok(Move::Defect),
            _ => Err(ParseMoveError(s.to_string())),
        }
    }
}

/// How the scheduler orders agent updates within a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleType {
    /// Agents step and advance one after another in creation order.
    Sequential,
    /// Like `Sequential`, but the order is reshuffled every tick.
    #[default]
    Random,
    /// Every agent steps, then every agent advances.
    Simultaneous,
}

impl ScheduleType {
    /// Whether `step` and `advance` run as separate population-wide passes.
    pub fn is_simultaneous(&self) -> bool {
        matches!(self, ScheduleType::Simultaneous)
    }
}

impl fmt::Display for ScheduleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleType::Sequential => write!(f, "Sequential"),
            ScheduleType::Random => write!(f, "Random"),
            ScheduleType::Simultaneous => write!(f, "Simultaneous"),
        }
    }
}

/// Read-only copy of a neighbor's state, as returned by a world query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeighborView {
    pub position: Position,
    #[serde(rename = "move")]
    pub mv: Move,
    pub next_move: Option<Move>,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_symbols_parse() {
        assert_eq!("C".parse::<Move>().unwrap(), Move::Cooperate);
        assert_eq!("d".parse::<Move>().unwrap(), Move::Defect);
        assert_eq!("Defect".parse::<Move>().unwrap(), Move::Defect);
        assert!("X".parse::<Move>().is_err());
    }

    #[test]
    fn move_serializes_as_symbol() {
        let json = serde_json::to_string(&Move::Cooperate).unwrap();
        assert_eq!(json, "\"C\"");
        let back: Move = serde_json::from_str("\"D\"").unwrap();
        assert_eq!(back, Move::Defect);
        assert!(serde_json::from_str::<Move>("\"Q\"").is_err());
    }

    #[test]
    fn schedule_names_match_config_strings() {
        let s: ScheduleType = serde_json::from_str("\"Simultaneous\"").unwrap();
        assert!(s.is_simultaneous());
        assert_eq!(ScheduleType::Sequential.to_string(), "Sequential");
        assert_eq!(ScheduleType::default(), ScheduleType::Random);
    }

    #[test]
    fn position_display() {
        assert_eq!(Position::new(2, 7).to_string(), "(2, 7)");
    }
}
