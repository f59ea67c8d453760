use serde::{Deserialize, Serialize};

use crate::error::UnknownColorError;

/// A cell of the backing array. `x` runs over `0..4*size`, `y` over `0..2*size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Green,
    Blue,
}

impl PlayerColor {
    /// Turn order.
    pub const ALL: [PlayerColor; 3] = [PlayerColor::Red, PlayerColor::Green, PlayerColor::Blue];

    /// The player whose turn it is after `turn_count` turns.
    pub fn for_turn(turn_count: u64) -> Self {
        Self::ALL[(turn_count % 3) as usize]
    }

    pub fn code(self) -> u8 {
        match self {
            PlayerColor::Red => CELL_RED,
            PlayerColor::Green => CELL_GREEN,
            PlayerColor::Blue => CELL_BLUE,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, UnknownColorError> {
        match code {
            CELL_RED => Ok(PlayerColor::Red),
            CELL_GREEN => Ok(PlayerColor::Green),
            CELL_BLUE => Ok(PlayerColor::Blue),
            other => Err(UnknownColorError(other)),
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlayerColor::Red => "red",
            PlayerColor::Green => "green",
            PlayerColor::Blue => "blue",
        };
        f.write_str(name)
    }
}

pub const CELL_INVALID: u8 = 0;
pub const CELL_EMPTY: u8 = 1;
pub const CELL_RED: u8 = 2;
pub const CELL_GREEN: u8 = 3;
pub const CELL_BLUE: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Outside the hexagon. Never changes.
    Invalid,
    Empty,
    Occupied(PlayerColor),
}

impl CellState {
    /// Wire code used by the JS side: 0=invalid, 1=empty, 2=red, 3=green, 4=blue.
    pub fn code(self) -> u8 {
        match self {
            CellState::Invalid => CELL_INVALID,
            CellState::Empty => CELL_EMPTY,
            CellState::Occupied(color) => color.code(),
        }
    }

    pub fn is_playable(self) -> bool {
        self != CellState::Invalid
    }
}

/// Stone counts per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Scores {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl Scores {
    /// Highest count wins. Ties go to Red, then Green.
    pub fn winner(&self) -> PlayerColor {
        let (r, g, b) = (self.red, self.green, self.blue);
        if r >= g && r >= b {
            PlayerColor::Red
        } else if g >= b {
            PlayerColor::Green
        } else {
            PlayerColor::Blue
        }
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub size: u32,
    pub width: u32,
    pub height: u32,
    /// Row-major cell codes, `width * height` entries.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub turn_count: u64,
    pub scores: Scores,
    pub is_game_over: bool,
    /// Cells the current player may play. Empty once the game is over.
    pub legal_origins: Vec<Coordinate>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: u8,
    pub scores: Scores,
}
