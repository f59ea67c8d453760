use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;

pub use board::{Direction, HexBoard, adjacent};
pub use config::GameConfig;
pub use error::{
    ConfigError, IllegalMoveError, IllegalMoveReason, InvalidDirectionError, UnknownColorError,
};
pub use game::{GameSession, GameStatus, MoveOutcome};
pub use types::{CellState, Coordinate, GameResult, GameState, PlayerColor, Scores};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
