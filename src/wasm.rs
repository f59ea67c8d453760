use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::board::{self, Direction};
use crate::config::GameConfig;
use crate::game::GameSession;
use crate::types::PlayerColor;

/// JS handle to one game. Colors cross the boundary as cell codes
/// (2=red, 3=green, 4=blue).
#[wasm_bindgen]
pub struct WasmGame {
    session: GameSession,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(size: u32) -> Result<WasmGame, JsError> {
        Ok(Self {
            session: GameSession::new(size)?,
        })
    }

    /// Starts a game sized from a location hash such as `#5`.
    #[wasm_bindgen(js_name = fromHash)]
    pub fn from_hash(hash: &str) -> Result<WasmGame, JsError> {
        Self::new(GameConfig::from_hash(hash).size)
    }

    pub fn width(&self) -> i32 {
        self.session.board().width()
    }

    pub fn height(&self) -> i32 {
        self.session.board().height()
    }

    #[wasm_bindgen(js_name = cellAt)]
    pub fn cell_at(&self, x: i32, y: i32) -> u8 {
        self.session.cell_at(x, y).code()
    }

    /// Row-major cell codes.
    pub fn board(&self) -> Vec<u8> {
        self.session.board().to_codes()
    }

    #[wasm_bindgen(js_name = legalOrigins)]
    pub fn legal_origins(&self, color: u8) -> Result<JsValue, JsError> {
        let color = PlayerColor::from_code(color)?;
        to_js(&self.session.legal_origins(color))
    }

    /// Cells the current player would take by playing at `(x, y)`.
    pub fn preview(&self, x: i32, y: i32) -> Result<JsValue, JsError> {
        to_js(&self.session.preview(x, y))
    }

    #[wasm_bindgen(js_name = countOf)]
    pub fn count_of(&self, color: u8) -> Result<u32, JsError> {
        Ok(self.session.count_of(PlayerColor::from_code(color)?))
    }

    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        self.session.current_player().code()
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.to_game_state())
    }

    /// `null` until the game is over.
    pub fn result(&self) -> Result<JsValue, JsError> {
        match self.session.to_game_result() {
            Some(result) => to_js(&result),
            None => Ok(JsValue::NULL),
        }
    }

    /// Throws when the move is illegal; the game is left untouched.
    #[wasm_bindgen(js_name = attemptMove)]
    pub fn attempt_move(&mut self, x: i32, y: i32) -> Result<JsValue, JsError> {
        let outcome = self.session.attempt_move(x, y)?;
        to_js(&outcome)
    }

    pub fn reset(&mut self, size: u32) -> Result<(), JsError> {
        self.session.reset(size)?;
        Ok(())
    }
}

/// Neighbor of `(x, y)` in direction code `dir` (0..=5).
#[wasm_bindgen]
pub fn adjacent(x: i32, y: i32, dir: u8) -> Result<JsValue, JsError> {
    let dir = Direction::try_from(dir)?;
    to_js(&board::adjacent(x, y, dir))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsError::new(&err.to_string()))
}
