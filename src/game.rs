use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::board::HexBoard;
use crate::error::{ConfigError, IllegalMoveError, IllegalMoveReason};
use crate::types::{CellState, Coordinate, GameResult, GameState, PlayerColor, Scores};

/// Number of consecutive players without a move that ends the game.
const PLAYERS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    InProgress,
    Finished { winner: PlayerColor },
}

/// What an accepted move changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub player: PlayerColor,
    /// Every cell now holding `player`'s color, the placed cell included.
    pub captured: Vec<Coordinate>,
    /// Players passed over because they had no legal move, in turn order.
    pub skipped: Vec<PlayerColor>,
    pub status: GameStatus,
}

/// One game between Red, Green and Blue. Red moves first.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: HexBoard,
    turn_count: u64,
    status: GameStatus,
}

impl GameSession {
    pub fn new(size: u32) -> Result<Self, ConfigError> {
        Ok(Self::from_parts(HexBoard::new(size)?, 0))
    }

    /// Resumes a game from an existing position.
    pub fn from_parts(board: HexBoard, turn_count: u32) -> Self {
        let mut session = Self {
            board,
            turn_count: u64::from(turn_count),
            status: GameStatus::InProgress,
        };
        session.resolve_skips();
        session
    }

    /// Discards the current game and starts a new one on a board of `size`.
    pub fn reset(&mut self, size: u32) -> Result<(), ConfigError> {
        *self = Self::new(size)?;
        info!(size, "game reset");
        Ok(())
    }

    pub fn board(&self) -> &HexBoard {
        &self.board
    }

    pub fn turn_count(&self) -> u64 {
        self.turn_count
    }

    pub fn current_player(&self) -> PlayerColor {
        PlayerColor::for_turn(self.turn_count)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    pub fn cell_at(&self, x: i32, y: i32) -> CellState {
        self.board.at(x, y)
    }

    pub fn legal_origins(&self, color: PlayerColor) -> BTreeSet<Coordinate> {
        self.board.legal_origins(color)
    }

    pub fn count_of(&self, color: PlayerColor) -> u32 {
        self.board.count_of(color)
    }

    pub fn scores(&self) -> Scores {
        Scores {
            red: self.board.count_of(PlayerColor::Red),
            green: self.board.count_of(PlayerColor::Green),
            blue: self.board.count_of(PlayerColor::Blue),
        }
    }

    /// Cells the current player would take by playing at `(x, y)`.
    pub fn preview(&self, x: i32, y: i32) -> BTreeSet<Coordinate> {
        if self.is_game_over() {
            return BTreeSet::new();
        }
        self.board.legal_captures_for(x, y, self.current_player())
    }

    /// Plays the current player at `(x, y)`, then passes over every
    /// following player that cannot move. This may finish the game.
    pub fn attempt_move(&mut self, x: i32, y: i32) -> Result<MoveOutcome, IllegalMoveError> {
        let player = self.current_player();
        if self.is_game_over() {
            return Err(IllegalMoveError {
                at: Coordinate::new(x, y),
                player,
                reason: IllegalMoveReason::GameFinished,
            });
        }

        let captured = self.board.apply_move(x, y, player).inspect_err(|err| {
            trace!(%err, "move rejected");
        })?;
        debug!(%player, x, y, flipped = captured.len() - 1, "move accepted");

        self.turn_count += 1;
        let skipped = self.resolve_skips();

        Ok(MoveOutcome {
            player,
            captured: captured.into_iter().collect(),
            skipped,
            status: self.status,
        })
    }

    pub fn to_game_state(&self) -> GameState {
        let legal_origins = if self.is_game_over() {
            Vec::new()
        } else {
            self.legal_origins(self.current_player()).into_iter().collect()
        };

        GameState {
            size: self.board.size(),
            width: self.board.width() as u32,
            height: self.board.height() as u32,
            board: self.board.to_codes(),
            current_player: self.current_player().code(),
            turn_count: self.turn_count,
            scores: self.scores(),
            is_game_over: self.is_game_over(),
            legal_origins,
        }
    }

    /// `None` while the game is still running.
    pub fn to_game_result(&self) -> Option<GameResult> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Finished { winner } => Some(GameResult {
                winner: winner.code(),
                scores: self.scores(),
            }),
        }
    }

    /// Advances past players without a legal move. After three in a row
    /// nobody can move and the game is over.
    fn resolve_skips(&mut self) -> Vec<PlayerColor> {
        let mut skipped = Vec::new();

        while (skipped.len() as u32) < PLAYERS {
            let player = self.current_player();
            if !self.board.legal_origins(player).is_empty() {
                return skipped;
            }
            debug!(%player, turn = self.turn_count, "no legal move, skipping");
            skipped.push(player);
            self.turn_count += 1;
        }

        let scores = self.scores();
        let winner = scores.winner();
        info!(
            %winner,
            red = scores.red,
            green = scores.green,
            blue = scores.blue,
            "game finished"
        );
        self.status = GameStatus::Finished { winner };
        skipped
    }
}
