use crate::types::{Coordinate, PlayerColor};

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// Outside the board or outside the hexagon.
    Invalid,
    Occupied,
    /// Empty cell, but no run in any direction ends in the player's color.
    NoCapture,
    GameFinished,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IllegalMoveReason::Invalid => "cell is not on the board",
            IllegalMoveReason::Occupied => "cell is already occupied",
            IllegalMoveReason::NoCapture => "placement captures nothing",
            IllegalMoveReason::GameFinished => "game is already over",
        };
        f.write_str(text)
    }
}

/// A placement that the rules do not allow. Nothing was mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal move by {player} at {at}: {reason}")]
pub struct IllegalMoveError {
    pub at: Coordinate,
    pub player: PlayerColor,
    pub reason: IllegalMoveReason,
}

/// A raw direction code outside `0..=5`. Indicates a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction code {0}")]
pub struct InvalidDirectionError(pub u8);

/// Errors that can occur when configuring a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size must be at least {min}, got {size}")]
    SizeTooSmall { size: u32, min: u32 },

    #[error("board size must be at most {max}, got {size}")]
    SizeTooLarge { size: u32, max: u32 },
}

/// A raw player color code other than 2, 3 or 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown player color code {0}")]
pub struct UnknownColorError(pub u8);
