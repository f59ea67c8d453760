use std::collections::BTreeSet;

use crate::config::GameConfig;
use crate::error::{ConfigError, IllegalMoveError, IllegalMoveReason, InvalidDirectionError};
use crate::types::{CellState, Coordinate, PlayerColor};

/// Opening stones relative to the top-left corner of the size-2 board.
/// Larger boards shift them by `(2*(size-2), size-2)`.
const OPENING: [(i32, i32, PlayerColor); 12] = [
    (3, 0, PlayerColor::Green),
    (4, 0, PlayerColor::Blue),
    (6, 0, PlayerColor::Blue),
    (7, 0, PlayerColor::Red),
    (1, 1, PlayerColor::Green),
    (7, 1, PlayerColor::Red),
    (0, 2, PlayerColor::Red),
    (6, 2, PlayerColor::Green),
    (0, 3, PlayerColor::Red),
    (1, 3, PlayerColor::Blue),
    (3, 3, PlayerColor::Blue),
    (4, 3, PlayerColor::Green),
];

/// The six walking directions of the triangle grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpperLeft,
    LowerRight,
    Left,
    Right,
    LowerLeft,
    UpperRight,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::UpperLeft,
        Direction::LowerRight,
        Direction::Left,
        Direction::Right,
        Direction::LowerLeft,
        Direction::UpperRight,
    ];
}

impl TryFrom<u8> for Direction {
    type Error = InvalidDirectionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(InvalidDirectionError(code))
    }
}

/// One step from `(x, y)` towards `dir`.
///
/// Even and odd columns are the two triangle orientations, so the diagonal
/// steps depend on the parity of `x`. Steps wrap at the `i32` limits; those
/// coordinates are off every board anyway.
pub fn adjacent(x: i32, y: i32, dir: Direction) -> Coordinate {
    let even = x.rem_euclid(2) == 0;
    let (dx, dy) = match dir {
        Direction::Left => (-1, 0),
        Direction::Right => (1, 0),
        Direction::UpperLeft => {
            if even {
                (1, -1)
            } else {
                (-1, 0)
            }
        }
        Direction::LowerRight => {
            if even {
                (1, 0)
            } else {
                (-1, 1)
            }
        }
        Direction::LowerLeft => (-1, if even { 0 } else { 1 }),
        Direction::UpperRight => (1, if even { -1 } else { 0 }),
    };
    Coordinate::new(x.wrapping_add(dx), y.wrapping_add(dy))
}

/// Three-player board: a `4*size` by `2*size` array with the corners outside
/// the hexagon masked as [`CellState::Invalid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexBoard {
    size: u32,
    cells: Vec<CellState>,
}

impl HexBoard {
    /// Creates a board of radius `size` with the opening stones placed.
    pub fn new(size: u32) -> Result<Self, ConfigError> {
        let mut board = Self::blank(size)?;
        let offset_x = 2 * (size as i32 - 2);
        let offset_y = size as i32 - 2;
        for (x, y, color) in OPENING {
            board.put_forcibly(Coordinate::new(x + offset_x, y + offset_y), color);
        }
        Ok(board)
    }

    /// Creates a board with every playable cell empty.
    /// `size` must lie in `MIN_SIZE..=MAX_SIZE`, which keeps the arithmetic
    /// below well inside `i32`.
    pub fn blank(size: u32) -> Result<Self, ConfigError> {
        GameConfig::new(size)?;

        let width = 4 * size as i32;
        let height = 2 * size as i32;
        let low = 2 * size as i32 - 1;
        let high = 6 * size as i32 - 2;

        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let rank = 2 * y + x;
                cells.push(if (low..=high).contains(&rank) {
                    CellState::Empty
                } else {
                    CellState::Invalid
                });
            }
        }

        Ok(Self { size, cells })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn width(&self) -> i32 {
        4 * self.size as i32
    }

    pub fn height(&self) -> i32 {
        2 * self.size as i32
    }

    /// Returns [`CellState::Invalid`] for anything off the backing array.
    pub fn at(&self, x: i32, y: i32) -> CellState {
        match self.index(x, y) {
            Some(idx) => self.cells[idx],
            None => CellState::Invalid,
        }
    }

    /// Overwrites a playable cell with `color` regardless of the rules.
    /// Returns `false` and leaves the board unchanged for invalid cells.
    pub fn put_forcibly(&mut self, at: Coordinate, color: PlayerColor) -> bool {
        match self.index(at.x, at.y) {
            Some(idx) if self.cells[idx].is_playable() => {
                self.cells[idx] = CellState::Occupied(color);
                true
            }
            _ => false,
        }
    }

    /// Cells that placing `color` at `(x, y)` would turn to `color`,
    /// including `(x, y)` itself. Empty when the placement is illegal.
    pub fn legal_captures_for(&self, x: i32, y: i32, color: PlayerColor) -> BTreeSet<Coordinate> {
        let mut captures = BTreeSet::new();
        if self.at(x, y) != CellState::Empty {
            return captures;
        }

        for dir in Direction::ALL {
            let mut cursor = Coordinate::new(x, y);
            let mut run = Vec::new();

            loop {
                cursor = adjacent(cursor.x, cursor.y, dir);
                match self.at(cursor.x, cursor.y) {
                    CellState::Occupied(c) if c == color => {
                        captures.extend(run);
                        break;
                    }
                    CellState::Occupied(_) => run.push(cursor),
                    CellState::Empty | CellState::Invalid => break,
                }
            }
        }

        if !captures.is_empty() {
            captures.insert(Coordinate::new(x, y));
        }
        captures
    }

    pub fn is_legal_move(&self, x: i32, y: i32, color: PlayerColor) -> bool {
        !self.legal_captures_for(x, y, color).is_empty()
    }

    /// Every cell where `color` may currently be placed.
    pub fn legal_origins(&self, color: PlayerColor) -> BTreeSet<Coordinate> {
        self.coordinates()
            .filter(|c| self.is_legal_move(c.x, c.y, color))
            .collect()
    }

    /// Places `color` at `(x, y)` and flips captured cells.
    /// Returns the changed cells. On error the board is unchanged.
    pub fn apply_move(
        &mut self,
        x: i32,
        y: i32,
        color: PlayerColor,
    ) -> Result<BTreeSet<Coordinate>, IllegalMoveError> {
        let captures = self.legal_captures_for(x, y, color);
        if captures.is_empty() {
            let reason = match self.at(x, y) {
                CellState::Invalid => IllegalMoveReason::Invalid,
                CellState::Occupied(_) => IllegalMoveReason::Occupied,
                CellState::Empty => IllegalMoveReason::NoCapture,
            };
            return Err(IllegalMoveError {
                at: Coordinate::new(x, y),
                player: color,
                reason,
            });
        }

        for &c in &captures {
            self.put_forcibly(c, color);
        }
        Ok(captures)
    }

    pub fn count_of(&self, color: PlayerColor) -> u32 {
        self.count_state(CellState::Occupied(color))
    }

    pub fn empty_count(&self) -> u32 {
        self.count_state(CellState::Empty)
    }

    /// Stones of all players plus empty cells. Always `6 * size^2`.
    pub fn total_playable_cells(&self) -> u32 {
        PlayerColor::ALL
            .iter()
            .map(|&color| self.count_of(color))
            .sum::<u32>()
            + self.empty_count()
    }

    /// All cells of the backing array in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, CellState)> + '_ {
        self.coordinates().map(|c| (c, self.at(c.x, c.y)))
    }

    /// Row-major wire codes, see [`CellState::code`].
    pub fn to_codes(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.code()).collect()
    }

    fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let width = self.width();
        (0..self.height()).flat_map(move |y| (0..width).map(move |x| Coordinate::new(x, y)))
    }

    fn count_state(&self, state: CellState) -> u32 {
        self.cells.iter().filter(|&&cell| cell == state).count() as u32
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        Some((y * self.width() + x) as usize)
    }
}
