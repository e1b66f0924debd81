//! Core types module - shared data structures and constants
//!
//! Everything here is plain data shared by the engine, the input mapping and
//! the terminal view.
//!
//! # Board Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 5 | Rows of a new board |
//! | `DEFAULT_COLS` | 5 | Columns of a new board |
//! | `DEFAULT_CHANCE_LIGHT_STARTS_ON` | 0.3 | Probability a cell starts lit |
//! | `MAX_DIMENSION` | 64 | Largest board a session will play |
//!
//! # Examples
//!
//! ```
//! use lights_out_types::{GameAction, GameStatus, DEFAULT_ROWS};
//!
//! let click = GameAction::ActivateAt { row: 1, col: 2 };
//! assert_ne!(click, GameAction::Activate);
//!
//! assert!(GameStatus::Won.is_terminal());
//! assert_eq!(DEFAULT_ROWS, 5);
//! ```

/// Default number of rows.
pub const DEFAULT_ROWS: usize = 5;

/// Default number of columns.
pub const DEFAULT_COLS: usize = 5;

/// Default probability that any cell is lit when a game starts.
pub const DEFAULT_CHANCE_LIGHT_STARTS_ON: f64 = 0.3;

/// Upper bound for rows and columns of a played (rendered) board.
///
/// The engine itself accepts any size of at least 1x1.
pub const MAX_DIMENSION: usize = 64;

/// Two-state game lifecycle. `Won` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
}

impl GameStatus {
    pub fn from_won(won: bool) -> Self {
        if won {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
        }
    }
}

/// Actions a front end can deliver to a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Activate the cell under the cursor.
    Activate,
    /// Activate an explicit coordinate (mouse click, scripted move).
    ActivateAt { row: usize, col: usize },
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_board() {
        assert_eq!(DEFAULT_ROWS, 5);
        assert_eq!(DEFAULT_COLS, 5);
        assert!((DEFAULT_CHANCE_LIGHT_STARTS_ON - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn status_from_won_flag() {
        assert_eq!(GameStatus::from_won(true), GameStatus::Won);
        assert_eq!(GameStatus::from_won(false), GameStatus::Playing);
        assert!(!GameStatus::Playing.is_terminal());
    }
}
