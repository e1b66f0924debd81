use serde::{Deserialize, Serialize};

use crate::types::GameStatus;

/// Read-only view of a session, handed to renderers and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Vec<bool>>,
    pub lit: usize,
    pub won: bool,
    pub moves: u32,
    /// `(row, col)` of the cursor.
    pub cursor: (usize, usize),
    pub seed: u64,
}

impl GameSnapshot {
    pub fn status(&self) -> GameStatus {
        GameStatus::from_won(self.won)
    }

    /// Cell at `(row, col)`; out of range reads as unlit.
    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn playable(&self) -> bool {
        !self.won
    }
}
