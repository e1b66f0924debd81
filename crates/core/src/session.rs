//! Session: the single-threaded driver a front end talks to.
//!
//! A session owns the current [`GameState`], the cursor, a move counter and
//! the random source used for restarts. Actions are applied one at a time,
//! each against the state produced by the previous one.

use log::{debug, info};

use crate::config::{check_session_size, BoardConfig, ConfigError};
use crate::engine::{BoardEngine, GameState};
use crate::rng::GameRng;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, GameStatus};

#[derive(Debug, Clone)]
pub struct Session {
    engine: BoardEngine,
    state: GameState,
    rng: GameRng,
    cursor: (usize, usize),
    moves: u32,
}

impl Session {
    /// Validate `config` and deal the first board.
    ///
    /// Without a configured seed one is drawn from entropy and kept, so
    /// [`Session::seed`] can always reproduce the game.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        let (engine, mut rng) = Self::prepare(config)?;
        let state = engine.initialize(rng.inner_mut());
        info!(
            "new {}x{} game (seed {}, {} lit, {})",
            config.rows,
            config.cols,
            rng.seed(),
            state.grid().lit_count(),
            state.status().as_str()
        );
        Ok(Self::from_parts(engine, state, rng))
    }

    /// Start from an explicit state instead of a random one.
    ///
    /// The RNG is only used for later restarts.
    pub fn with_state(config: BoardConfig, state: GameState) -> Result<Self, ConfigError> {
        if state.rows() != config.rows || state.cols() != config.cols {
            return Err(ConfigError::GridMismatch {
                expected: (config.rows, config.cols),
                found: (state.rows(), state.cols()),
            });
        }
        let (engine, rng) = Self::prepare(config)?;
        info!(
            "{}x{} game from given board ({} lit, {})",
            config.rows,
            config.cols,
            state.grid().lit_count(),
            state.status().as_str()
        );
        Ok(Self::from_parts(engine, state, rng))
    }

    fn prepare(config: BoardConfig) -> Result<(BoardEngine, GameRng), ConfigError> {
        let engine = BoardEngine::new(config)?;
        check_session_size(config.rows, config.cols)?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Ok((engine, rng))
    }

    fn from_parts(engine: BoardEngine, state: GameState, rng: GameRng) -> Self {
        Self {
            engine,
            state,
            rng,
            cursor: (0, 0),
            moves: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Apply one action. Returns whether anything visible changed.
    ///
    /// Everything except `Restart` is ignored once the game is won.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => {
                self.restart();
                true
            }
            _ if self.state.won() => false,
            GameAction::MoveUp => self.move_cursor(-1, 0),
            GameAction::MoveDown => self.move_cursor(1, 0),
            GameAction::MoveLeft => self.move_cursor(0, -1),
            GameAction::MoveRight => self.move_cursor(0, 1),
            GameAction::Activate => {
                let (row, col) = self.cursor;
                self.activate(row, col)
            }
            GameAction::ActivateAt { row, col } => self.activate(row, col),
        }
    }

    /// Activate `(row, col)`. Returns false for no-ops (won game, outside the grid).
    pub fn activate(&mut self, row: usize, col: usize) -> bool {
        let next = self.engine.activate(&self.state, row, col);
        if next == self.state {
            return false;
        }
        self.moves += 1;
        debug!("activate ({}, {}) -> {} lit", row, col, next.grid().lit_count());
        if next.won() {
            info!("board cleared in {} moves", self.moves);
        }
        self.state = next;
        true
    }

    /// Deal a new board from the session RNG. Equivalent to a new game.
    pub fn restart(&mut self) {
        self.state = self.engine.initialize(self.rng.inner_mut());
        self.cursor = (0, 0);
        self.moves = 0;
        info!(
            "restart: {} lit, {}",
            self.state.grid().lit_count(),
            self.state.status().as_str()
        );
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let grid = self.state.grid();
        GameSnapshot {
            rows: grid.rows(),
            cols: grid.cols(),
            cells: grid.to_rows(),
            lit: grid.lit_count(),
            won: self.state.won(),
            moves: self.moves,
            cursor: self.cursor,
            seed: self.rng.seed(),
        }
    }

    fn move_cursor(&mut self, dr: isize, dc: isize) -> bool {
        let (row, col) = self.cursor;
        let max_row = self.state.rows() - 1;
        let max_col = self.state.cols() - 1;
        let next = (
            row.saturating_add_signed(dr).min(max_row),
            col.saturating_add_signed(dc).min(max_col),
        );
        let moved = next != self.cursor;
        self.cursor = next;
        moved
    }
}
