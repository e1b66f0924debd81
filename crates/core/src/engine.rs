//! Board engine: initialisation, the flip rule and the win check.
//!
//! The engine holds only the validated configuration. Game state is a plain
//! value: [`BoardEngine::activate`] borrows the current state and returns the
//! next one, so earlier states stay valid for any observer holding them.

use rand::Rng;

use crate::board::Grid;
use crate::config::{BoardConfig, ConfigError};
use crate::rng::bernoulli;
use crate::types::GameStatus;

/// Grid plus the won flag.
///
/// States from [`GameState::from_grid`], `initialize` and `activate` are won
/// iff every cell is unlit. [`GameState::playing`] can start an unlit grid
/// that is still playable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    grid: Grid,
    won: bool,
}

impl GameState {
    /// Wrap a grid, deriving the won flag from it.
    pub fn from_grid(grid: Grid) -> Self {
        let won = grid.all_unlit();
        Self { grid, won }
    }

    /// Wrap a grid as a game in progress, even if no light is on.
    ///
    /// The first activation recomputes the won flag from the toggled grid.
    pub fn playing(grid: Grid) -> Self {
        Self { grid, won: false }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from_won(self.won)
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }
}

/// Stateless rules for one board configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardEngine {
    config: BoardConfig,
}

impl BoardEngine {
    /// Validate `config` and build an engine for it.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Draw a fresh board: every cell is lit independently with the configured chance.
    ///
    /// May return an already won state when no cell comes up lit.
    pub fn initialize<R: Rng + ?Sized>(&self, rng: &mut R) -> GameState {
        let p = self.config.chance_light_starts_on;
        let grid = Grid::from_fn(self.config.rows, self.config.cols, |_, _| {
            bernoulli(&mut *rng, p)
        });
        GameState::from_grid(grid)
    }

    /// Toggle `(row, col)` and its orthogonal neighbours on a copy of the grid.
    ///
    /// Won states and coordinates outside the grid are no-ops that return an
    /// equal state. The won flag is recomputed from the toggled copy.
    pub fn activate(&self, state: &GameState, row: usize, col: usize) -> GameState {
        activate(state, row, col)
    }

    pub fn is_won(state: &GameState) -> bool {
        is_won(state)
    }
}

/// Validate the arguments and draw a board from `rng`.
///
/// ```
/// use lights_out_core::{initialize, GameRng};
///
/// let mut rng = GameRng::new(3);
/// let state = initialize(1, 1, 1.0, rng.inner_mut()).unwrap();
/// assert!(!state.won());
/// ```
pub fn initialize<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    chance_light_starts_on: f64,
    rng: &mut R,
) -> Result<GameState, ConfigError> {
    let engine = BoardEngine::new(BoardConfig::new(rows, cols, chance_light_starts_on))?;
    Ok(engine.initialize(rng))
}

/// See [`BoardEngine::activate`].
pub fn activate(state: &GameState, row: usize, col: usize) -> GameState {
    if state.won {
        return state.clone();
    }

    let mut grid = state.grid.clone();
    for (r, c) in state.grid.flip_targets(row, col) {
        grid.toggle(r, c);
    }
    GameState::from_grid(grid)
}

/// True iff every cell is unlit.
pub fn is_won(state: &GameState) -> bool {
    state.grid.all_unlit()
}
