//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the Lights Out rules and the session driver used by
//! front ends. It has **no dependencies** on terminals or other I/O:
//!
//! - **Deterministic**: board generation takes an injected random source;
//!   a seeded [`GameRng`] always deals the same boards
//! - **Value semantics**: [`BoardEngine::activate`] never mutates the state it
//!   is given, it returns the next state
//! - **Fallible only at construction**: invalid configuration is rejected with
//!   [`ConfigError`]; nothing after that can fail
//!
//! # Module Structure
//!
//! - [`board`]: `rows x cols` grid of lights with neighbour lookup
//! - [`config`]: board configuration, environment overrides, [`ConfigError`]
//! - [`engine`]: [`GameState`], `initialize`, `activate`, `is_won`
//! - [`rng`]: seedable ChaCha-backed random source
//! - [`session`]: cursor, move counter and restart on top of the engine
//! - [`snapshot`]: serialisable view of a session for renderers and JSON
//!
//! # Game Rules
//!
//! - Activating a cell toggles it and its up/down/left/right neighbours;
//!   neighbours outside the grid are skipped, diagonals never change
//! - The game is won when every light is off; a won game accepts no more moves
//! - A board dealt with no lit cells starts out won
//!
//! # Example
//!
//! ```
//! use lights_out_core::{BoardConfig, BoardEngine, GameRng};
//!
//! let engine = BoardEngine::new(BoardConfig::new(3, 3, 0.0)).unwrap();
//! let state = engine.initialize(GameRng::new(1).inner_mut());
//! assert!(state.won());
//!
//! // Won boards ignore further activations.
//! let next = engine.activate(&state, 1, 1);
//! assert_eq!(next, state);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use lights_out_types as types;

// Re-export commonly used types for convenience
pub use board::Grid;
pub use config::{BoardConfig, ConfigError};
pub use engine::{activate, initialize, is_won, BoardEngine, GameState};
pub use rng::GameRng;
pub use session::Session;
pub use snapshot::GameSnapshot;
