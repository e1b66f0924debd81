//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. Lights Out
//! is turn based, so there is no key-repeat handling: one press, one action.

pub mod map;

pub use lights_out_types as types;

pub use map::{handle_key_event, should_quit};
