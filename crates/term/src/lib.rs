//! Terminal rendering for Lights Out.
//!
//! Renders a [`core::GameSnapshot`] into a framebuffer of styled characters and
//! flushes it with crossterm. No widget library: the board is small and a
//! plain framebuffer gives exact control over cell aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use lights_out_core as core;
pub use lights_out_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardFrame, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
