//! Lights Out runner (default binary).
//!
//! `play` runs the interactive terminal game; `snapshot` deals a board,
//! applies scripted moves and prints the result as JSON.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use log::info;

use lights_out::cli::{parse_args, run_snapshot, Command, USAGE};
use lights_out::core::{BoardConfig, Session};
use lights_out::input::{handle_key_event, should_quit};
use lights_out::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use lights_out::types::GameAction;

fn main() -> Result<()> {
    env_logger::init();

    let base = BoardConfig::from_env().context("reading LIGHTS_OUT_* environment")?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    match parse_args(&args, base)? {
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        Command::Snapshot {
            config,
            activations,
        } => {
            let snap = run_snapshot(config, &activations)?;
            println!("{}", serde_json::to_string_pretty(&snap)?);
            Ok(())
        }
        Command::Play(config) => play(config),
    }
}

fn play(config: BoardConfig) -> Result<()> {
    // Validate before touching the terminal so errors print normally.
    let mut session = Session::new(config).context("invalid board configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(
        "session finished: {} moves, {}",
        session.moves(),
        session.status().as_str()
    );
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let snap = session.snapshot();
        view.render_into(&snap, viewport, &mut fb);
        term.draw(&fb)?;

        // One event, one action: each is applied to the state left by the previous one.
        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => view
                .cell_at(&snap, viewport, mouse.column, mouse.row)
                .map(|(row, col)| GameAction::ActivateAt { row, col }),
            Event::Resize(_, _) => {
                term.invalidate();
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            session.apply_action(action);
        }
    }
}
