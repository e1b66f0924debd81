//! Command-line parsing.
//!
//! ```text
//! lights-out [play|snapshot] [--rows N] [--cols N] [--chance P] [--seed S]
//!            [--activate ROW,COL]...
//! ```
//!
//! Flags override the configuration passed in (defaults plus environment).
//! `--activate` is only accepted by `snapshot`.

use anyhow::{anyhow, bail, Context, Result};

use crate::core::{BoardConfig, GameSnapshot, Session};

pub const USAGE: &str = "\
usage: lights-out [play|snapshot] [options]

commands:
  play        interactive terminal game (default)
  snapshot    deal a board, apply --activate moves, print JSON

options:
  --rows N            rows (default 5, env LIGHTS_OUT_ROWS)
  --cols N            columns (default 5, env LIGHTS_OUT_COLS)
  --chance P          chance a light starts on, 0..=1 (default 0.3, env LIGHTS_OUT_CHANCE)
  --seed S            seed for reproducible boards (env LIGHTS_OUT_SEED)
  --activate R,C      snapshot only; may repeat
  -h, --help          show this help";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Play(BoardConfig),
    Snapshot {
        config: BoardConfig,
        activations: Vec<(usize, usize)>,
    },
    Help,
}

/// Parse arguments (without the program name) on top of `base`.
pub fn parse_args(args: &[String], base: BoardConfig) -> Result<Command> {
    let mut rest = args;
    let snapshot = match args.first().map(String::as_str) {
        Some("snapshot") => {
            rest = &args[1..];
            true
        }
        Some("play") => {
            rest = &args[1..];
            false
        }
        _ => false,
    };

    let mut config = base;
    let mut activations = Vec::new();
    let mut i = 0usize;
    while i < rest.len() {
        let flag = rest[i].as_str();
        if matches!(flag, "-h" | "--help") {
            return Ok(Command::Help);
        }

        i += 1;
        let value = || {
            rest.get(i)
                .map(String::as_str)
                .ok_or_else(|| anyhow!("missing value for {}", flag))
        };
        match flag {
            "--rows" => config.rows = parse_flag(flag, value()?)?,
            "--cols" => config.cols = parse_flag(flag, value()?)?,
            "--chance" => config.chance_light_starts_on = parse_flag(flag, value()?)?,
            "--seed" => config.seed = Some(parse_flag(flag, value()?)?),
            "--activate" if snapshot => activations.push(parse_coord(value()?)?),
            "--activate" => bail!("--activate is only valid with the snapshot command"),
            other => bail!("unknown argument: {}", other),
        }
        i += 1;
    }

    Ok(if snapshot {
        Command::Snapshot {
            config,
            activations,
        }
    } else {
        Command::Play(config)
    })
}

/// Deal a board, apply `activations` in order, and return the resulting snapshot.
pub fn run_snapshot(config: BoardConfig, activations: &[(usize, usize)]) -> Result<GameSnapshot> {
    let mut session = Session::new(config).context("invalid board configuration")?;
    for &(row, col) in activations {
        session.activate(row, col);
    }
    Ok(session.snapshot())
}

fn parse_flag<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| anyhow!("invalid value for {}: {}", flag, value))
}

fn parse_coord(value: &str) -> Result<(usize, usize)> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| anyhow!("--activate expects ROW,COL, got {}", value))?;
    Ok((
        parse_flag("--activate", row)?,
        parse_flag("--activate", col)?,
    ))
}
