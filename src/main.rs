//! Console runner (default binary).
//!
//! Reads one command per line from stdin and prints the board after every change.
//! Session tuning comes from `BLOCKFIT_*` environment variables; log verbosity
//! from `RUST_LOG` (default `warn`), written to stderr. On a terminal the board is
//! drawn in piece colours unless `NO_COLOR` is set.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use blockfit::console::{
    hint, load_session, parse_command, queue_board, render, render_status, save_session,
    Command, HELP,
};
use blockfit::engine::{GameSession, SessionConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = SessionConfig::from_env();
    info!(?config, "console session configured");
    let mut session = GameSession::new(config);
    session.start(config.difficulty);

    let color = io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    draw(&mut out, &session, color)?;
    writeln!(out, "type 'help' for commands")?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                writeln!(out, "{}", msg)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                write!(out, "{}", HELP)?;
                continue;
            }
            Command::Hint => {
                match hint(&session) {
                    Some((slot, anchor)) => {
                        writeln!(out, "try: place {} {} {}", slot, anchor.x, anchor.y)?
                    }
                    None => writeln!(out, "nothing fits")?,
                }
                continue;
            }
            Command::Save(path) => {
                match save_session(&session, &path) {
                    Ok(()) => writeln!(out, "saved to {}", path)?,
                    Err(err) => {
                        warn!(error = ?err, "save failed");
                        writeln!(out, "cannot save: {:#}", err)?
                    }
                }
                continue;
            }
            Command::Load(path) => match load_session(&session, &path) {
                Ok(loaded) => session = loaded,
                Err(err) => {
                    warn!(error = ?err, "load failed");
                    writeln!(out, "cannot load: {:#}", err)?;
                    continue;
                }
            },
            Command::Place { slot, anchor } => match session.place(slot, anchor) {
                Ok(outcome) => {
                    if outcome.result.lines_cleared > 0 {
                        writeln!(
                            out,
                            "cleared {} line(s){}",
                            outcome.result.lines_cleared,
                            if outcome.result.is_combo { ", combo!" } else { "" }
                        )?;
                    }
                    if outcome.game_over {
                        writeln!(out, "game over: nothing on offer fits")?;
                    }
                }
                Err(err) => {
                    writeln!(out, "{}", err)?;
                    continue;
                }
            },
            Command::Undo => {
                if !session.undo() {
                    writeln!(out, "cannot undo")?;
                    continue;
                }
            }
            Command::Restart => session.restart(),
            Command::New(difficulty) => session.start(difficulty),
            Command::Pause => {
                session.pause();
            }
            Command::Resume => {
                session.resume();
            }
        }
        draw(&mut out, &session, color)?;
    }

    Ok(())
}

fn draw<W: Write>(out: &mut W, session: &GameSession, color: bool) -> Result<()> {
    if color {
        queue_board(out, session.grid())?;
        write!(out, "{}", render_status(session))?;
    } else {
        write!(out, "{}", render(session))?;
    }
    out.flush()?;
    Ok(())
}
