//! Console module - text commands and board rendering for the default binary
//!
//! One command per line. Coordinates are grid cells with (0, 0) at the bottom-left.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::QueueableCommand;

use blockfit_core::{find_fit, Grid};
use blockfit_engine::{GameSession, SessionSave};
use blockfit_types::{Anchor, Difficulty, Rgb};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Place { slot: usize, anchor: Anchor },
    Undo,
    Restart,
    New(Difficulty),
    Pause,
    Resume,
    Hint,
    Save(String),
    Load(String),
    Help,
    Quit,
}

/// Parse one input line. `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match (head.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("place" | "p", [slot, x, y]) => Command::Place {
            slot: parse_number(slot, "slot")?,
            anchor: Anchor::new(parse_number(x, "x")?, parse_number(y, "y")?),
        },
        ("place" | "p", _) => return Err("usage: place <slot> <x> <y>".to_string()),
        ("undo" | "u", []) => Command::Undo,
        ("restart" | "r", []) => Command::Restart,
        ("new" | "n", [tier]) => Command::New(
            Difficulty::from_str(tier).ok_or_else(|| format!("unknown difficulty '{}'", tier))?,
        ),
        ("new" | "n", _) => return Err("usage: new <easy|medium|hard>".to_string()),
        ("pause", []) => Command::Pause,
        ("resume", []) => Command::Resume,
        ("hint" | "h", []) => Command::Hint,
        ("save", [path]) => Command::Save(path.to_string()),
        ("load", [path]) => Command::Load(path.to_string()),
        ("save" | "load", _) => return Err(format!("usage: {} <path>", head)),
        ("help" | "?", []) => Command::Help,
        ("quit" | "q" | "exit", []) => Command::Quit,
        _ => return Err(format!("unknown command '{}' (try 'help')", line.trim())),
    };
    Ok(Some(command))
}

fn parse_number<T: std::str::FromStr>(word: &str, what: &str) -> Result<T, String> {
    word.parse()
        .map_err(|_| format!("{} must be a number, got '{}'", what, word))
}

pub const HELP: &str = "\
commands:
  place <slot> <x> <y>   put the piece in slot 0-2 with its origin at (x, y)
  undo                   revert the last placement
  restart                start over at the same difficulty
  new <easy|medium|hard> start a new game
  pause | resume
  hint                   show a spot where some piece fits
  save <path> | load <path>
  help | quit
";

fn column_labels(width: u8) -> String {
    let mut out = String::from("   ");
    for x in 0..width {
        out.push(char::from_digit(u32::from(x) % 10, 10).unwrap_or('?'));
    }
    out.push('\n');
    out
}

/// Plain board, top row first, with row and column labels
pub fn render_board(grid: &Grid) -> String {
    let mut out = String::new();
    for (row, line) in grid.to_ascii().lines().enumerate() {
        let y = grid.height() as usize - 1 - row;
        let _ = writeln!(out, "{:>2} {}", y, line);
    }
    out.push_str(&column_labels(grid.width()));
    out
}

/// Same layout as [`render_board`] with every block drawn in its piece colour
pub fn queue_board<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    for y in (0..grid.height() as i32).rev() {
        out.queue(Print(format!("{:>2} ", y)))?;
        for x in 0..grid.width() as i32 {
            match grid.get(x, y).flatten() {
                Some(rgb) => {
                    out.queue(SetForegroundColor(rgb_to_color(rgb)))?
                        .queue(Print('#'))?;
                }
                None => {
                    out.queue(ResetColor)?.queue(Print('.'))?;
                }
            }
        }
        out.queue(ResetColor)?.queue(Print('\n'))?;
    }
    out.queue(Print(column_labels(grid.width())))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Score line followed by the slate
pub fn render_status(session: &GameSession) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "score {}  best {}  undos {}  [{} / {}]",
        session.score(),
        session.high_scores().best(session.difficulty()),
        session.remaining_undos(),
        session.difficulty().as_str(),
        session.state().as_str()
    );
    for (slot, piece) in session.slate().slots().iter().enumerate() {
        match piece {
            Some(piece) => {
                let _ = writeln!(out, "  [{}] {}", slot, piece.shape.name);
            }
            None => {
                let _ = writeln!(out, "  [{}] -", slot);
            }
        }
    }
    out
}

/// Plain board followed by the status block
pub fn render(session: &GameSession) -> String {
    render_board(session.grid()) + &render_status(session)
}

/// Write the session as JSON to `path`
pub fn save_session(session: &GameSession, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = session.to_save().to_json()?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}

/// Resume the game saved at `path`. High scores are merged with those of
/// `current`, so loading an older save never loses a better result.
pub fn load_session(current: &GameSession, path: impl AsRef<Path>) -> Result<GameSession> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let save =
        SessionSave::from_json(&json).with_context(|| format!("parsing {}", path.display()))?;
    let loaded = GameSession::from_save(*current.config(), &save)
        .with_context(|| format!("restoring {}", path.display()))?;
    let high = loaded.high_scores().merged(current.high_scores());
    Ok(loaded.with_high_scores(high))
}

/// First slot and anchor where a piece on offer fits
pub fn hint(session: &GameSession) -> Option<(usize, Anchor)> {
    session
        .slate()
        .slots()
        .iter()
        .enumerate()
        .find_map(|(slot, piece)| {
            piece.and_then(|piece| find_fit(session.grid(), piece.shape).map(|a| (slot, a)))
        })
}
