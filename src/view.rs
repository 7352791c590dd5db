//! Text view of a [`GameSnapshot`] for terminal hosts.
//!
//! [`render_lines`] is pure and allocation-light so it can be tested without a
//! terminal; [`TerminalView`] flushes those lines through crossterm.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableFocusChange, EnableFocusChange},
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::GameSnapshot;
use crate::types::{GameStatus, Shape, SHADOW_MARKER};

/// Two columns per board cell.
pub const CELL_EMPTY: &str = " .";
pub const CELL_SHADOW: &str = "::";
pub const CELL_BLOCK: &str = "[]";

fn cell_text(value: i8) -> &'static str {
    match value {
        0 => CELL_EMPTY,
        SHADOW_MARKER => CELL_SHADOW,
        _ => CELL_BLOCK,
    }
}

fn cell_color(value: i8) -> Color {
    if value == SHADOW_MARKER {
        return Color::DarkGrey;
    }
    match u8::try_from(value).ok().and_then(Shape::from_id) {
        Some(Shape::Cube) => Color::Yellow,
        Some(Shape::I) => Color::Cyan,
        Some(Shape::T) => Color::Magenta,
        Some(Shape::InverseL) => Color::Blue,
        Some(Shape::L) => Color::DarkYellow,
        Some(Shape::Z) => Color::Red,
        Some(Shape::InverseZ) => Color::Green,
        _ => Color::Grey,
    }
}

fn status_line(snapshot: &GameSnapshot) -> &'static str {
    match snapshot.status {
        GameStatus::NotStarted if snapshot.can_start() => "PRESS R",
        GameStatus::NotStarted => "NO ATTEMPTS LEFT",
        GameStatus::InProgress if !snapshot.has_focus => "NO FOCUS",
        GameStatus::InProgress => "PLAYING",
        GameStatus::Paused => "PAUSED",
        GameStatus::End => "GAME OVER",
        GameStatus::Expired => "EXPIRED",
    }
}

/// Board rows framed by borders, with the HUD to the right of the top rows.
pub fn render_lines(snapshot: &GameSnapshot) -> Vec<String> {
    let width = snapshot.grid.first().map_or(0, |row| row.len());
    let mut hud = vec![
        format!("Score  {}", snapshot.score),
        format!("Level  {}", snapshot.level),
        format!("Lines  {}", snapshot.lines),
        format!("Speed  {}ms", snapshot.fall_interval_ms),
        status_line(snapshot).to_string(),
    ];
    if let Some(previous) = snapshot.previous_score {
        hud.push(format!("Prev   {}", previous));
    }

    let mut lines = Vec::with_capacity(snapshot.grid.len() + 1);
    for (y, row) in snapshot.grid.iter().enumerate() {
        let mut line = String::with_capacity(width * 2 + 24);
        line.push('|');
        for &value in row {
            line.push_str(cell_text(value));
        }
        line.push('|');
        if let Some(text) = hud.get(y) {
            line.push_str("  ");
            line.push_str(text);
        }
        lines.push(line);
    }
    lines.push(format!("+{}+", "-".repeat(width * 2)));
    lines
}

pub struct TerminalView {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(EnableFocusChange)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(DisableFocusChange)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Full redraw of one snapshot.
    pub fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;

        for (y, row) in snapshot.grid.iter().enumerate() {
            self.buf.queue(cursor::MoveTo(0, y as u16))?;
            self.buf.queue(Print('|'))?;
            for &value in row {
                self.buf.queue(SetForegroundColor(cell_color(value)))?;
                self.buf.queue(Print(cell_text(value)))?;
            }
            self.buf.queue(ResetColor)?;
            self.buf.queue(Print('|'))?;
        }

        // HUD and bottom border come from the plain-text rendering.
        for (y, line) in render_lines(snapshot).iter().enumerate() {
            let border = snapshot.grid.len();
            if y < border {
                let hud_start = snapshot.grid[y].len() * 2 + 2;
                if let Some(hud) = line.get(hud_start..) {
                    self.buf.queue(cursor::MoveTo(hud_start as u16, y as u16))?;
                    self.buf.queue(Print(hud))?;
                }
            } else {
                self.buf.queue(cursor::MoveTo(0, y as u16))?;
                self.buf.queue(Print(line))?;
            }
        }

        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}
