//! Terminal Tetris runner (default binary).
//!
//! Reads [`RuntimeConfig`] from the environment, starts a [`SessionHandle`] and
//! forwards crossterm key and focus events to it. The session posts a snapshot
//! after every processed event; the newest one is drawn.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tourney_tetris::adapter::{RuntimeConfig, SessionEvent, SessionHandle};
use tourney_tetris::input::{handle_key_event, should_quit, should_reset};
use tourney_tetris::view::TerminalView;

/// Input poll timeout; bounds how stale a drawn frame can get.
const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    // The view owns the screen from here on; keep session logs off it.
    let config = RuntimeConfig {
        quiet: true,
        ..RuntimeConfig::from_env()
    };
    let mut session = SessionHandle::start(config)?;

    let mut term = TerminalView::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();

    let report = session.finish()?;
    println!(
        "Final score {} (level {}, {} rows, {}, submission {})",
        report.snapshot.score,
        report.snapshot.level,
        report.snapshot.lines,
        report.snapshot.status.as_str(),
        report.progress.as_str()
    );
    result
}

fn run(term: &mut TerminalView, session: &mut SessionHandle) -> Result<()> {
    session.send(SessionEvent::Start);
    let frame = Duration::from_millis(FRAME_MS);

    loop {
        if let Some(snapshot) = session.latest_snapshot() {
            term.draw(&snapshot)?;
        }

        if !event::poll(frame)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    return Ok(());
                }
                if should_reset(key) {
                    session.send(SessionEvent::Reset);
                    session.send(SessionEvent::Start);
                } else if let Some(command) = handle_key_event(key) {
                    session.send(SessionEvent::Command(command));
                }
            }
            Event::FocusGained => {
                session.send(SessionEvent::Focus(true));
            }
            Event::FocusLost => {
                session.send(SessionEvent::Focus(false));
            }
            _ => {}
        }
    }
}
