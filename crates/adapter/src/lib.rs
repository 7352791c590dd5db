//! Adapter module - async runtime around the game controller
//!
//! The core crate is clock-free and I/O-free. This crate supplies what a running
//! game needs around it:
//!
//! - [`timer::TokioTimer`]: gravity ticks from tokio interval tasks
//! - [`runtime::Session`]: controller + renderer + score recorder, driven one
//!   [`runtime::SessionEvent`] at a time
//! - [`runtime::SessionHandle`]: owns a tokio runtime so a synchronous host loop
//!   can push events and poll snapshots
//! - [`recorder`]: score recorders (JSON lines, memory, null)
//! - [`event_log`]: optional JSON-lines log of every processed event
//!
//! # Environment Variables
//!
//! - `TETRIS_SEED`: shape sequence seed (default: 1)
//! - `TETRIS_MULTI_PLAY`: allow more than one attempt (default: true)
//! - `TETRIS_PREV_SCORE`: score of an earlier attempt, if any
//! - `TETRIS_LOG_PATH`: event log file
//! - `TETRIS_SCORE_PATH`: score file
//! - `TETRIS_MAX_PENDING`: event queue capacity (default: 64)
//! - `TETRIS_QUIET`: no console log lines (default: false; the terminal binary forces it on)
//!
//! # Event Flow
//!
//! ```text
//! host keys/touch ─┐
//! TokioTimer ticks ─┼─▶ mpsc queue ─▶ Session::handle ─▶ Renderer
//! focus/lifecycle ─┘                        │
//!                                           └─▶ ScoreRecorder (once, at End)
//! ```

pub mod config;
pub mod event_log;
pub mod recorder;
pub mod runtime;
pub mod timer;

pub use tourney_tetris_core as core;
pub use tourney_tetris_types as types;

pub use config::RuntimeConfig;
pub use event_log::{EventLog, EventRecord};
pub use recorder::{
    JsonlScoreRecorder, MemoryRecorder, NullRecorder, RecordError, ScoreRecord, ScoreRecorder,
};
pub use runtime::{
    run_session, ChannelRenderer, Flow, Renderer, Session, SessionEvent, SessionHandle,
    SessionReport,
};
pub use timer::TokioTimer;
