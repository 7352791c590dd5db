//! Score recorders - where the terminal score of a game goes
//!
//! The controller emits one [`ScoreSubmission`] per finished game. The session
//! hands it to a [`ScoreRecorder`] exactly once; failures are reported, never
//! retried.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use tourney_tetris_core::ScoreSubmission;

/// Recorder failure
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("score file {path} could not be written: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("score could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("score was rejected: {0}")]
    Rejected(String),
}

/// Destination for terminal scores
pub trait ScoreRecorder {
    fn record(&mut self, submission: &ScoreSubmission) -> Result<(), RecordError>;
}

impl<R: ScoreRecorder + ?Sized> ScoreRecorder for Box<R> {
    fn record(&mut self, submission: &ScoreSubmission) -> Result<(), RecordError> {
        (**self).record(submission)
    }
}

/// One line of the score file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u64,
    pub level: u32,
    pub rows_cleared: u32,
    #[serde(rename = "singleAttempt")]
    pub single_attempt: bool,
    pub ts: u64,
}

impl ScoreRecord {
    pub fn new(submission: &ScoreSubmission, ts: u64) -> Self {
        Self {
            score: submission.score,
            level: submission.level,
            rows_cleared: submission.rows_cleared,
            single_attempt: submission.single_attempt,
            ts,
        }
    }
}

/// Appends one JSON line per submission
#[derive(Debug, Clone)]
pub struct JsonlScoreRecorder {
    path: PathBuf,
}

impl JsonlScoreRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> RecordError {
        RecordError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl ScoreRecorder for JsonlScoreRecorder {
    fn record(&mut self, submission: &ScoreSubmission) -> Result<(), RecordError> {
        let mut line = serde_json::to_vec(&ScoreRecord::new(submission, current_timestamp_ms()))?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(&line).map_err(|e| self.io_error(e))?;
        file.flush().map_err(|e| self.io_error(e))
    }
}

/// Discards every score
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRecorder;

impl ScoreRecorder for NullRecorder {
    fn record(&mut self, _submission: &ScoreSubmission) -> Result<(), RecordError> {
        Ok(())
    }
}

/// Keeps scores in memory; can be told to refuse them
#[derive(Debug, Clone, Default)]
pub struct MemoryRecorder {
    pub recorded: Vec<ScoreSubmission>,
    pub reject: bool,
}

impl ScoreRecorder for MemoryRecorder {
    fn record(&mut self, submission: &ScoreSubmission) -> Result<(), RecordError> {
        if self.reject {
            return Err(RecordError::Rejected("recorder closed".to_string()));
        }
        self.recorded.push(*submission);
        Ok(())
    }
}

/// Get current timestamp in milliseconds
pub(crate) fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
