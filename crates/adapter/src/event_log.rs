//! JSON-lines event log.
//!
//! A dedicated task owns the file; the session only pushes records into an
//! unbounded channel, so a slow disk never stalls the game.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use tourney_tetris_core::GameSnapshot;
use tourney_tetris_types::LockEvent;

/// One processed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub ts: u64,
    pub event: String,
    pub applied: bool,
    pub status: String,
    pub score: u64,
    pub level: u32,
    pub lines: u32,
    pub timer_id: u32,
    pub piece_id: u32,
    pub fall_interval_ms: u32,
    pub shadow: ArrayVec<[i8; 2], 4>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock: Option<LockRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockRecord {
    pub rows_cleared: u32,
    pub score_gained: u64,
}

impl From<LockEvent> for LockRecord {
    fn from(ev: LockEvent) -> Self {
        Self {
            rows_cleared: ev.rows_cleared,
            score_gained: ev.score_gained,
        }
    }
}

impl EventRecord {
    pub fn new(
        ts: u64,
        event: &str,
        applied: bool,
        snapshot: &GameSnapshot,
        lock: Option<LockEvent>,
    ) -> Self {
        Self {
            ts,
            event: event.to_string(),
            applied,
            status: snapshot.status.as_str().to_string(),
            score: snapshot.score,
            level: snapshot.level,
            lines: snapshot.lines,
            timer_id: snapshot.timer_id,
            piece_id: snapshot.piece_id,
            fall_interval_ms: snapshot.fall_interval_ms,
            shadow: snapshot.shadow.iter().map(|&(x, y)| [x, y]).collect(),
            lock: lock.map(LockRecord::from),
        }
    }
}

/// Handle to the log writer; a disabled log drops every record
#[derive(Debug, Default)]
pub struct EventLog {
    tx: Option<mpsc::UnboundedSender<EventRecord>>,
}

impl EventLog {
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// Spawn the writer task appending to `path`
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(path: String) -> (Self, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::unbounded_channel::<EventRecord>();
        let task = tokio::spawn(async move {
            use tokio::fs::OpenOptions;
            use tokio::io::AsyncWriteExt;

            let mut file = match OpenOptions::new().create(true).append(true).open(&path).await {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("[Session] event log {} unavailable: {}", path, e);
                    return;
                }
            };

            let mut buf: Vec<u8> = Vec::with_capacity(512);
            while let Some(rec) = rx.recv().await {
                buf.clear();
                if serde_json::to_writer(&mut buf, &rec).is_err() {
                    continue;
                }
                buf.push(b'\n');
                if file.write_all(&buf).await.is_err() {
                    break;
                }
            }

            let _ = file.flush().await;
        });
        (Self { tx: Some(tx) }, task)
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    pub fn record(&self, rec: EventRecord) {
        if let Some(tx) = self.tx.as_ref() {
            let _ = tx.send(rec);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourney_tetris_core::GameController;

    #[test]
    fn test_record_from_snapshot() {
        let mut game = GameController::with_seed(1);
        game.start();
        let snap = game.snapshot();

        let rec = EventRecord::new(7, "start", true, &snap, None);
        assert_eq!(rec.status, "inProgress");
        assert_eq!(rec.timer_id, 1);
        assert_eq!(rec.shadow.len(), snap.shadow.len());

        let line = serde_json::to_string(&rec).unwrap();
        assert!(!line.contains("\"lock\""));
    }

    #[tokio::test]
    async fn test_writer_appends_records() {
        let path = std::env::temp_dir().join(format!(
            "tourney-tetris-events-{}-{}.jsonl",
            std::process::id(),
            crate::recorder::current_timestamp_ms()
        ));
        let (log, task) = EventLog::spawn(path.display().to_string());
        let snap = GameSnapshot::default();
        log.record(EventRecord::new(1, "start", false, &snap, None));
        log.record(EventRecord::new(2, "tick", false, &snap, None));
        drop(log);
        task.await.unwrap();

        let text = tokio::fs::read_to_string(&path).await.unwrap();
        let events: Vec<EventRecord> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].event, "tick");

        let _ = tokio::fs::remove_file(&path).await;
    }
}
