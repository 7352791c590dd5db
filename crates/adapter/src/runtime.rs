//! Session runtime.
//!
//! One tokio task owns a [`Session`] and drains a bounded queue of
//! [`SessionEvent`]s: host input, focus changes, lifecycle requests and the
//! gravity ticks posted by [`TokioTimer`]. Every event is applied to the
//! controller, then the fresh snapshot goes to the renderer. [`SessionHandle`]
//! bridges a synchronous host loop to that task.

use std::fmt;

use anyhow::Context;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use tourney_tetris_core::{
    GameController, GameSnapshot, ProgressState, ScoreSubmission, TimerId, TimerService,
};
use tourney_tetris_types::Command;

use crate::config::RuntimeConfig;
use crate::event_log::{EventLog, EventRecord};
use crate::recorder::{current_timestamp_ms, JsonlScoreRecorder, NullRecorder, ScoreRecorder};
use crate::timer::TokioTimer;

/// Everything the session loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Start,
    Command(Command),
    Tick(TimerId),
    Focus(bool),
    Expire,
    Reset,
    Shutdown,
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::Start => "start",
            SessionEvent::Command(c) => c.as_str(),
            SessionEvent::Tick(_) => "tick",
            SessionEvent::Focus(true) => "focus",
            SessionEvent::Focus(false) => "blur",
            SessionEvent::Expire => "expire",
            SessionEvent::Reset => "reset",
            SessionEvent::Shutdown => "shutdown",
        }
    }
}

/// Receives a snapshot after every processed event.
pub trait Renderer {
    fn render(&mut self, snapshot: &GameSnapshot);
}

impl<F: FnMut(&GameSnapshot)> Renderer for F {
    fn render(&mut self, snapshot: &GameSnapshot) {
        self(snapshot)
    }
}

/// Forwards snapshots to a host polling [`SessionHandle::try_recv_snapshot`].
#[derive(Debug, Clone)]
pub struct ChannelRenderer {
    tx: mpsc::UnboundedSender<GameSnapshot>,
}

impl ChannelRenderer {
    pub fn new(tx: mpsc::UnboundedSender<GameSnapshot>) -> Self {
        Self { tx }
    }
}

impl Renderer for ChannelRenderer {
    fn render(&mut self, snapshot: &GameSnapshot) {
        let _ = self.tx.send(snapshot.clone());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Final state of a session once its loop stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub snapshot: GameSnapshot,
    pub progress: ProgressState,
}

/// Controller plus its collaborators.
pub struct Session<T: TimerService, R: Renderer, S: ScoreRecorder> {
    controller: GameController<T>,
    renderer: R,
    recorder: S,
    progress: ProgressState,
    snapshot: GameSnapshot,
    log: EventLog,
    quiet: bool,
}

impl<T: TimerService, R: Renderer, S: ScoreRecorder> Session<T, R, S> {
    pub fn new(controller: GameController<T>, renderer: R, recorder: S) -> Self {
        let mut snapshot = GameSnapshot::default();
        controller.snapshot_into(&mut snapshot);
        Self {
            controller,
            renderer,
            recorder,
            progress: ProgressState::NotStarted,
            snapshot,
            log: EventLog::disabled(),
            quiet: false,
        }
    }

    pub fn with_event_log(mut self, log: EventLog) -> Self {
        self.log = log;
        self
    }

    /// Keep console output off a screen owned by a terminal view.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn controller(&self) -> &GameController<T> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut GameController<T> {
        &mut self.controller
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn recorder(&self) -> &S {
        &self.recorder
    }

    /// Outcome of the score hand-off
    pub fn progress(&self) -> ProgressState {
        self.progress
    }

    /// Snapshot taken after the last processed event
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Process one event and push the resulting snapshot to the renderer.
    pub fn handle(&mut self, event: SessionEvent) -> Flow {
        let applied = match event {
            SessionEvent::Start => {
                let started = self.controller.start();
                if started {
                    self.info(format_args!("[Session] Started (seed {})", self.controller.seed()));
                } else {
                    self.info(format_args!(
                        "[Session] Start refused (status {})",
                        self.controller.status().as_str()
                    ));
                }
                started
            }
            SessionEvent::Command(command) => self.controller.apply_command(command),
            SessionEvent::Tick(id) => self.controller.on_tick(id),
            SessionEvent::Focus(focused) => {
                self.controller.set_focus(focused);
                true
            }
            SessionEvent::Expire => {
                let expired = self.controller.expire();
                if expired {
                    self.info(format_args!("[Session] Expired"));
                }
                expired
            }
            SessionEvent::Reset => {
                let reset = self.controller.reset();
                if reset {
                    self.info(format_args!("[Session] Reset"));
                } else {
                    self.info(format_args!(
                        "[Session] Reset refused (status {})",
                        self.controller.status().as_str()
                    ));
                }
                reset
            }
            SessionEvent::Shutdown => {
                self.info(format_args!("[Session] Shutdown"));
                return Flow::Stop;
            }
        };

        let lock = self.controller.take_last_event();
        if let Some(submission) = self.controller.take_score_submission() {
            self.submit(submission);
        }

        self.controller.snapshot_into(&mut self.snapshot);
        self.renderer.render(&self.snapshot);

        if self.log.is_enabled() {
            self.log.record(EventRecord::new(
                current_timestamp_ms(),
                event.name(),
                applied,
                &self.snapshot,
                lock,
            ));
        }

        Flow::Continue
    }

    fn submit(&mut self, submission: ScoreSubmission) {
        self.info(format_args!(
            "[Session] Game over: score {} level {} rows {}",
            submission.score, submission.level, submission.rows_cleared
        ));
        self.progress = ProgressState::InProgress;
        match self.recorder.record(&submission) {
            Ok(()) => {
                self.progress = ProgressState::Completed;
                self.info(format_args!("[Recorder] Score {} recorded", submission.score));
            }
            Err(e) => {
                self.progress = ProgressState::Failed;
                self.warn(format_args!("[Recorder] Score submission failed: {}", e));
            }
        }
    }

    fn info(&self, line: fmt::Arguments<'_>) {
        if !self.quiet {
            println!("{}", line);
        }
    }

    fn warn(&self, line: fmt::Arguments<'_>) {
        if !self.quiet {
            eprintln!("{}", line);
        }
    }

    pub fn into_report(self) -> SessionReport {
        SessionReport {
            snapshot: self.snapshot,
            progress: self.progress,
        }
    }
}

/// Drain the queue until `Shutdown` arrives.
///
/// The session's own [`TokioTimer`] holds a sender, so the queue never closes
/// on its own while the session lives.
pub async fn run_session<T, R, S>(
    mut session: Session<T, R, S>,
    mut rx: mpsc::Receiver<SessionEvent>,
) -> SessionReport
where
    T: TimerService,
    R: Renderer,
    S: ScoreRecorder,
{
    while let Some(event) = rx.recv().await {
        if session.handle(event) == Flow::Stop {
            break;
        }
    }
    session.into_report()
}

type RuntimeSession = Session<TokioTimer, ChannelRenderer, Box<dyn ScoreRecorder + Send>>;

/// Running session for a synchronous host loop.
pub struct SessionHandle {
    rt: Runtime,
    tx: mpsc::Sender<SessionEvent>,
    snapshot_rx: mpsc::UnboundedReceiver<GameSnapshot>,
    task: JoinHandle<SessionReport>,
    log_task: Option<JoinHandle<()>>,
    quiet: bool,
}

impl SessionHandle {
    /// Build the runtime and spawn the session loop.
    pub fn start(config: RuntimeConfig) -> anyhow::Result<Self> {
        let rt = Runtime::new().context("failed to create tokio runtime")?;

        let (tx, rx) = mpsc::channel::<SessionEvent>(config.max_pending.max(1));
        let (snapshot_tx, snapshot_rx) = mpsc::unbounded_channel::<GameSnapshot>();

        let recorder: Box<dyn ScoreRecorder + Send> = match config.score_path.as_deref() {
            Some(path) => Box::new(JsonlScoreRecorder::new(path)),
            None => Box::new(NullRecorder),
        };

        let (task, log_task) = {
            let _guard = rt.enter();
            let (log, log_task) = match config.log_path.clone() {
                Some(path) => {
                    let (log, task) = EventLog::spawn(path);
                    (log, Some(task))
                }
                None => (EventLog::disabled(), None),
            };

            let controller =
                GameController::new(config.seed, config.session(), TokioTimer::new(tx.clone()));
            let session: RuntimeSession =
                Session::new(controller, ChannelRenderer::new(snapshot_tx), recorder)
                    .with_event_log(log)
                    .with_quiet(config.quiet);
            (rt.spawn(run_session(session, rx)), log_task)
        };

        if !config.quiet {
            println!(
                "[Session] Runtime ready (seed {}, queue {})",
                config.seed,
                config.max_pending.max(1)
            );
        }

        Ok(Self {
            rt,
            tx,
            snapshot_rx,
            task,
            log_task,
            quiet: config.quiet,
        })
    }

    /// Queue an event without blocking; `false` when it was dropped.
    pub fn send(&self, event: SessionEvent) -> bool {
        match self.tx.try_send(event) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                if !self.quiet {
                    eprintln!("[Session] Queue full, dropped {}", event.name());
                }
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => false,
        }
    }

    pub fn try_recv_snapshot(&mut self) -> Option<GameSnapshot> {
        self.snapshot_rx.try_recv().ok()
    }

    /// Drain pending snapshots and keep the newest.
    pub fn latest_snapshot(&mut self) -> Option<GameSnapshot> {
        let mut latest = None;
        while let Some(snapshot) = self.try_recv_snapshot() {
            latest = Some(snapshot);
        }
        latest
    }

    /// Stop the session loop and wait for its report.
    pub fn finish(self) -> anyhow::Result<SessionReport> {
        let Self {
            rt,
            tx,
            task,
            log_task,
            ..
        } = self;

        rt.block_on(async move {
            // A closed queue means the loop already stopped.
            let _ = tx.send(SessionEvent::Shutdown).await;
            let report = task.await.context("session task failed")?;
            if let Some(log_task) = log_task {
                let _ = log_task.await;
            }
            Ok(report)
        })
    }
}
