//! Game controller - owns the complete game state
//!
//! This module ties together all core components: board, active piece, shadow,
//! shape picker, scoring and the gravity timer. It runs the
//! command → move → collide → lock → clear → spawn cycle and the status machine:
//!
//! ```text
//! NotStarted ──start──▶ InProgress ◀──toggle──▶ Paused
//!                           │
//!                      spawn blocked
//!                           ▼
//!                          End          (any) ──expire──▶ Expired
//! ```
//!
//! The board always contains the live piece. Each command works on a copy of the
//! board with the piece lifted out and commits the copy only when the move is
//! accepted, so a rejected command never leaves a partial mutation behind.

use crate::board::Board;
use crate::movement::{self, FallOutcome};
use crate::piece::ActivePiece;
use crate::rng::ShapePicker;
use crate::scoring::{clear_and_score, fall_interval_ms};
use crate::session::{ScoreSubmission, SessionConfig};
use crate::shadow::{project, ShadowPiece};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::timer::{ManualTimer, TimerId, TimerService};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameController<T: TimerService = ManualTimer> {
    board: Board,
    active: Option<ActivePiece>,
    shadow: ShadowPiece,
    picker: ShapePicker,
    timer: T,
    /// Schedule currently delivering gravity ticks.
    timer_id: Option<TimerId>,
    fall_interval_ms: u32,
    status: GameStatus,
    session: SessionConfig,
    score: u64,
    level: u32,
    lines: u32,
    /// Monotonic id for spawned pieces.
    piece_id: u32,
    has_focus: bool,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    /// Terminal score waiting for the recorder.
    submission: Option<ScoreSubmission>,
}

impl<T: TimerService> GameController<T> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32, session: SessionConfig, timer: T) -> Self {
        Self {
            board: Board::new(),
            active: None,
            shadow: ShadowPiece::new(),
            picker: ShapePicker::new(seed),
            timer,
            timer_id: None,
            fall_interval_ms: fall_interval_ms(INITIAL_LEVEL),
            status: GameStatus::NotStarted,
            session,
            score: 0,
            level: INITIAL_LEVEL,
            lines: 0,
            piece_id: 0,
            has_focus: true,
            last_event: None,
            submission: None,
        }
    }

    /// Start the game, schedule gravity and spawn the first piece
    ///
    /// Refused unless the game has not started yet and the session allows
    /// another attempt.
    pub fn start(&mut self) -> bool {
        if self.status != GameStatus::NotStarted || !self.session.should_play() {
            return false;
        }
        self.status = GameStatus::InProgress;
        self.reschedule();
        if self.active.is_some() {
            self.refresh_shadow();
        } else {
            self.spawn_piece();
        }
        true
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn seed(&self) -> u32 {
        self.picker.seed()
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    /// Id of the schedule currently delivering ticks
    pub fn timer_id(&self) -> Option<TimerId> {
        self.timer_id
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn shadow(&self) -> &ShadowPiece {
        &self.shadow
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn session(&self) -> &SessionConfig {
        &self.session
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_render_grid(&mut out.grid);
        out.shadow.clone_from(&self.shadow);
        out.overlay_shadow();

        out.active = self.active.map(ActiveSnapshot::from);
        out.status = self.status;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.fall_interval_ms = self.fall_interval_ms;
        out.timer_id = self.timer_id.map_or(0, TimerId::get);
        out.piece_id = self.piece_id;
        out.seed = self.picker.seed();
        out.has_focus = self.has_focus;
        out.previous_score = self.session.previous_score;
        out.multiple_attempts = self.session.multiple_attempts;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a command
    ///
    /// Returns whether the game state changed. Invalid moves and rotations are
    /// ordinary rejections; commands arriving while the game is not in progress or
    /// the host has no input focus are ignored. Only the pause toggle gets through
    /// while paused.
    pub fn apply_command(&mut self, command: Command) -> bool {
        if command == Command::TogglePause {
            return self.toggle_pause();
        }
        if self.status != GameStatus::InProgress || !self.has_focus {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        let mut work = self.board.clone();
        work.lift(&piece.cells());

        let moved = match command {
            Command::Left => movement::shift(&work, &piece, -1),
            Command::Right => movement::shift(&work, &piece, 1),
            Command::Rotate => movement::rotate(&work, &piece),
            Command::Down => match movement::fall(&work, &piece) {
                FallOutcome::Fell(next) => Some(next),
                FallOutcome::Landed => {
                    self.lock_piece();
                    return true;
                }
            },
            Command::TogglePause => None,
        };

        let Some(next) = moved else {
            return false;
        };

        self.shadow = project(&work, &next);
        work.place(&next.cells(), next.shape);
        self.board = work;
        self.active = Some(next);
        true
    }

    /// Gravity tick delivered by the timer
    ///
    /// Ticks from a schedule that has since been cancelled are dropped.
    pub fn on_tick(&mut self, id: TimerId) -> bool {
        if self.timer_id != Some(id) {
            return false;
        }
        self.apply_command(Command::Down)
    }

    /// Host reports whether the play surface has input focus
    pub fn set_focus(&mut self, focused: bool) {
        self.has_focus = focused;
    }

    /// Enclosing session expired; freezes the game for good
    pub fn expire(&mut self) -> bool {
        if self.status == GameStatus::Expired {
            return false;
        }
        self.status = GameStatus::Expired;
        self.cancel_timer();
        true
    }

    /// Return to `NotStarted` with an empty board
    ///
    /// The shape sequence restarts from the seed. An expired game stays expired,
    /// and a single-attempt game cannot be thrown away while it is still running.
    pub fn reset(&mut self) -> bool {
        if self.status == GameStatus::Expired {
            return false;
        }
        if self.session.single_attempt()
            && matches!(self.status, GameStatus::InProgress | GameStatus::Paused)
        {
            return false;
        }
        self.cancel_timer();
        self.board.clear();
        self.active = None;
        self.shadow.clear();
        self.picker.rewind();
        self.fall_interval_ms = fall_interval_ms(INITIAL_LEVEL);
        self.status = GameStatus::NotStarted;
        self.score = 0;
        self.level = INITIAL_LEVEL;
        self.lines = 0;
        self.piece_id = 0;
        self.last_event = None;
        true
    }

    /// Load a position: `board` holds placed cells only, `piece` becomes the live piece
    ///
    /// Rejected when the game is paused or over, or when the piece does not fit.
    pub fn restore(&mut self, board: Board, piece: ActivePiece) -> bool {
        if !matches!(self.status, GameStatus::NotStarted | GameStatus::InProgress) {
            return false;
        }
        if !piece.shape.is_playable() || !piece.fits(&board) {
            return false;
        }
        self.board = board;
        self.board.place(&piece.cells(), piece.shape);
        self.active = Some(piece);
        self.refresh_shadow();
        true
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Take the terminal score; yields a value once per finished game.
    pub fn take_score_submission(&mut self) -> Option<ScoreSubmission> {
        self.submission.take()
    }

    fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::InProgress => {
                self.status = GameStatus::Paused;
                true
            }
            GameStatus::Paused => {
                self.status = GameStatus::InProgress;
                true
            }
            _ => false,
        }
    }

    /// Lock the active piece where it is, clear rows and spawn the next piece
    ///
    /// The piece cells are already part of the board.
    fn lock_piece(&mut self) {
        if self.active.take().is_none() {
            return;
        }
        self.shadow.clear();

        let timer_id = self.timer_id.unwrap_or(TimerId::NONE);
        let cleared = clear_and_score(&mut self.board, timer_id);
        self.score += cleared.score_gained;
        self.level += cleared.levels_gained;
        self.lines += cleared.rows_cleared;

        self.reschedule();

        self.last_event = Some(LockEvent {
            rows_cleared: cleared.rows_cleared,
            score_gained: cleared.score_gained,
            level: self.level,
            fall_interval_ms: self.fall_interval_ms,
        });

        self.spawn_piece();
    }

    /// Spawn a new piece; ends the game when the spawn cells are taken
    fn spawn_piece(&mut self) -> bool {
        let piece = ActivePiece::spawn(self.picker.draw());
        if !piece.fits(&self.board) {
            self.finish();
            return false;
        }

        self.board.place(&piece.cells(), piece.shape);
        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        self.refresh_shadow();
        true
    }

    fn finish(&mut self) {
        self.status = GameStatus::End;
        self.active = None;
        self.shadow.clear();
        self.cancel_timer();

        self.submission = Some(ScoreSubmission {
            score: self.score,
            level: self.level,
            rows_cleared: self.lines,
            single_attempt: self.session.single_attempt(),
        });
        // The finished game now counts as this player's earlier attempt.
        self.session.previous_score = Some(self.score);
    }

    /// Replace the gravity schedule with one matching the current level
    fn reschedule(&mut self) {
        self.cancel_timer();
        self.fall_interval_ms = fall_interval_ms(self.level);
        self.timer_id = Some(self.timer.schedule(self.fall_interval_ms));
    }

    fn cancel_timer(&mut self) {
        if let Some(id) = self.timer_id.take() {
            self.timer.cancel(id);
        }
    }

    fn refresh_shadow(&mut self) {
        self.shadow = match self.active {
            Some(piece) => {
                let mut work = self.board.clone();
                work.lift(&piece.cells());
                project(&work, &piece)
            }
            None => ShadowPiece::new(),
        };
    }
}

impl GameController<ManualTimer> {
    /// Game driven by a [`ManualTimer`] with default session settings
    pub fn with_seed(seed: u32) -> Self {
        Self::new(seed, SessionConfig::default(), ManualTimer::new())
    }

    /// Fire the currently scheduled gravity tick
    pub fn tick(&mut self) -> bool {
        match self.timer.active() {
            Some((id, _)) => self.on_tick(id),
            None => false,
        }
    }
}

impl Default for GameController<ManualTimer> {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
