//! Timer module - the gravity timer interface
//!
//! The engine owns the fall interval but not the clock. It asks a
//! [`TimerService`] to deliver a recurring gravity tick and to cancel the previous
//! schedule whenever the interval changes. Every schedule returns a fresh,
//! increasing [`TimerId`]; ticks are tagged with the id that produced them so a
//! tick from a cancelled schedule can be recognised and dropped.

/// Identifier of a scheduled gravity timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TimerId(u32);

impl TimerId {
    /// Id used before anything was scheduled
    pub const NONE: TimerId = TimerId(0);

    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Scheduling primitive for the recurring gravity tick
pub trait TimerService {
    /// Start delivering a tick every `interval_ms` and return its id
    fn schedule(&mut self, interval_ms: u32) -> TimerId;

    /// Stop the schedule with the given id (no-op when unknown)
    fn cancel(&mut self, id: TimerId);
}

impl<T: TimerService + ?Sized> TimerService for Box<T> {
    fn schedule(&mut self, interval_ms: u32) -> TimerId {
        (**self).schedule(interval_ms)
    }

    fn cancel(&mut self, id: TimerId) {
        (**self).cancel(id)
    }
}

/// Deterministic timer for tests and headless hosts
///
/// Nothing fires on its own: the host reads [`ManualTimer::active`] and feeds
/// ticks to the controller itself.
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    last_id: u32,
    active: Option<(TimerId, u32)>,
    scheduled: u32,
    cancelled: u32,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently scheduled `(id, interval_ms)`
    pub fn active(&self) -> Option<(TimerId, u32)> {
        self.active
    }

    /// Total number of schedules requested
    pub fn scheduled_count(&self) -> u32 {
        self.scheduled
    }

    /// Total number of effective cancellations
    pub fn cancelled_count(&self) -> u32 {
        self.cancelled
    }
}

impl TimerService for ManualTimer {
    fn schedule(&mut self, interval_ms: u32) -> TimerId {
        self.last_id = self.last_id.wrapping_add(1).max(1);
        let id = TimerId(self.last_id);
        self.active = Some((id, interval_ms));
        self.scheduled += 1;
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if matches!(self.active, Some((active, _)) if active == id) {
            self.active = None;
            self.cancelled += 1;
        }
    }
}
