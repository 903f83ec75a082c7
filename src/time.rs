//! Wall-clock abstraction and one-shot timers.
//!
//! Everything time-dependent (throttling, reveal delays, the footer year)
//! reads the clock through the [`Clock`] trait so tests can drive time by
//! hand. [`SystemClock`] is the production implementation; [`FakeClock`]
//! shares its instant through `Rc<Cell>` so a test can keep a handle and
//! advance time after handing the clock to the app.
//!
//! Reveal delays run through [`TimerQueue`]: one-shot timers with explicit
//! deadlines and cancellable handles. The host pumps the queue (`fire_due`)
//! whenever its own scheduling says a deadline passed; `next_deadline` tells
//! it when that is.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Datelike, Local, TimeZone, Utc};

/// Source of wall-clock time, injected everywhere time matters.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> u64;
    /// Current calendar year.
    fn year(&self) -> i32;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    fn year(&self) -> i32 {
        Local::now().year()
    }
}

/// Manually driven clock for tests.
///
/// Clones share the same instant, so advancing any handle advances them all.
#[derive(Debug, Clone, Default)]
pub struct FakeClock {
    now: Rc<Cell<u64>>,
}

impl FakeClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get() + delta_ms);
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn year(&self) -> i32 {
        Utc.timestamp_millis_opt(self.now.get() as i64)
            .single()
            .map(|dt| dt.year())
            .unwrap_or(1970)
    }
}

/// Cancellable one-shot timer handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct TimerEntry<T> {
    id: TimerId,
    fire_at_ms: u64,
    payload: T,
}

/// One-shot timers ordered by deadline, ties in scheduling order.
#[derive(Debug)]
pub struct TimerQueue<T> {
    next_id: u64,
    entries: Vec<TimerEntry<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Schedule a payload to fire at `fire_at_ms`.
    pub fn schedule(&mut self, fire_at_ms: u64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(TimerEntry {
            id,
            fire_at_ms,
            payload,
        });
        id
    }

    /// Drop a pending timer. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Remove and return every payload whose deadline is at or before
    /// `now_ms`, ordered by deadline and then by scheduling order.
    pub fn fire_due(&mut self, now_ms: u64) -> Vec<T> {
        let mut due = Vec::new();
        let mut pending = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.fire_at_ms <= now_ms {
                due.push(entry);
            } else {
                pending.push(entry);
            }
        }
        self.entries = pending;
        due.sort_by_key(|e| (e.fire_at_ms, e.id.0));
        due.into_iter().map(|e| e.payload).collect()
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.fire_at_ms).min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
