//! Drop-excess rate limiting.
//!
//! Scroll events arrive far faster than the effects need to run. A
//! [`Throttle`] admits at most one call per window, measured on the wall
//! clock, and drops the rest outright: nothing is queued, nothing trails
//! after the caller goes quiet. The window restarts at each admitted call.

use crate::time::Clock;

/// Rate gate: at most one admission per `wait_ms` window.
#[derive(Debug, Clone)]
pub struct Throttle {
    wait_ms: u64,
    last_admitted_ms: Option<u64>,
}

impl Throttle {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            last_admitted_ms: None,
        }
    }

    /// Admit or drop a call happening at `now_ms`.
    ///
    /// The first call is always admitted; later calls are admitted once at
    /// least `wait_ms` has passed since the last admission. Dropped calls
    /// leave the window untouched.
    pub fn admit(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_admitted_ms {
            if now_ms.saturating_sub(last) < self.wait_ms {
                return false;
            }
        }
        self.last_admitted_ms = Some(now_ms);
        true
    }
}

/// Callback form of the same contract: wrap `callback` so it runs at most
/// once per `wait_ms`, reading time from `clock`. The argument is passed
/// through unchanged on admitted calls and lost on dropped ones.
pub fn wrap<C, T, F>(clock: C, wait_ms: u64, mut callback: F) -> impl FnMut(T)
where
    C: Clock,
    F: FnMut(T),
{
    let mut gate = Throttle::new(wait_ms);
    move |arg: T| {
        if gate.admit(clock.now_ms()) {
            callback(arg);
        }
    }
}
