//! Leading-edge, drop-on-pending call suppression.
//!
//! The first call while idle runs immediately and opens a pending window of
//! `interval`. Calls inside the window are dropped, not queued. The window is
//! not extended by dropped calls, so the first call after it closes runs
//! immediately again.
//!
//! Time is passed in by the caller (`now`), which keeps the gate usable from
//! a frame-paced loop and deterministic under test.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    // Set when a call fires; the window is over once `interval` has passed.
    pending_since: Option<Instant>,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self { interval, pending_since: None }
    }

    /// Wraps `action` so that it runs at most once per `interval`.
    pub fn wrap<F>(action: F, interval: Duration) -> Debounced<F> {
        Debounced { action, gate: Self::new(interval) }
    }

    pub fn is_pending(&self, now: Instant) -> bool {
        match self.pending_since {
            Some(since) => now.saturating_duration_since(since) < self.interval,
            None => false,
        }
    }

    /// Opens a new window and returns `true` if idle, `false` if the call is
    /// to be dropped.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        if self.is_pending(now) {
            return false;
        }
        self.pending_since = Some(now);
        true
    }

    pub fn call<R>(&mut self, now: Instant, action: impl FnOnce() -> R) -> Option<R> {
        if self.try_acquire(now) {
            Some(action())
        } else {
            None
        }
    }

    /// Drops the pending token so nothing is owed after teardown.
    pub fn cancel(&mut self) {
        self.pending_since = None;
    }
}

/// An action bound to its own [`Debouncer`].
pub struct Debounced<F> {
    action: F,
    gate: Debouncer,
}

impl<F> Debounced<F> {
    pub fn is_pending(&self, now: Instant) -> bool {
        self.gate.is_pending(now)
    }

    pub fn cancel(&mut self) {
        self.gate.cancel();
    }

    pub fn call<A, R>(&mut self, now: Instant, arg: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        if self.gate.try_acquire(now) {
            Some((self.action)(arg))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn drops_calls_inside_window() {
        let t0 = Instant::now();
        let mut gate = Debouncer::new(ms(1000));
        let mut hits = Vec::new();

        for at in [0, 50, 100, 1001] {
            gate.call(t0 + ms(at), || hits.push(at));
        }

        assert_eq!(hits, vec![0, 1001]);
    }

    #[test]
    fn dropped_calls_do_not_extend_window() {
        let t0 = Instant::now();
        let mut gate = Debouncer::new(ms(100));
        assert!(gate.try_acquire(t0));
        assert!(!gate.try_acquire(t0 + ms(99)));
        assert!(gate.try_acquire(t0 + ms(100)));
        assert!(gate.is_pending(t0 + ms(150)));
        assert!(!gate.is_pending(t0 + ms(200)));
    }

    #[test]
    fn cancel_returns_to_idle() {
        let t0 = Instant::now();
        let mut gate = Debouncer::new(ms(1000));
        assert!(gate.try_acquire(t0));
        gate.cancel();
        assert!(!gate.is_pending(t0 + ms(1)));
        assert!(gate.try_acquire(t0 + ms(1)));
    }

    #[test]
    fn wrapped_action_receives_arguments() {
        let t0 = Instant::now();
        let mut seen = Vec::new();
        {
            let mut push = Debouncer::wrap(|v: u32| seen.push(v), ms(10));
            assert_eq!(push.call(t0, 1), Some(()));
            assert_eq!(push.call(t0 + ms(5), 2), None);
            assert_eq!(push.call(t0 + ms(10), 3), Some(()));
        }
        assert_eq!(seen, vec![1, 3]);
    }
}
