//! Signals shared between producer and consumer.
//!
//! - `CompletionFlag`: one-shot flag the producer sets after its final
//!   write and close. Readers only ever observe it.
//! - `ReportGate`: counts the producer's status reports so the consumer
//!   never reports a line before the producer has reported it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};

/// Cloneable handle to a shared completion flag.
#[derive(Debug, Clone, Default)]
pub struct CompletionFlag {
    set: Arc<AtomicBool>,
}

impl CompletionFlag {
    /// Creates a new, unset flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flag.
    ///
    /// Returns `true` if this call performed the transition, `false` if
    /// the flag was already set.
    pub fn set(&self) -> bool {
        !self.set.swap(true, Ordering::AcqRel)
    }

    /// Returns true once the flag has been set.
    pub fn is_set(&self) -> bool {
        self.set.load(Ordering::Acquire)
    }
}

#[derive(Debug, Default)]
struct GateState {
    /// Status lines reported by the producer so far.
    reported: u64,
    /// Producer is gone; no further reports will come.
    closed: bool,
}

#[derive(Debug, Default)]
struct GateInner {
    state: Mutex<GateState>,
    cond: Condvar,
}

/// Cloneable handle to the producer's report counter.
///
/// The producer calls `advance` after each status line and `close` when
/// it exits. No lock is held across channel I/O.
#[derive(Debug, Clone, Default)]
pub struct ReportGate {
    inner: Arc<GateInner>,
}

impl ReportGate {
    /// Creates a gate with no reports and the producer still running.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one more producer report and wakes waiters.
    pub fn advance(&self) {
        let mut state = self.inner.state.lock().unwrap_or_else(|e| e.into_inner());
        state.reported += 1;
        self.inner.cond.notify_all();
    }

    /// Marks the producer as finished and releases every waiter.
    pub fn close(&self) {
        let mut state = self.inner.state.lock().unwrap_or_else(|e| e.into_inner());
        state.closed = true;
        self.inner.cond.notify_all();
    }

    /// Blocks until at least `n` reports were made or the gate is closed.
    ///
    /// Returns `true` if `n` reports were reached.
    pub fn wait_for(&self, n: u64) -> bool {
        let guard = self.inner.state.lock().unwrap_or_else(|e| e.into_inner());
        let state = self
            .inner
            .cond
            .wait_while(guard, |state| state.reported < n && !state.closed)
            .unwrap_or_else(|e| e.into_inner());
        state.reported >= n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_flag_initially_unset() {
        let flag = CompletionFlag::new();
        assert!(!flag.is_set());
    }

    #[test]
    fn test_flag_set_exactly_once() {
        let flag = CompletionFlag::new();
        let observer = flag.clone();
        assert!(flag.set());
        assert!(!flag.set());
        assert!(observer.is_set());
    }

    #[test]
    fn test_gate_wakes_on_advance() {
        let gate = ReportGate::new();
        let waiter = gate.clone();
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            tx.send(waiter.wait_for(2)).unwrap();
        });

        gate.advance();
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
        gate.advance();
        assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(true));
        handle.join().unwrap();
    }

    #[test]
    fn test_gate_close_releases_waiters() {
        let gate = ReportGate::new();
        gate.advance();
        gate.close();
        assert!(gate.wait_for(1));
        assert!(!gate.wait_for(2));
    }
}
