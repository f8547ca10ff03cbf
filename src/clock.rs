//! The `Clock` collaborator (spec §6): isolates wall-clock time from
//! simulated time so delayed (`after`/`send(.., {delay})`) events can be
//! tested deterministically.
//!
//! Grounded on the spec §9 design note "represent the scheduler as a
//! min-heap of `(due_time, sequence, id, event)`" — both clock
//! implementations here just drive callbacks; the actual min-heap lives in
//! [`crate::interpreter::Scheduler`], which is the thing that calls
//! `set_timeout` per pending timer.

use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Opaque handle returned by `set_timeout`, passed back to `clear_timeout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(pub(crate) u64);

/// A scheduled callback, invoked at most once.
pub type TimerCallback = Box<dyn FnOnce() + Send>;

/// Time source + timer scheduling, kept behind a trait so the interpreter
/// can run against either real time or a [`SimulatedClock`] in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn set_timeout(&self, callback: TimerCallback, delay_ms: u64) -> TimerHandle;
    fn clear_timeout(&self, handle: TimerHandle);
    fn now(&self) -> u64;
}

/// Wraps OS timers: each `set_timeout` spawns a sleeping thread that
/// delivers the callback when it wakes, unless cancelled first.
pub struct SystemClock {
    next_id: AtomicU64,
    cancelled: Arc<Mutex<std::collections::HashSet<u64>>>,
    epoch: std::time::Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            cancelled: Arc::new(Mutex::new(std::collections::HashSet::new())),
            epoch: std::time::Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn set_timeout(&self, callback: TimerCallback, delay_ms: u64) -> TimerHandle {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let cancelled = self.cancelled.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(delay_ms));
            if cancelled.lock().unwrap().remove(&id) {
                return;
            }
            callback();
        });
        TimerHandle(id)
    }

    fn clear_timeout(&self, handle: TimerHandle) {
        self.cancelled.lock().unwrap().insert(handle.0);
    }

    fn now(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

struct DueEntry {
    due: u64,
    seq: u64,
    id: u64,
}

impl PartialEq for DueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}
impl Eq for DueEntry {}
impl PartialOrd for DueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for DueEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // reversed so BinaryHeap (a max-heap) behaves as a min-heap on `due`,
        // ties broken by scheduling order (spec §5 ordering guarantee c).
        other.due.cmp(&self.due).then(other.seq.cmp(&self.seq))
    }
}

/// Virtual time, advanced explicitly via [`SimulatedClock::increment`] —
/// the collaborator spec §4.D requires for deterministic tests (S1/S2).
pub struct SimulatedClock {
    inner: Mutex<SimulatedClockInner>,
}

struct SimulatedClockInner {
    now: u64,
    seq: u64,
    heap: BinaryHeap<DueEntry>,
    callbacks: std::collections::HashMap<u64, TimerCallback>,
}

impl Default for SimulatedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedClock {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(SimulatedClockInner {
                now: 0,
                seq: 0,
                heap: BinaryHeap::new(),
                callbacks: std::collections::HashMap::new(),
            }),
        }
    }

    /// Advances virtual time by `ms` and fires every callback whose due
    /// time has been reached, in `(due_time, scheduled_order)` order.
    pub fn increment(&self, ms: u64) {
        let mut due_callbacks = Vec::new();
        {
            let mut inner = self.inner.lock().unwrap();
            inner.now += ms;
            while let Some(top) = inner.heap.peek() {
                if top.due > inner.now {
                    break;
                }
                let entry = inner.heap.pop().unwrap();
                if let Some(cb) = inner.callbacks.remove(&entry.id) {
                    due_callbacks.push(cb);
                }
            }
        }
        for cb in due_callbacks {
            cb();
        }
    }
}

impl Clock for SimulatedClock {
    fn set_timeout(&self, callback: TimerCallback, delay_ms: u64) -> TimerHandle {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.seq;
        inner.seq += 1;
        let due = inner.now + delay_ms;
        inner.heap.push(DueEntry { due, seq: id, id });
        inner.callbacks.insert(id, callback);
        TimerHandle(id)
    }

    fn clear_timeout(&self, handle: TimerHandle) {
        let mut inner = self.inner.lock().unwrap();
        inner.callbacks.remove(&handle.0);
    }

    fn now(&self) -> u64 {
        self.inner.lock().unwrap().now
    }
}
