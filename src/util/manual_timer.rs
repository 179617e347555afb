//! Virtual-time [`Timer`] for driving delayed work headless.
//!
//! Built for tests and for the `testing` feature; production code sleeps on
//! the browser timer.

#[cfg(test)]
#[path = "manual_timer_test.rs"]
mod manual_timer_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;

use super::timer::Timer;

struct PendingSleep {
    due_ms: u64,
    wake: oneshot::Sender<()>,
}

#[derive(Default)]
struct ManualClock {
    now_ms: Cell<u64>,
    pending: RefCell<Vec<PendingSleep>>,
}

/// Virtual-time timer. Sleeps resolve only when [`ManualTimer::advance`]
/// moves the clock past their deadline.
#[derive(Clone, Default)]
pub struct ManualTimer {
    clock: Rc<ManualClock>,
}

impl ManualTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual milliseconds elapsed so far.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms.get()
    }

    /// Number of sleeps still waiting.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.clock.pending.borrow().len()
    }

    /// Deadline of the earliest waiting sleep.
    #[must_use]
    pub fn next_due_ms(&self) -> Option<u64> {
        self.clock.pending.borrow().iter().map(|p| p.due_ms).min()
    }

    /// Move the clock forward and wake every sleep that is now due.
    ///
    /// Woken futures still need their executor to poll them.
    pub fn advance(&self, ms: u64) {
        let now = self.now_ms() + ms;
        self.clock.now_ms.set(now);
        let due: Vec<PendingSleep> = {
            let mut pending = self.clock.pending.borrow_mut();
            let (due, waiting): (Vec<_>, Vec<_>) = pending.drain(..).partition(|p| p.due_ms <= now);
            *pending = waiting;
            due
        };
        for sleep in due {
            if sleep.wake.send(()).is_err() {
                log::trace!("sleep due at {}ms was dropped before firing", sleep.due_ms);
            }
        }
    }
}

impl Timer for ManualTimer {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        let (wake, fired) = oneshot::channel();
        let due_ms = self.now_ms() + u64::from(ms);
        self.clock.pending.borrow_mut().push(PendingSleep { due_ms, wake });
        fired.map(drop).boxed_local()
    }
}
