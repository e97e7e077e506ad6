use std::{fmt, sync::atomic::Ordering};

use tracing::trace;

use crate::{atomics::AtomicI64, MeterKind, Numeric64, Sink};

/// A client-side buffered counter.
///
/// Unlike a gauge, a counter's total is maintained on the server: every flush sends the delta
/// accumulated since the previous flush and resets the local value to zero.  This lets several
/// distributed processes update the same counter, at the cost of the server-side total drifting
/// if a flushed delta never arrives.
///
/// All updates are lock-free.  Producers only ever perform atomic adds, and a flush drains the
/// accumulator with a single atomic exchange, so every update lands in exactly one flush window.
pub struct Counter {
    name: String,
    value: AtomicI64,
}

impl Counter {
    /// Creates a new `Counter` with the given name and a value of zero.
    pub fn new<N>(name: N) -> Self
    where
        N: Into<String>,
    {
        Self { name: name.into(), value: AtomicI64::new(0) }
    }

    /// Gets the name of this counter.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Increments the counter by the given amount.
    ///
    /// Negative amounts decrement the counter.  The accumulator wraps on overflow.
    pub fn inc(&self, delta: i64) {
        let _ = self.value.fetch_add(delta, Ordering::Release);
    }

    /// Decrements the counter by the given amount.
    pub fn dec(&self, delta: i64) {
        let _ = self.value.fetch_sub(delta, Ordering::Release);
    }

    /// Gets the delta accumulated since the last flush, without resetting it.
    pub fn value(&self) -> i64 {
        self.value.load(Ordering::Acquire)
    }

    /// Flushes the accumulated delta to the given sink.
    ///
    /// The accumulator is swapped with zero in one atomic step.  If the drained delta is zero, the
    /// sink is not called at all.  Updates that arrive after the swap, including while the sink is
    /// still handling this reading, are reported by the next flush.
    pub fn flush_reading<S>(&self, sink: &S)
    where
        S: Sink + ?Sized,
    {
        let delta = self.value.swap(0, Ordering::AcqRel);
        if delta != 0 {
            trace!(name = %self.name, delta, "flushing counter");
            sink.record_numeric64(MeterKind::Counter, &self.name, Numeric64::from_i64(delta));
        }
    }
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter").field("name", &self.name).field("value", &self.value()).finish()
    }
}
