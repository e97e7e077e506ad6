//! A sink for testing and debugging.
use parking_lot::Mutex;

use crate::{MeterKind, Numeric64, Sink};

/// A single reading captured by [`DebuggingSink`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reading {
    /// Kind of meter that produced the reading.
    pub kind: MeterKind,
    /// Name of the meter.
    pub name: String,
    /// Encoded value.
    pub value: Numeric64,
}

impl Reading {
    /// Creates a new `Reading`.
    pub fn new<N>(kind: MeterKind, name: N, value: Numeric64) -> Self
    where
        N: Into<String>,
    {
        Self { kind, name: name.into(), value }
    }
}

/// A simplistic sink that keeps every reading it receives, in arrival order.
///
/// Callers can inspect the captured readings at any time, which makes it easy to assert on what a
/// meter flushed.
#[derive(Debug, Default)]
pub struct DebuggingSink {
    readings: Mutex<Vec<Reading>>,
}

impl DebuggingSink {
    /// Creates a new, empty `DebuggingSink`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a copy of every reading captured so far.
    pub fn readings(&self) -> Vec<Reading> {
        self.readings.lock().clone()
    }

    /// Takes every reading captured so far, leaving the sink empty.
    pub fn drain(&self) -> Vec<Reading> {
        std::mem::take(&mut *self.readings.lock())
    }

    /// Sums the readings of the given kind and name, interpreted as signed integers.
    pub fn total_for(&self, kind: MeterKind, name: &str) -> i64 {
        self.readings
            .lock()
            .iter()
            .filter(|r| r.kind == kind && r.name == name)
            .fold(0i64, |acc, r| acc.wrapping_add(r.value.as_i64()))
    }

    /// Gets the number of readings captured so far.
    pub fn len(&self) -> usize {
        self.readings.lock().len()
    }

    /// Whether or not any readings have been captured.
    pub fn is_empty(&self) -> bool {
        self.readings.lock().is_empty()
    }
}

impl Sink for DebuggingSink {
    fn record_numeric64(&self, kind: MeterKind, name: &str, value: Numeric64) {
        self.readings.lock().push(Reading::new(kind, name, value));
    }
}

#[cfg(test)]
mod tests {
    use super::{DebuggingSink, Reading};
    use crate::{MeterKind, Numeric64, Sink};

    #[test]
    fn test_drain_empties_the_sink() {
        let sink = DebuggingSink::new();
        sink.record_numeric64(MeterKind::Counter, "requests", Numeric64::from_i64(1));
        sink.record_numeric64(MeterKind::Timer, "handler", Numeric64::from_u64(5));

        assert_eq!(sink.len(), 2);
        let drained = sink.drain();
        assert_eq!(drained[1], Reading::new(MeterKind::Timer, "handler", Numeric64::from_u64(5)));
        assert!(sink.is_empty());
        assert!(sink.readings().is_empty());
    }

    #[test]
    fn test_total_only_counts_matching_readings() {
        let sink = DebuggingSink::new();
        sink.record_numeric64(MeterKind::Counter, "requests", Numeric64::from_i64(4));
        sink.record_numeric64(MeterKind::Counter, "requests", Numeric64::from_i64(-1));
        sink.record_numeric64(MeterKind::Counter, "errors", Numeric64::from_i64(9));
        sink.record_numeric64(MeterKind::Gauge, "requests", Numeric64::from_i64(100));

        assert_eq!(sink.total_for(MeterKind::Counter, "requests"), 3);
        assert_eq!(sink.total_for(MeterKind::Counter, "missing"), 0);
    }
}
