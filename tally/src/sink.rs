use std::sync::Arc;

use crate::{MeterKind, MeterKindMask, Numeric64};

/// A destination for meter readings.
///
/// Sinks are handed one reading at a time: the kind of meter that produced it, the meter's name,
/// and the encoded value.  What happens next (batching, aggregation, transport, retries) is
/// entirely up to the implementation.
///
/// Readings are handed over after the producing meter has already reset its local state, so a
/// sink that drops a reading loses it for good.
pub trait Sink: Send + Sync {
    /// Records a single reading.
    fn record_numeric64(&self, kind: MeterKind, name: &str, value: Numeric64);
}

impl<S> Sink for &S
where
    S: Sink + ?Sized,
{
    fn record_numeric64(&self, kind: MeterKind, name: &str, value: Numeric64) {
        (**self).record_numeric64(kind, name, value)
    }
}

impl<S> Sink for Box<S>
where
    S: Sink + ?Sized,
{
    fn record_numeric64(&self, kind: MeterKind, name: &str, value: Numeric64) {
        (**self).record_numeric64(kind, name, value)
    }
}

impl<S> Sink for Arc<S>
where
    S: Sink + ?Sized,
{
    fn record_numeric64(&self, kind: MeterKind, name: &str, value: Numeric64) {
        (**self).record_numeric64(kind, name, value)
    }
}

/// A sink that discards every reading.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl Sink for NoopSink {
    fn record_numeric64(&self, _kind: MeterKind, _name: &str, _value: Numeric64) {}
}

/// Fans out readings to multiple sinks.
///
/// Sinks are called in the order they were added.
pub struct Fanout {
    sinks: Vec<Box<dyn Sink>>,
}

impl Sink for Fanout {
    fn record_numeric64(&self, kind: MeterKind, name: &str, value: Numeric64) {
        for sink in &self.sinks {
            sink.record_numeric64(kind, name, value);
        }
    }
}

/// Builder for [`Fanout`].
#[derive(Default)]
pub struct FanoutBuilder {
    sinks: Vec<Box<dyn Sink>>,
}

impl FanoutBuilder {
    /// Adds a sink to the fanout list.
    pub fn add_sink<S>(mut self, sink: S) -> FanoutBuilder
    where
        S: Sink + 'static,
    {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Builds the `Fanout` sink.
    pub fn build(self) -> Fanout {
        Fanout { sinks: self.sinks }
    }
}

/// Forwards only the readings whose kind matches a mask.
pub struct Filter<S> {
    inner: S,
    mask: MeterKindMask,
}

impl<S> Filter<S> {
    /// Creates a new `Filter` that passes readings matching `mask` through to `inner`.
    pub fn new(inner: S, mask: MeterKindMask) -> Self {
        Self { inner, mask }
    }

    /// Consumes the filter, returning the wrapped sink.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sink> Sink for Filter<S> {
    fn record_numeric64(&self, kind: MeterKind, name: &str, value: Numeric64) {
        if self.mask.matches(kind) {
            self.inner.record_numeric64(kind, name, value);
        }
    }
}

#[cfg(all(test, feature = "debugging"))]
mod tests {
    use std::sync::Arc;

    use super::{FanoutBuilder, Filter, NoopSink, Sink};
    use crate::debugging::{DebuggingSink, Reading};
    use crate::{MeterKind, MeterKindMask, Numeric64};

    #[test]
    fn test_fanout_reaches_every_sink() {
        let first = Arc::new(DebuggingSink::new());
        let second = Arc::new(DebuggingSink::new());

        let fanout = FanoutBuilder::default()
            .add_sink(first.clone())
            .add_sink(NoopSink)
            .add_sink(second.clone())
            .build();

        fanout.record_numeric64(MeterKind::Counter, "requests", Numeric64::from_i64(3));
        fanout.record_numeric64(MeterKind::Gauge, "queue_depth", Numeric64::from_u64(9));

        let expected = vec![
            Reading::new(MeterKind::Counter, "requests", Numeric64::from_i64(3)),
            Reading::new(MeterKind::Gauge, "queue_depth", Numeric64::from_u64(9)),
        ];
        assert_eq!(first.readings(), expected);
        assert_eq!(second.readings(), expected);
    }

    #[test]
    fn test_empty_fanout() {
        let fanout = FanoutBuilder::default().build();
        fanout.record_numeric64(MeterKind::Counter, "requests", Numeric64::from_i64(1));
    }

    #[test]
    fn test_filter_by_kind() {
        let sink = DebuggingSink::new();
        let filter = Filter::new(&sink, MeterKindMask::COUNTER | MeterKindMask::TIMER);

        filter.record_numeric64(MeterKind::Gauge, "temperature", Numeric64::from_f64(21.5));
        filter.record_numeric64(MeterKind::Counter, "requests", Numeric64::from_i64(2));
        filter.record_numeric64(MeterKind::Histogram, "latency", Numeric64::from_f64(0.25));
        filter.record_numeric64(MeterKind::Timer, "handler", Numeric64::from_u64(40));

        let kinds: Vec<_> = filter.into_inner().readings().into_iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![MeterKind::Counter, MeterKind::Timer]);
    }

    #[test]
    fn test_dyn_sink_through_references() {
        let sink = DebuggingSink::new();
        let boxed: Box<dyn Sink + '_> = Box::new(Filter::new(&sink, MeterKindMask::ALL));
        boxed.record_numeric64(MeterKind::Counter, "requests", Numeric64::from_i64(-4));
        assert_eq!(sink.total_for(MeterKind::Counter, "requests"), -4);
    }
}
