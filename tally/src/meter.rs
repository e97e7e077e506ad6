use crate::{Counter, Sink};

/// A named meter that can flush its reading to a sink.
///
/// This is the seam an external scheduler drives: it holds a collection of meters and, on its own
/// schedule, asks each one to flush.  How often that happens is not a concern of the meter.
pub trait Meter: Send + Sync {
    /// Gets the name of the meter.
    fn name(&self) -> &str;

    /// Flushes the current reading, if any, to the given sink.
    fn flush_reading(&self, sink: &dyn Sink);
}

impl Meter for Counter {
    fn name(&self) -> &str {
        Counter::name(self)
    }

    fn flush_reading(&self, sink: &dyn Sink) {
        Counter::flush_reading(self, sink)
    }
}

/// Flushes every meter to the given sink, in order.
pub fn flush_all<M>(meters: &[M], sink: &dyn Sink)
where
    M: AsRef<dyn Meter>,
{
    for meter in meters {
        meter.as_ref().flush_reading(sink);
    }
}
