//! A [`tally`] sink that forwards readings to `tracing`.
//!
//! Every reading becomes one `tracing` event under the `tally::reading` target, with the meter
//! kind, name, and value attached as structured fields.  Whatever subscriber is installed decides
//! where those events end up.
//!
//! ```rust
//! # use tally::Counter;
//! # use tally_exporter_log::LogSinkBuilder;
//! let sink = LogSinkBuilder::default()
//!     .level(tracing::Level::DEBUG)
//!     .prefix("frontend")
//!     .build();
//!
//! let requests = Counter::new("requests");
//! requests.inc(1);
//!
//! // Emits a debug event with `name = "frontend.requests"` and `value = 1`.
//! requests.flush_reading(&sink);
//! ```
#![deny(missing_docs)]

use tally::{MeterKind, Numeric64, Sink};
use tracing::{event, Level};

/// Target used for every event emitted by [`LogSink`].
pub const TARGET: &str = "tally::reading";

/// A sink that logs each reading as a `tracing` event.
#[derive(Clone, Debug)]
pub struct LogSink {
    level: Level,
    prefix: Option<String>,
}

impl LogSink {
    /// Gets the level events are emitted at.
    pub fn level(&self) -> Level {
        self.level
    }

    fn full_name<'a>(&self, name: &'a str) -> std::borrow::Cow<'a, str> {
        match &self.prefix {
            Some(prefix) => format!("{prefix}.{name}").into(),
            None => name.into(),
        }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        LogSinkBuilder::default().build()
    }
}

impl Sink for LogSink {
    fn record_numeric64(&self, kind: MeterKind, name: &str, value: Numeric64) {
        let name = self.full_name(name);
        let kind = kind.as_str();
        let ty = value.ty();

        // `event!` needs the level as a constant.
        if self.level == Level::ERROR {
            event!(target: TARGET, Level::ERROR, kind, %name, %value, %ty);
        } else if self.level == Level::WARN {
            event!(target: TARGET, Level::WARN, kind, %name, %value, %ty);
        } else if self.level == Level::INFO {
            event!(target: TARGET, Level::INFO, kind, %name, %value, %ty);
        } else if self.level == Level::DEBUG {
            event!(target: TARGET, Level::DEBUG, kind, %name, %value, %ty);
        } else {
            event!(target: TARGET, Level::TRACE, kind, %name, %value, %ty);
        }
    }
}

/// Builder for [`LogSink`].
#[derive(Clone, Debug)]
pub struct LogSinkBuilder {
    level: Level,
    prefix: Option<String>,
}

impl Default for LogSinkBuilder {
    fn default() -> Self {
        Self { level: Level::INFO, prefix: None }
    }
}

impl LogSinkBuilder {
    /// Sets the level readings are logged at.
    ///
    /// Defaults to `INFO`.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets a prefix for meter names.
    ///
    /// Names are logged as `<prefix>.<name>`.  Empty prefixes are ignored.
    #[must_use]
    pub fn prefix<P>(mut self, prefix: P) -> Self
    where
        P: Into<String>,
    {
        let prefix = prefix.into();
        self.prefix = if prefix.is_empty() { None } else { Some(prefix) };
        self
    }

    /// Builds the `LogSink`.
    pub fn build(self) -> LogSink {
        LogSink { level: self.level, prefix: self.prefix }
    }
}
