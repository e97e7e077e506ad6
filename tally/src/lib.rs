//! Server-reset counters that flush atomic deltas to pluggable sinks.
//!
//! # Overview
//!
//! A [`Counter`] accumulates increments and decrements locally.  Periodically, something outside
//! of this crate calls [`Counter::flush_reading`], which drains the accumulated delta and hands it
//! to a [`Sink`] as a [`Numeric64`] tagged with [`MeterKind::Counter`].  The authoritative total
//! lives on the server, which reconstructs it by summing the deltas it receives.
//!
//! ```rust
//! # use tally::{Counter, MeterKind, Numeric64, Sink};
//! struct Stdout;
//!
//! impl Sink for Stdout {
//!     fn record_numeric64(&self, kind: MeterKind, name: &str, value: Numeric64) {
//!         println!("{kind} {name} {value}");
//!     }
//! }
//!
//! let requests = Counter::new("http.requests");
//! requests.inc(5);
//! requests.dec(2);
//!
//! // Prints "counter http.requests 3", and resets the counter to zero.
//! requests.flush_reading(&Stdout);
//!
//! // Nothing has happened since the last flush, so this doesn't call the sink at all.
//! requests.flush_reading(&Stdout);
//! ```
//!
//! # Flush guarantees
//!
//! Producers update the counter with atomic adds, and a flush drains it with a single atomic
//! exchange.  Every update therefore lands in exactly one flush window: it is never reported twice
//! and never skipped by two consecutive flushes.  Updates arriving after the exchange, even while
//! the sink is still processing the flushed reading, are reported by the next flush.
//!
//! Flushing is not transactional with delivery.  Once the delta has been drained, it is the sink's
//! responsibility; if the sink drops it, it is gone.
//!
//! # Sinks
//!
//! [`Sink`] has a single method, so transport, batching and aggregation can vary freely behind it.
//! A few building blocks are provided here: [`NoopSink`], [`Fanout`] for sending readings to
//! several sinks, and [`Filter`] for only passing through certain [`MeterKind`]s.  With the
//! `debugging` feature, [`DebuggingSink`](debugging::DebuggingSink) captures readings for tests.
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg), deny(rustdoc::broken_intra_doc_links))]

pub mod atomics;

mod counter;
pub use self::counter::Counter;

#[cfg(feature = "debugging")]
#[cfg_attr(docsrs, doc(cfg(feature = "debugging")))]
pub mod debugging;

mod kind;
pub use self::kind::{MeterKind, MeterKindMask};

mod meter;
pub use self::meter::{flush_all, Meter};

mod num64;
pub use self::num64::{Numeric64, NumericError, NumericType};

mod sink;
pub use self::sink::{Fanout, FanoutBuilder, Filter, NoopSink, Sink};
