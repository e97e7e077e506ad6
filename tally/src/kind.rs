use std::{fmt, ops::BitOr};

/// Meter kind.
///
/// Tags every reading handed to a [`Sink`](crate::Sink) so the receiving side knows how to merge
/// it:
/// - counters carry deltas, summed on the server
/// - gauges carry absolute values, where the latest one wins
/// - histograms and timers carry individual samples
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MeterKind {
    /// Counter type.
    Counter,
    /// Gauge type.
    Gauge,
    /// Histogram type.
    Histogram,
    /// Timer type.
    Timer,
}

impl MeterKind {
    /// Gets a stable, lowercase label for this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            MeterKind::Counter => "counter",
            MeterKind::Gauge => "gauge",
            MeterKind::Histogram => "histogram",
            MeterKind::Timer => "timer",
        }
    }
}

impl fmt::Display for MeterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Meter kind mask.
///
/// Useful for matching against a kind, or kinds, of meters.
///
/// Multiple kinds can be combined with bitwise OR, and checking for inclusion of a specific kind
/// can be done via [`matches`](MeterKindMask::matches):
///
/// ```rust
/// # use tally::{MeterKind, MeterKindMask};
/// let mask = MeterKindMask::COUNTER | MeterKindMask::TIMER;
///
/// assert!(mask.matches(MeterKind::Counter));
/// assert!(mask.matches(MeterKind::Timer));
/// assert!(!mask.matches(MeterKind::Gauge));
///
/// assert!(!MeterKindMask::NONE.matches(MeterKind::Counter));
/// assert!(MeterKindMask::ALL.matches(MeterKind::Histogram));
/// ```
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, Ord, PartialOrd)]
pub struct MeterKindMask(u8);

impl MeterKindMask {
    /// No meter kinds.
    pub const NONE: MeterKindMask = MeterKindMask(0);

    /// The counter kind.
    pub const COUNTER: MeterKindMask = MeterKindMask(1);

    /// The gauge kind.
    pub const GAUGE: MeterKindMask = MeterKindMask(2);

    /// The histogram kind.
    pub const HISTOGRAM: MeterKindMask = MeterKindMask(4);

    /// The timer kind.
    pub const TIMER: MeterKindMask = MeterKindMask(8);

    /// All meter kinds.
    pub const ALL: MeterKindMask = MeterKindMask(15);

    /// Whether or not this mask contains the specified kind.
    pub fn matches(&self, kind: MeterKind) -> bool {
        self.0 & MeterKindMask::from(kind).0 != 0
    }
}

impl From<MeterKind> for MeterKindMask {
    fn from(kind: MeterKind) -> Self {
        match kind {
            MeterKind::Counter => MeterKindMask::COUNTER,
            MeterKind::Gauge => MeterKindMask::GAUGE,
            MeterKind::Histogram => MeterKindMask::HISTOGRAM,
            MeterKind::Timer => MeterKindMask::TIMER,
        }
    }
}

impl BitOr for MeterKindMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{MeterKind, MeterKindMask};

    const KINDS: [MeterKind; 4] =
        [MeterKind::Counter, MeterKind::Gauge, MeterKind::Histogram, MeterKind::Timer];

    #[test]
    fn test_single_kind_masks() {
        for kind in KINDS {
            let mask = MeterKindMask::from(kind);
            for other in KINDS {
                assert_eq!(mask.matches(other), kind == other, "{kind} vs {other}");
            }
        }
    }

    #[test]
    fn test_all_and_none() {
        for kind in KINDS {
            assert!(MeterKindMask::ALL.matches(kind));
            assert!(!MeterKindMask::NONE.matches(kind));
        }

        let combined = MeterKindMask::COUNTER
            | MeterKindMask::GAUGE
            | MeterKindMask::HISTOGRAM
            | MeterKindMask::TIMER;
        assert_eq!(combined, MeterKindMask::ALL);
    }

    #[test]
    fn test_labels() {
        assert_eq!(MeterKind::Counter.to_string(), "counter");
        assert_eq!(MeterKind::Timer.as_str(), "timer");
    }
}
