//
// TimeUnit
//

/// Unit for a max-age value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TimeUnit {
    /// Nanoseconds.
    Nanoseconds,

    /// Microseconds.
    Microseconds,

    /// Milliseconds.
    Milliseconds,

    /// Seconds.
    Seconds,

    /// Minutes.
    Minutes,

    /// Hours.
    Hours,

    /// Days.
    Days,
}

impl TimeUnit {
    /// Convert to seconds.
    ///
    /// Sub-second units truncate toward zero. Larger units saturate at [i64::MIN] and
    /// [i64::MAX].
    pub fn to_seconds(self, value: i64) -> i64 {
        match self {
            Self::Nanoseconds => value / 1_000_000_000,
            Self::Microseconds => value / 1_000_000,
            Self::Milliseconds => value / 1_000,
            Self::Seconds => value,
            Self::Minutes => value.saturating_mul(60),
            Self::Hours => value.saturating_mul(60 * 60),
            Self::Days => value.saturating_mul(24 * 60 * 60),
        }
    }
}
