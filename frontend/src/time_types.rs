use std::fmt;

/// Milliseconds making up one whole second/minute/hour/day, as used by the
/// countdown decomposition.
pub const MILLIS_PER_SECOND: u64 = 1000;
pub const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;

/// Represents an absolute point in time as milliseconds since the Unix epoch.
///
/// Uses i64 internally to provide:
/// - lossless round-trips from the host clock (`Date.now()` / `Date.parse()`)
/// - exact integer arithmetic across ticks
/// - no floating point precision issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DropTimeMs(pub i64);

impl DropTimeMs {
    /// Create a new DropTimeMs from a host clock value.
    ///
    /// The host reports both "now" and parsed date strings as f64
    /// milliseconds; a failed parse comes back as NaN and is rejected here
    /// so an invalid timestamp can never enter the timer collection.
    pub fn from_host_millis(millis: f64) -> Option<Self> {
        if millis.is_finite() {
            Some(DropTimeMs(millis as i64))
        } else {
            None
        }
    }

    /// Get the epoch-millisecond value
    pub fn millis(self) -> i64 {
        self.0
    }

    /// True once `now` is at or past this drop time.
    pub fn is_reached(self, now: DropTimeMs) -> bool {
        now.0 >= self.0
    }

    /// Non-negative time left until this drop time, zero once passed.
    pub fn remaining(self, now: DropTimeMs) -> RemainingMs {
        RemainingMs(self.0.saturating_sub(now.0).max(0) as u64)
    }
}

/// Represents a non-negative duration in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RemainingMs(pub u64);

impl RemainingMs {
    pub const ZERO: RemainingMs = RemainingMs(0);

    /// Get the millisecond value
    pub fn millis(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Decompose into the whole units shown on the page.
    pub fn units(self) -> CountdownUnits {
        CountdownUnits {
            days: self.0 / MILLIS_PER_DAY,
            hours: ((self.0 % MILLIS_PER_DAY) / MILLIS_PER_HOUR) as u8,
            minutes: ((self.0 % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE) as u8,
            seconds: ((self.0 % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND) as u8,
        }
    }
}

impl fmt::Display for RemainingMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.units();
        write!(
            f,
            "{}d {:02}:{:02}:{:02}",
            units.days, units.hours, units.minutes, units.seconds
        )
    }
}

/// Whole-unit decomposition of a remaining duration.
///
/// `days` is unbounded; `hours`, `minutes` and `seconds` carry the usual
/// 0–23 / 0–59 / 0–59 ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownUnits {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl CountdownUnits {
    pub fn value(self, unit: CountdownUnit) -> u64 {
        match unit {
            CountdownUnit::Days => self.days,
            CountdownUnit::Hours => u64::from(self.hours),
            CountdownUnit::Minutes => u64::from(self.minutes),
            CountdownUnit::Seconds => u64::from(self.seconds),
        }
    }

    /// Two-digit zero-padded rendering; values past 99 keep their full width.
    pub fn rendered(self, unit: CountdownUnit) -> String {
        format!("{:02}", self.value(unit))
    }
}

/// One of the four display units, in the fixed order they are updated on
/// the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl CountdownUnit {
    pub const ALL: [CountdownUnit; 4] = [
        CountdownUnit::Days,
        CountdownUnit::Hours,
        CountdownUnit::Minutes,
        CountdownUnit::Seconds,
    ];

    pub fn id_prefix(self) -> &'static str {
        match self {
            CountdownUnit::Days => "days",
            CountdownUnit::Hours => "hours",
            CountdownUnit::Minutes => "minutes",
            CountdownUnit::Seconds => "seconds",
        }
    }

    /// Id of the display element belonging to this unit of a product's timer.
    pub fn display_id(self, product_id: &str) -> String {
        format!("{}-{}", self.id_prefix(), product_id)
    }
}
