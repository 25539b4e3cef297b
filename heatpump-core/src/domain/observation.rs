use time::{Date, OffsetDateTime, UtcOffset};

/// One normalized observation row.
///
/// Timestamps are converted to UTC and location/town identifiers are
/// whitespace-trimmed when the row is constructed, so every consumer can
/// rely on the normalized form. The time-bucket keys are derived here,
/// once, rather than on every query.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub ts: OffsetDateTime,
    pub location: String,
    pub town: String,
    pub total_energy_kwh: f64,
    /// Share of `total_energy_kwh` attributable to the heat pump, as a
    /// percentage. Nominally within [0, 100] but never validated or
    /// clamped; out-of-range values pass through unchanged.
    pub heatpump_pct: f64,
    pub buckets: TimeBuckets,
}

impl Observation {
    pub fn new(
        ts: OffsetDateTime,
        location: &str,
        town: &str,
        total_energy_kwh: f64,
        heatpump_pct: f64,
    ) -> Self {
        let ts = ts.to_offset(UtcOffset::UTC);
        Self {
            buckets: TimeBuckets::derive(ts),
            ts,
            location: location.trim().to_string(),
            town: town.trim().to_string(),
            total_energy_kwh,
            heatpump_pct,
        }
    }
}

/// Precomputed grouping keys for the three supported resolutions.
///
/// All three keys are read off the UTC instant's civil date/time. The
/// month key in particular must come from the offset-adjusted civil
/// timestamp: a record at `23:30+01:00` on the last day of a month sits
/// in the previous month once converted to UTC, and the key has to agree
/// with that conversion rather than with the original local date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBuckets {
    /// UTC calendar date plus hour-of-day (0-23).
    pub hour: (Date, u8),
    /// UTC calendar date.
    pub date: Date,
    /// (year, month 1-12) of the UTC calendar date.
    pub month: (i32, u8),
}

impl TimeBuckets {
    pub fn derive(ts: OffsetDateTime) -> Self {
        let utc = ts.to_offset(UtcOffset::UTC);
        let date = utc.date();
        Self {
            hour: (date, utc.hour()),
            date,
            month: (date.year(), u8::from(date.month())),
        }
    }
}
