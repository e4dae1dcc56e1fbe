use chrono::{SecondsFormat, TimeZone, Utc};

pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// Wall clock. With chrono's `wasmbind` feature this reads `Date.now()` in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Formats like JavaScript's `Date.prototype.toISOString`, e.g. `2025-03-01T12:00:00.000Z`.
pub fn iso_timestamp(millis: i64) -> String {
    match Utc.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

#[cfg(test)]
pub struct FixedClock(pub std::cell::Cell<i64>);

#[cfg(test)]
impl FixedClock {
    pub fn at(millis: i64) -> Self {
        Self(std::cell::Cell::new(millis))
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0.get()
    }
}
