//! Calendar-day bucketing and the clock abstraction used to stamp records.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, FixedOffset, Local, Offset, TimeDelta, TimeZone, Utc};

/// Whether `timestamp` falls on the same calendar day as `reference` in `tz`.
///
/// Both instants are truncated to midnight in `tz` and compared, so the day
/// window is half-open: local midnight inclusive, next midnight exclusive.
pub fn is_same_calendar_day<Tz: TimeZone>(
    timestamp: DateTime<Utc>,
    reference: DateTime<Utc>,
    tz: &Tz,
) -> bool {
    timestamp.with_timezone(tz).date_naive() == reference.with_timezone(tz).date_naive()
}

/// Source of the current instant and of the timezone that defines "today".
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Whether `timestamp` lies within the current calendar day.
    fn is_today(&self, timestamp: DateTime<Utc>) -> bool;
}

/// Wall clock in the process's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn is_today(&self, timestamp: DateTime<Utc>) -> bool {
        is_same_calendar_day(timestamp, Utc::now(), &Local)
    }
}

/// Clock that only moves when told to, pinned to a fixed UTC offset.
#[derive(Debug)]
pub struct ManualClock {
    now_millis: AtomicI64,
    offset: FixedOffset,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self {
            now_millis: AtomicI64::new(now.timestamp_millis()),
            offset,
        }
    }

    /// Manual clock in UTC.
    pub fn utc(now: DateTime<Utc>) -> Self {
        Self::new(now, Utc.fix())
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now_millis.store(now.timestamp_millis(), Ordering::SeqCst);
    }

    pub fn advance(&self, delta: TimeDelta) {
        self.now_millis
            .fetch_add(delta.num_milliseconds(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.now_millis.load(Ordering::SeqCst)).unwrap_or_default()
    }

    fn is_today(&self, timestamp: DateTime<Utc>) -> bool {
        is_same_calendar_day(timestamp, self.now(), &self.offset)
    }
}
