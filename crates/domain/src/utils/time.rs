//! Local calendar helpers.
//!
//! Logs carry UTC epoch milliseconds while goals are expressed as calendar
//! dates in the user's zone. Everything that turns one into the other lives
//! here so the engines agree on what "a day" is. All helpers are generic over
//! [`chrono::TimeZone`]; callers pass `chrono::Local` in the app and a fixed
//! zone in tests.

use chrono::{Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Inclusive millisecond window covering whole local days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl DayWindow {
    /// Window from local midnight of `start` to local 23:59:59.999 of `end`.
    pub fn for_dates<Tz: TimeZone>(tz: &Tz, start: NaiveDate, end: NaiveDate) -> Self {
        Self { start_ms: start_of_day_millis(tz, start), end_ms: end_of_day_millis(tz, end) }
    }

    /// Both bounds inclusive.
    #[must_use]
    pub const fn contains(&self, timestamp_ms: i64) -> bool {
        timestamp_ms >= self.start_ms && timestamp_ms <= self.end_ms
    }
}

/// Epoch milliseconds of local midnight on `date`.
pub fn start_of_day_millis<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> i64 {
    resolve_local(tz, date.and_time(NaiveTime::MIN), Pick::Earliest)
}

/// Epoch milliseconds of local 23:59:59.999 on `date`.
pub fn end_of_day_millis<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> i64 {
    let last_milli = date.and_time(NaiveTime::MIN) + Duration::days(1) - Duration::milliseconds(1);
    resolve_local(tz, last_milli, Pick::Latest)
}

/// Local calendar date a timestamp falls on, `None` when out of range.
pub fn local_date_of<Tz: TimeZone>(tz: &Tz, timestamp_ms: i64) -> Option<NaiveDate> {
    tz.timestamp_millis_opt(timestamp_ms).single().map(|dt| dt.date_naive())
}

#[derive(Clone, Copy)]
enum Pick {
    Earliest,
    Latest,
}

fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime, pick: Pick) -> i64 {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.timestamp_millis(),
        LocalResult::Ambiguous(earliest, latest) => match pick {
            Pick::Earliest => earliest.timestamp_millis(),
            Pick::Latest => latest.timestamp_millis(),
        },
        // DST gap: the wall-clock time does not exist, move past the gap
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .map_or_else(|| naive.and_utc().timestamp_millis(), |dt| dt.timestamp_millis()),
    }
}
