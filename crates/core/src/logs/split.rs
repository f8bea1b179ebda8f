//! Splitting logs at local midnight
//!
//! A session such as sleep (23:30 - 01:30) belongs to two days. Day-based
//! views and the `frequency_days` metric expect one log per day, so a
//! crossing log is cut into pieces: each piece ends at 23:59:59.999 (or the
//! original end) and the next begins one millisecond later.

use chrono::{Local, TimeZone};
use timepal_domain::types::log::duration_seconds;
use timepal_domain::utils::time::{end_of_day_millis, local_date_of};
use timepal_domain::Log;
use uuid::Uuid;

/// Whether the interval starts and ends on different local days.
pub fn is_crossing_midnight(start_ms: i64, end_ms: i64) -> bool {
    is_crossing_midnight_in(start_ms, end_ms, &Local)
}

/// Whether the interval starts and ends on different days in `tz`.
pub fn is_crossing_midnight_in<Tz: TimeZone>(start_ms: i64, end_ms: i64, tz: &Tz) -> bool {
    match (local_date_of(tz, start_ms), local_date_of(tz, end_ms)) {
        (Some(start_day), Some(end_day)) => start_day != end_day,
        _ => false,
    }
}

/// Split `log` at local midnights; see [`split_log_by_days_in`].
pub fn split_log_by_days(log: &Log) -> Vec<Log> {
    split_log_by_days_in(log, &Local)
}

/// Split `log` into one record per day in `tz`.
///
/// Every returned record gets a fresh id. A log that stays within one day is
/// returned as a single record with its stored duration. Pieces of a
/// crossing log get `duration = (end - start) / 1000`, and only the first
/// piece keeps `progress_increment` so a linked todo is credited once.
pub fn split_log_by_days_in<Tz: TimeZone>(log: &Log, tz: &Tz) -> Vec<Log> {
    if !is_crossing_midnight_in(log.start_time, log.end_time, tz) {
        return vec![Log { id: new_log_id(), ..log.clone() }];
    }

    let mut pieces = Vec::new();
    let mut piece_start = log.start_time;

    while piece_start < log.end_time {
        let Some(day) = local_date_of(tz, piece_start) else {
            break;
        };
        let day_end = end_of_day_millis(tz, day);
        let piece_end = day_end.min(log.end_time);

        pieces.push(Log {
            id: new_log_id(),
            start_time: piece_start,
            end_time: piece_end,
            duration: duration_seconds(piece_start, piece_end),
            progress_increment: if pieces.is_empty() { log.progress_increment } else { None },
            ..log.clone()
        });

        piece_start = day_end + 1;
    }

    pieces
}

fn new_log_id() -> String {
    Uuid::new_v4().to_string()
}
