//! Calendar-month boundary for the monthly view count.

use chrono::{DateTime, Datelike, Local, NaiveTime, TimeZone, Utc};

/// Start of the current calendar month: local day 1, 00:00:00,
/// converted to UTC for comparison against stored timestamps.
pub fn current_month_start() -> DateTime<Utc> {
    month_start(Local::now())
}

fn month_start(now: DateTime<Local>) -> DateTime<Utc> {
    let date = now.date_naive();
    let first = date.with_day(1).unwrap_or(date);
    let midnight = first.and_time(NaiveTime::MIN);
    // A DST gap at midnight leaves no local representation; treat the
    // naive time as UTC in that case.
    midnight
        .and_local_timezone(Local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}
