use std::collections::HashSet;

use time::{Date, Month, OffsetDateTime, UtcOffset};

/// Reduce a date-descending run of samples to one representative per UTC
/// calendar day: the first sample seen for each day, which is that day's most
/// recent entry given the input ordering. Encounter order is preserved, so the
/// output stays date-descending. The input ordering is the storage query's
/// contract, not re-checked here.
pub fn latest_per_day<T>(samples: Vec<T>, date_of: impl Fn(&T) -> OffsetDateTime) -> Vec<T> {
    let mut seen: HashSet<Date> = HashSet::new();
    samples
        .into_iter()
        .filter(|sample| seen.insert(date_of(sample).to_offset(UtcOffset::UTC).date()))
        .collect()
}

/// Start of the chart window: `now` stepped back by whole calendar months,
/// with the day-of-month clamped to the target month's length (Mar 31 minus
/// one month lands on Feb 28/29). Clock time and offset are kept.
pub fn months_back(
    now: OffsetDateTime,
    months: u32,
) -> Result<OffsetDateTime, time::error::ComponentRange> {
    let mut year = now.year();
    let mut month = u8::from(now.month()) as i32 - months as i32;
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let month = Month::try_from(month as u8)?;
    let day = now.day().min(month.length(year));
    Ok(now.replace_date(Date::from_calendar_date(year, month, day)?))
}
