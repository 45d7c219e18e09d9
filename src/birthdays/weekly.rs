//! Weekly birthday report.
//!
//! A birthday qualifies when its next occurrence (today counts) is less than
//! [`WINDOW_DAYS`] days away. Occurrences on a Saturday or Sunday are
//! reported under Monday; the occurrence date itself is not moved, so the
//! window test always uses the real date.

use crate::domain::{Birthday, Name};
use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use tracing::{debug, trace};

/// Size of the look-ahead window in days.
pub const WINDOW_DAYS: i64 = 7;

/// English name of a weekday, as used for report buckets.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// The next date, on or after `today`, on which `birthday` falls.
///
/// Uses this year's occurrence unless it has already passed, in which case
/// next year's is used. Returns `None` only at the edge of chrono's date
/// range.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.occurrence_in(today.year())?;
    if this_year >= today {
        return Some(this_year);
    }
    birthday.occurrence_in(today.year() + 1)
}

/// The weekday an occurrence is reported under: weekends roll to Monday.
pub fn report_day(occurrence: NaiveDate) -> Weekday {
    match occurrence.weekday() {
        Weekday::Sat | Weekday::Sun => Weekday::Mon,
        day => day,
    }
}

/// Contacts with a birthday in the coming week, grouped by weekday.
///
/// Buckets appear in the order they were first filled and never hold an
/// empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyBirthdays {
    buckets: Vec<(Weekday, Vec<String>)>,
}

impl WeeklyBirthdays {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name` to the bucket for `day`, creating the bucket if needed.
    pub fn push(&mut self, day: Weekday, name: impl Into<String>) {
        let name = name.into();
        match self.buckets.iter_mut().find(|(d, _)| *d == day) {
            Some((_, names)) => names.push(name),
            None => self.buckets.push((day, vec![name])),
        }
    }

    /// True when nobody has a birthday this week.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of non-empty buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Names reported on `day`, if any.
    pub fn on(&self, day: Weekday) -> Option<&[String]> {
        self.buckets
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, names)| names.as_slice())
    }

    /// Names reported under the weekday called `day_name` (e.g. `"Monday"`).
    pub fn get(&self, day_name: &str) -> Option<&[String]> {
        self.buckets
            .iter()
            .find(|(d, _)| weekday_name(*d) == day_name)
            .map(|(_, names)| names.as_slice())
    }

    /// Buckets in first-filled order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> + '_ {
        self.buckets
            .iter()
            .map(|(day, names)| (weekday_name(*day), names.as_slice()))
    }
}

impl fmt::Display for WeeklyBirthdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (day, names)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", day, names.join(", "))?;
        }
        Ok(())
    }
}

/// Build the weekly report for `today` from `(name, birthday)` pairs.
///
/// Pairs are scanned in the order given; that order decides both bucket
/// order and name order inside a bucket.
pub fn weekly_birthdays<'a, I>(entries: I, today: NaiveDate) -> WeeklyBirthdays
where
    I: IntoIterator<Item = (&'a Name, &'a Birthday)>,
{
    let mut report = WeeklyBirthdays::new();

    for (name, birthday) in entries {
        let Some(occurrence) = next_occurrence(birthday, today) else {
            debug!(contact = %name, "Birthday occurrence out of date range, skipping");
            continue;
        };

        let delta = (occurrence - today).num_days();
        if delta >= WINDOW_DAYS {
            trace!(contact = %name, delta, "Birthday outside window");
            continue;
        }

        let day = report_day(occurrence);
        trace!(contact = %name, %occurrence, bucket = weekday_name(day), "Birthday this week");
        report.push(day, name.as_str());
    }

    debug!(%today, buckets = report.len(), "Weekly birthday scan complete");
    report
}
