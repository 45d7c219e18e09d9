//! Upcoming-birthday scheduling.
//!
//! Given "today", works out which birthdays fall inside the coming week and
//! groups the contacts by the weekday they should be congratulated on.

pub mod weekly;

pub use weekly::{
    next_occurrence, report_day, weekday_name, weekly_birthdays, WeeklyBirthdays, WINDOW_DAYS,
};
