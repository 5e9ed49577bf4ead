//! Date helpers for labelling the current week.
//!
//! The tracker displays the Monday of the current calendar week. The label is
//! display-only; the expense log is never partitioned by week.

use time::{Date, Duration};

/// The Monday on or before `date`.
///
/// A date that is already a Monday maps to itself; a Sunday maps to the
/// Monday six days earlier. Month and year boundaries are handled by
/// ordinary calendar arithmetic.
pub fn monday_of(date: Date) -> Date {
    date - Duration::days(date.weekday().number_days_from_monday() as i64)
}

/// The week label for `date`: the Monday of its week formatted as
/// `MM-DD-YYYY`.
pub fn week_label(date: Date) -> String {
    let monday = monday_of(date);

    format!(
        "{:02}-{:02}-{}",
        monday.month() as u8,
        monday.day(),
        monday.year()
    )
}
