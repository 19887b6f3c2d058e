//! Test fixture modules for database record creation.
//!
//! Each submodule adds an accessor to [`TestContext`](crate::TestContext) returning a
//! fixture helper for one table, e.g. `test.team().insert_team(institution_id, "Tigres FC")`.

pub mod institution;
pub mod season;
pub mod team;
pub mod tournament;
pub mod tournament_match;

use chrono::{NaiveDate, NaiveDateTime};

pub use tournament_match::MockSchedule;

/// Midnight of the given day.
///
/// # Panics
/// Panics if the date does not exist
pub fn date(year: i32, month: u32, day: u32) -> NaiveDateTime {
    datetime(year, month, day, 0, 0)
}

/// The given day at `hour:minute:00`.
///
/// # Panics
/// Panics if the date or time does not exist
pub fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|day| day.and_hms_opt(hour, minute, 0))
        .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day} {hour}:{minute}"))
}
