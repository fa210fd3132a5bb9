//! Canonical calendar-date parsing and display helpers.
//!
//! Dates cross the engine boundary as `YYYY-MM-DD` strings with no time of day
//! and no timezone offset. Parsing and rendering go through the three integer
//! components directly, so a date can never drift by a day through a UTC or
//! local-offset conversion.

use chrono::{Datelike, Local, NaiveDate};

use crate::errors::EngineError;

/// Time source abstraction so derived status can be driven by a fixed
/// reference date in tests.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Real-time clock backed by the local system date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Parses a canonical `YYYY-MM-DD` string into a [`NaiveDate`].
pub fn parse_date(input: &str) -> Result<NaiveDate, EngineError> {
    let invalid = || EngineError::InvalidDate(input.to_string());
    let mut parts = input.splitn(3, '-');
    let (year, month, day) = match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => (year, month, day),
        _ => return Err(invalid()),
    };
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Renders a date in canonical `YYYY-MM-DD` form.
pub fn canonical(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Re-normalizes an incoming date string to canonical form.
pub fn normalize(input: &str) -> Result<String, EngineError> {
    parse_date(input).map(canonical)
}

/// Today's date in canonical form, for callers without their own [`Clock`].
pub fn today() -> String {
    canonical(SystemClock.today())
}

/// Long display form: day, full month name, year.
pub fn format_long(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), month_name(date.month()), date.year())
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}
