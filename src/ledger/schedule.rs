//! Installment due-date arithmetic.
//!
//! All functions are pure over (start date, installment number, period).
//! Period steps use calendar-field arithmetic with the day-of-month clamped to
//! the target month's length, so a schedule anchored on the 31st lands on the
//! last valid day of shorter months instead of rolling into the next month.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Recurrence unit between two consecutive installments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Monthly,
    Yearly,
}

/// Longest supported schedule: a century of monthly installments.
pub const MAX_INSTALLMENTS: u32 = 1_200;

/// Due date of the 1-indexed `number`th installment: `start` plus
/// `number - 1` periods. `number = 1` returns `start` unchanged.
pub fn due_date_for_installment(
    start: NaiveDate,
    number: u32,
    period: Period,
) -> Result<NaiveDate, EngineError> {
    if number < 1 || number > MAX_INSTALLMENTS {
        return Err(EngineError::InvalidInstallmentNumber(number));
    }
    let steps = (number - 1) as i32;
    if steps == 0 {
        return Ok(start);
    }
    let shifted = match period {
        Period::Monthly => shift_month(start, steps),
        Period::Yearly => shift_year(start, steps),
    };
    shifted.ok_or(EngineError::DueDateOutOfRange)
}

/// Due date of the last installment; this defines a transaction's due date.
pub fn final_due_date(
    start: NaiveDate,
    total: u32,
    period: Period,
) -> Result<NaiveDate, EngineError> {
    if total < 1 || total > MAX_INSTALLMENTS {
        return Err(EngineError::InvalidInstallmentCount(total));
    }
    due_date_for_installment(start, total, period)
}

/// Infers which installment number a due date corresponds to, relative to
/// `start`, under the same period semantics.
///
/// Only the year and month fields are compared, so the inverse is robust to
/// the day clamping performed by [`due_date_for_installment`]. The result may
/// exceed a plan's total when the due date was stored inconsistently; callers
/// must not rely on it being clamped.
pub fn current_installment_number(
    start: NaiveDate,
    due: NaiveDate,
    period: Period,
) -> Result<u32, EngineError> {
    let number = match period {
        Period::Monthly => {
            (due.year() - start.year()) * 12 + due.month() as i32 - start.month() as i32 + 1
        }
        Period::Yearly => due.year() - start.year() + 1,
    };
    if number < 1 {
        return Err(EngineError::DueDateBeforeStart { start, due });
    }
    Ok(number as u32)
}

// The shift helpers return None once the target leaves chrono's supported
// calendar range; callers surface that as an error rather than clamping.

fn shift_month(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let day = date.day().min(days_in_month(year, month as u32)?);
    NaiveDate::from_ymd_opt(year, month as u32, day)
}

fn shift_year(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    let year = date.year().checked_add(years)?;
    let month = date.month();
    let day = date.day().min(days_in_month(year, month)?);
    NaiveDate::from_ymd_opt(year, month, day)
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    let last_current = first_next - Duration::days(1);
    Some(last_current.day())
}
