use chrono::NaiveDate;
use thiserror::Error;

/// Error type that captures contract violations at the engine boundary.
///
/// Every variant marks invalid caller input. The engine reports these eagerly
/// instead of clamping to a plausible value; a visibly wrong call is easier to
/// fix than a silently wrong due date.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("invalid calendar date: {0:?}")]
    InvalidDate(String),
    #[error("unsupported installment count: {0}")]
    InvalidInstallmentCount(u32),
    #[error("installment number {0} is out of range")]
    InvalidInstallmentNumber(u32),
    #[error("current installment {current} outside plan of {total}")]
    InvalidCurrentInstallment { current: u32, total: u32 },
    #[error("due date {due} precedes start date {start}")]
    DueDateBeforeStart { start: NaiveDate, due: NaiveDate },
    #[error("computed due date falls outside the supported calendar range")]
    DueDateOutOfRange,
    #[error("amount must be a non-negative finite number, got {0}")]
    InvalidAmount(f64),
    #[error("every installment is already settled")]
    AlreadySettled,
}
