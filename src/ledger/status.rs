//! Per-installment classification relative to an injected reference date.
//!
//! Nothing here is persisted; display layers call in on demand. The stored
//! `current` pointer is trusted as the source of truth for paid progress, and
//! every due date is recomputed from the schedule.

use chrono::NaiveDate;

use super::schedule;
use super::transaction::InstallmentPlan;
use crate::errors::EngineError;

/// Derived state of one installment.
///
/// Paid, current, and overdue are driven purely by comparing the installment
/// number against the plan's `current` pointer and the due date against the
/// reference date; there is no per-installment paid flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallmentState {
    pub number: u32,
    pub due_date: NaiveDate,
    /// Confirmed paid: number below the current pointer.
    pub paid: bool,
    /// The next unpaid installment.
    pub is_current: bool,
    /// Due date has passed and this installment is not confirmed paid.
    pub overdue: bool,
    /// Whole days elapsed since the due date; 0 unless overdue.
    pub days_overdue: i64,
    /// Raw signed countdown to the due date. Goes negative once the date has
    /// passed, regardless of paid status.
    pub days_remaining: i64,
}

/// Full schedule report for one transaction.
#[derive(Debug, Clone)]
pub struct InstallmentReport {
    /// One descriptor per installment, in schedule order.
    pub installments: Vec<InstallmentState>,
    /// The overdue subset, in installment order.
    pub overdue: Vec<InstallmentState>,
    pub has_overdue: bool,
    /// Largest days-overdue across the overdue subset; 0 when none.
    pub max_days_overdue: i64,
    /// Due date of the earliest overdue installment.
    pub oldest_overdue: Option<NaiveDate>,
    pub paid_count: u32,
    pub remaining_count: u32,
    current_index: usize,
}

impl InstallmentReport {
    /// Descriptor of the next unpaid installment; callers use its due date to
    /// render "next payment due".
    pub fn current(&self) -> &InstallmentState {
        &self.installments[self.current_index]
    }
}

/// Enumerates every installment of a plan with its classification relative to
/// `today`. The reference date is an explicit parameter so the report is
/// deterministic under test.
pub fn installment_report(
    start: NaiveDate,
    plan: &InstallmentPlan,
    today: NaiveDate,
) -> Result<InstallmentReport, EngineError> {
    plan.validate()?;

    let mut installments = Vec::with_capacity(plan.total as usize);
    for number in 1..=plan.total {
        let due_date = schedule::due_date_for_installment(start, number, plan.period)?;
        let paid = number < plan.current;
        let overdue = due_date < today && number >= plan.current;
        installments.push(InstallmentState {
            number,
            due_date,
            paid,
            is_current: number == plan.current,
            overdue,
            days_overdue: if overdue { (today - due_date).num_days() } else { 0 },
            days_remaining: (due_date - today).num_days(),
        });
    }

    let overdue: Vec<InstallmentState> = installments
        .iter()
        .filter(|state| state.overdue)
        .cloned()
        .collect();
    let max_days_overdue = overdue.iter().map(|state| state.days_overdue).max().unwrap_or(0);
    let oldest_overdue = overdue.first().map(|state| state.due_date);
    let paid_count = plan.current - 1;

    Ok(InstallmentReport {
        has_overdue: !overdue.is_empty(),
        max_days_overdue,
        oldest_overdue,
        paid_count,
        remaining_count: plan.total - paid_count,
        current_index: (plan.current - 1) as usize,
        installments,
        overdue,
    })
}
