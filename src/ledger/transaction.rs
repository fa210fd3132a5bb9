use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::schedule::{self, Period};
use super::status::{self, InstallmentReport};
use crate::currency::Amount;
use crate::errors::EngineError;

/// Kind of financial record. Income flows in; everything else flows out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
    DailyExpense,
    Bill,
    Debt,
}

impl TransactionKind {
    pub fn is_inflow(&self) -> bool {
        matches!(self, TransactionKind::Income)
    }

    /// Whether due-date and installment tracking applies. Income and daily
    /// purchases are always single payment.
    pub fn tracks_due_dates(&self) -> bool {
        !matches!(self, TransactionKind::Income | TransactionKind::DailyExpense)
    }
}

/// How an installment gets paid. Orthogonal to scheduling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PaymentMethod {
    Pix {
        holder_name: String,
        bank: String,
        pix_key: String,
        pix_holder_name: String,
        pix_bank: String,
    },
    Card {
        holder_name: String,
        bank: String,
        recipient_holder_name: String,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

/// Installment schedule parameters plus the paid-progress pointer.
///
/// `current` is the 1-indexed number of the next unpaid installment. It moves
/// only through [`Transaction::advance_current_installment`], and the due date
/// is always derived from (`date`, `total`, `period`) on read, so the stored
/// state can never contradict the schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstallmentPlan {
    pub total: u32,
    pub current: u32,
    pub period: Period,
}

impl InstallmentPlan {
    pub fn new(total: u32, period: Period) -> Result<Self, EngineError> {
        if total < 1 || total > schedule::MAX_INSTALLMENTS {
            return Err(EngineError::InvalidInstallmentCount(total));
        }
        Ok(Self {
            total,
            current: 1,
            period,
        })
    }

    /// Degenerate single-payment plan.
    pub fn single(period: Period) -> Self {
        Self {
            total: 1,
            current: 1,
            period,
        }
    }

    /// Rebuilds a plan from a record that carries a stored due date, deriving
    /// the paid-progress pointer from it. Import path for serialized records;
    /// newly created transactions start at installment 1 via [`Self::new`].
    pub fn from_due_date(
        start: NaiveDate,
        due: NaiveDate,
        total: u32,
        period: Period,
    ) -> Result<Self, EngineError> {
        if total < 1 || total > schedule::MAX_INSTALLMENTS {
            return Err(EngineError::InvalidInstallmentCount(total));
        }
        let current = schedule::current_installment_number(start, due, period)?;
        if current > total {
            return Err(EngineError::InvalidCurrentInstallment { current, total });
        }
        Ok(Self {
            total,
            current,
            period,
        })
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.total < 1 || self.total > schedule::MAX_INSTALLMENTS {
            return Err(EngineError::InvalidInstallmentCount(self.total));
        }
        if self.current < 1 || self.current > self.total {
            return Err(EngineError::InvalidCurrentInstallment {
                current: self.current,
                total: self.total,
            });
        }
        Ok(())
    }
}

/// The unit of financial record.
///
/// `date` is the date of the first payment; the final due date and every
/// per-installment date are derived from the plan on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub description: String,
    pub category: String,
    pub amount: Amount,
    pub date: NaiveDate,
    pub installments: InstallmentPlan,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Amount,
        date: NaiveDate,
        installments: InstallmentPlan,
    ) -> Result<Self, EngineError> {
        installments.validate()?;
        if !kind.tracks_due_dates() && installments.total != 1 {
            return Err(EngineError::InvalidInstallmentCount(installments.total));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            description: description.into(),
            category: category.into(),
            amount,
            date,
            installments,
            payment_method: None,
            status: TransactionStatus::Pending,
        })
    }

    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = Some(method);
        self
    }

    /// Date of the final installment. Equals `date` when `total == 1`.
    ///
    /// Errors only for an invalid stored plan, which can reach this point
    /// through deserialized external records; transactions built via
    /// [`Transaction::new`] always carry a validated plan.
    pub fn due_date(&self) -> Result<NaiveDate, EngineError> {
        self.installments.validate()?;
        schedule::final_due_date(self.date, self.installments.total, self.installments.period)
    }

    /// Due date of one installment of this transaction, 1-indexed and bounded
    /// by the plan's total.
    pub fn installment_due_date(&self, number: u32) -> Result<NaiveDate, EngineError> {
        if number < 1 || number > self.installments.total {
            return Err(EngineError::InvalidInstallmentNumber(number));
        }
        schedule::due_date_for_installment(self.date, number, self.installments.period)
    }

    /// Confirms payment of the current installment and returns the advanced
    /// copy. Payments are strictly in order: the pointer moves one step at a
    /// time, and confirming the final installment settles the transaction.
    pub fn advance_current_installment(&self) -> Result<Transaction, EngineError> {
        if self.status == TransactionStatus::Paid {
            return Err(EngineError::AlreadySettled);
        }
        let mut advanced = self.clone();
        if advanced.installments.current < advanced.installments.total {
            advanced.installments.current += 1;
        } else {
            advanced.status = TransactionStatus::Paid;
        }
        tracing::debug!(
            transaction = %advanced.id,
            current = advanced.installments.current,
            total = advanced.installments.total,
            settled = advanced.status == TransactionStatus::Paid,
            "advanced installment pointer"
        );
        Ok(advanced)
    }

    /// Derived per-installment state relative to `today` (injected, never read
    /// from the system clock).
    pub fn status_report(&self, today: NaiveDate) -> Result<InstallmentReport, EngineError> {
        status::installment_report(self.date, &self.installments, today)
    }
}
