//! Transaction domain model, installment scheduling, and derived status.

pub mod schedule;
pub mod status;
pub mod summary;
pub mod transaction;

pub use schedule::{
    current_installment_number, due_date_for_installment, final_due_date, Period,
    MAX_INSTALLMENTS,
};
pub use status::{installment_report, InstallmentReport, InstallmentState};
pub use summary::{summarize, LedgerTotals};
pub use transaction::{
    InstallmentPlan, PaymentMethod, Transaction, TransactionKind, TransactionStatus,
};
