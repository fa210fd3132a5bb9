//! Ledger-wide totals across a transaction collection.

use serde::{Deserialize, Serialize};

use super::transaction::{Transaction, TransactionKind};
use crate::currency::Amount;

/// Net cash position buckets for the summary view.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerTotals {
    pub income: Amount,
    /// Expenses, daily purchases, and bills; presentation-distinct but
    /// ledger-equivalent as outflow.
    pub expenses: Amount,
    pub debts: Amount,
    pub total: Amount,
}

/// Sums a snapshot of transactions into income, expense, and debt buckets.
///
/// `total` is maintained as a running subtraction per record rather than a
/// final combination; with fixed-point amounts the result is exact and
/// independent of input order. Total over any input, zero-record when empty.
pub fn summarize(transactions: &[Transaction]) -> LedgerTotals {
    let mut totals = LedgerTotals::default();
    for txn in transactions {
        match txn.kind {
            TransactionKind::Income => totals.income += txn.amount,
            TransactionKind::Expense | TransactionKind::DailyExpense | TransactionKind::Bill => {
                totals.expenses += txn.amount
            }
            TransactionKind::Debt => totals.debts += txn.amount,
        }
        totals.total = totals.income - totals.expenses - totals.debts;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::schedule::Period;
    use crate::ledger::transaction::InstallmentPlan;
    use chrono::NaiveDate;

    fn txn(kind: TransactionKind, minor: i64) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        Transaction::new(
            kind,
            "sample",
            "misc",
            Amount::from_minor(minor),
            date,
            InstallmentPlan::single(Period::Monthly),
        )
        .unwrap()
    }

    #[test]
    fn empty_input_yields_the_zero_record() {
        assert_eq!(summarize(&[]), LedgerTotals::default());
    }

    #[test]
    fn buckets_by_kind_and_nets_the_total() {
        let transactions = vec![
            txn(TransactionKind::Income, 10_000),
            txn(TransactionKind::Expense, 3_000),
            txn(TransactionKind::Bill, 2_000),
            txn(TransactionKind::Debt, 1_000),
        ];
        let totals = summarize(&transactions);
        assert_eq!(totals.income, Amount::from_minor(10_000));
        assert_eq!(totals.expenses, Amount::from_minor(5_000));
        assert_eq!(totals.debts, Amount::from_minor(1_000));
        assert_eq!(totals.total, Amount::from_minor(4_000));
    }

    #[test]
    fn daily_purchases_count_as_expenses() {
        let totals = summarize(&[txn(TransactionKind::DailyExpense, 750)]);
        assert_eq!(totals.expenses, Amount::from_minor(750));
        assert_eq!(totals.total, Amount::from_minor(-750));
    }
}
