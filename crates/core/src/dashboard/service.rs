//! Dashboard aggregation service.

use chrono::{DateTime, Months, Utc};
use rust_decimal::Decimal;

use super::types::{DashboardSummary, MonthlyTotals};
use crate::budget::{SpendingByCategory, spending_by_category};
use crate::period::{BudgetPeriod, DateRange};
use crate::transaction::{Transaction, TransactionType};

/// Number of transactions listed under "recent".
pub const RECENT_TRANSACTION_LIMIT: usize = 5;

/// Number of months in the income/expense series, including the current one.
pub const MONTHLY_HISTORY_MONTHS: u32 = 6;

/// Dashboard service for business logic.
pub struct DashboardService;

impl DashboardService {
    /// Builds the dashboard for one user's transactions as of `now`.
    #[must_use]
    pub fn build(transactions: &[Transaction], now: DateTime<Utc>) -> DashboardSummary {
        let total_income = Self::sum_of(transactions.iter(), TransactionType::Income);
        let total_expenses = Self::sum_of(transactions.iter(), TransactionType::Expense);

        let mut recent: Vec<Transaction> = transactions.to_vec();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(RECENT_TRANSACTION_LIMIT);

        DashboardSummary {
            total_income,
            total_expenses,
            balance: total_income.saturating_sub(total_expenses),
            recent_transactions: recent,
            monthly_data: Self::monthly_series(transactions, now),
            category_summary: Self::category_summary(transactions),
        }
    }

    /// Income and expense for the last [`MONTHLY_HISTORY_MONTHS`] calendar
    /// months ending with the month of `now`, oldest first.
    #[must_use]
    pub fn monthly_series(transactions: &[Transaction], now: DateTime<Utc>) -> Vec<MonthlyTotals> {
        let today = now.date_naive();

        (0..MONTHLY_HISTORY_MONTHS)
            .rev()
            .filter_map(|back| today.checked_sub_months(Months::new(back)))
            .map(|day| {
                let range = BudgetPeriod::Monthly.range_for_date(day);
                let in_month = || transactions.iter().filter(move |t| range.contains(t.date));

                MonthlyTotals {
                    month: range.start.format("%b").to_string(),
                    start_date: range.start,
                    income: Self::sum_of(in_month(), TransactionType::Income),
                    expense: Self::sum_of(in_month(), TransactionType::Expense),
                }
            })
            .collect()
    }

    /// All-time expense totals per category.
    #[must_use]
    pub fn category_summary(transactions: &[Transaction]) -> SpendingByCategory {
        let everything = DateRange::new(DateTime::<Utc>::MIN_UTC, DateTime::<Utc>::MAX_UTC);
        spending_by_category(transactions, &everything)
    }

    fn sum_of<'a, I>(transactions: I, kind: TransactionType) -> Decimal
    where
        I: Iterator<Item = &'a Transaction>,
    {
        transactions
            .filter(|t| t.transaction_type == kind)
            .fold(Decimal::ZERO, |sum, t| sum.saturating_add(t.amount))
    }
}
