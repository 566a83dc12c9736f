//! Expense aggregation by category.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::period::DateRange;
use crate::transaction::Transaction;

/// Total expenses keyed by exact category name.
pub type SpendingByCategory = BTreeMap<String, Decimal>;

/// Sums expense amounts per category for transactions dated inside `range`.
///
/// Income is ignored. Categories are matched case-sensitively, and a
/// category with no qualifying transactions has no entry at all.
#[must_use]
pub fn spending_by_category<'a, I>(transactions: I, range: &DateRange) -> SpendingByCategory
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|t| t.is_expense() && range.contains(t.date))
        .fold(SpendingByCategory::new(), |mut acc, t| {
            let total = acc.entry(t.category.clone()).or_insert(Decimal::ZERO);
            *total = total.saturating_add(t.amount);
            acc
        })
}
