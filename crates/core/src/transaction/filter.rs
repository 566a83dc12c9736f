//! Transaction list filtering.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::types::{Transaction, TransactionType};
use crate::period::DateRange;

/// Optional criteria for listing transactions. All present criteria must match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionFilter {
    /// Exact category name; blank means no constraint.
    pub category: Option<String>,
    /// Income or expense only.
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    /// Lower date bound; ignored unless `end_date` is also set.
    pub start_date: Option<DateTime<Utc>>,
    /// Upper date bound; ignored unless `start_date` is also set.
    pub end_date: Option<DateTime<Utc>>,
    /// Case-insensitive text searched in description and category.
    pub search: Option<String>,
}

impl TransactionFilter {
    /// Inclusive date window, present only when both bounds are supplied.
    #[must_use]
    pub fn date_range(&self) -> Option<DateRange> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        }
    }

    /// Returns true if `transaction` satisfies every present criterion.
    #[must_use]
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if self
            .category
            .as_deref()
            .filter(|category| !category.trim().is_empty())
            .is_some_and(|category| transaction.category != category)
        {
            return false;
        }

        if self
            .transaction_type
            .is_some_and(|kind| transaction.transaction_type != kind)
        {
            return false;
        }

        if self
            .date_range()
            .is_some_and(|range| !range.contains(transaction.date))
        {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => {
                let needle = needle.to_lowercase();
                transaction.description.to_lowercase().contains(&needle)
                    || transaction.category.to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }

    /// Keeps matching transactions, newest first.
    #[must_use]
    pub fn apply<I>(&self, transactions: I) -> Vec<Transaction>
    where
        I: IntoIterator<Item = Transaction>,
    {
        let mut matched: Vec<Transaction> = transactions
            .into_iter()
            .filter(|transaction| self.matches(transaction))
            .collect();
        matched.sort_by(|a, b| b.date.cmp(&a.date));
        matched
    }
}
