//! Period keywords and the date ranges they resolve to.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Last representable millisecond of a day.
const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_milli_opt(23, 59, 59, 999) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

/// A budgeting cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// Calendar month.
    #[default]
    Monthly,
    /// Calendar quarter (Jan-Mar, Apr-Jun, Jul-Sep, Oct-Dec).
    Quarterly,
    /// Calendar year.
    Yearly,
}

/// Returned when a keyword is not one of `monthly`, `quarterly`, `yearly`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown budget period: {0} (expected monthly, quarterly or yearly)")]
pub struct PeriodParseError(pub String);

impl BudgetPeriod {
    /// All periods, shortest first.
    pub const ALL: [Self; 3] = [Self::Monthly, Self::Quarterly, Self::Yearly];

    /// Returns the lowercase keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    /// Number of calendar months the period spans.
    #[must_use]
    pub const fn months(self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::Yearly => 12,
        }
    }

    /// Lenient keyword lookup used on read paths.
    ///
    /// Unknown keywords resolve to [`BudgetPeriod::Monthly`] rather than failing.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Self {
        keyword.parse().unwrap_or_default()
    }

    /// Resolves the period containing `now`.
    #[must_use]
    pub fn resolve(self, now: DateTime<Utc>) -> DateRange {
        self.range_for_date(now.date_naive())
    }

    /// Resolves the period containing the calendar day `date`.
    #[must_use]
    pub fn range_for_date(self, date: NaiveDate) -> DateRange {
        let first_day = match self {
            Self::Monthly => date.with_day(1),
            Self::Quarterly => date
                .with_day(1)
                .and_then(|d| d.with_month(date.month0() / 3 * 3 + 1)),
            Self::Yearly => date.with_ordinal(1),
        }
        .unwrap_or(date);

        let last_day = first_day
            .checked_add_months(Months::new(self.months()))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX);

        DateRange {
            start: first_day.and_time(NaiveTime::MIN).and_utc(),
            end: last_day.and_time(END_OF_DAY).and_utc(),
        }
    }
}

impl std::fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BudgetPeriod {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(PeriodParseError(s.to_string())),
        }
    }
}

/// An inclusive `[start, end]` interval of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First instant in the range.
    pub start: DateTime<Utc>,
    /// Last instant in the range.
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Creates a range from two bounds.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Returns true if `instant` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}
