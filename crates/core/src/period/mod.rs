//! Budget periods and the clock that anchors them.
//!
//! A [`BudgetPeriod`] keyword plus a reference instant resolves to a
//! concrete, inclusive [`DateRange`]. "Now" always comes from a [`Clock`].

pub mod clock;
pub mod range;

pub use clock::{Clock, FixedClock, SystemClock};
pub use range::{BudgetPeriod, DateRange, PeriodParseError};
