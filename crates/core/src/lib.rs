//! Core business logic for Spendwise.
//!
//! This crate contains pure business logic with ZERO web or storage dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `period` - Budget periods, date ranges and the injectable clock
//! - `transaction` - Income/expense records and list filtering
//! - `category` - User-defined categories
//! - `budget` - Spending aggregation, budget comparison and totals
//! - `dashboard` - Dashboard totals and monthly series

pub mod budget;
pub mod category;
pub mod dashboard;
pub mod period;
pub mod transaction;
