//! Pay stub engine for US payroll previews
//!
//! This crate schedules pay periods over a date range and calculates, for each
//! period, gross pay, federal/state/local and payroll tax withholding,
//! deductions, contributions, employer benefits and net pay. Tax tables are
//! loaded from YAML and consumed through the [`config::TaxTables`] trait.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
