//! Request types for the pay stub engine API.
//!
//! This module defines the JSON request structures for the `/preview` endpoint.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AbsencePlanItem, ContributionItem, DeductionItem, EmployerBenefitItem, FilingStatus,
    Jurisdiction, PayFrequency, PayType, PayrollRequest, PeriodOverride, WorkerType,
};

/// Request body for the `/preview` endpoint.
///
/// Contains everything needed to preview the pay stubs for one worker over a
/// date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// Who is being paid and how.
    pub worker: WorkerRequest,
    /// The range to cover and the pay cadence.
    pub schedule: ScheduleRequest,
    /// Where the worker is taxed.
    #[serde(default)]
    pub jurisdiction: JurisdictionRequest,
    /// Tax elections made by the worker.
    #[serde(default)]
    pub elections: ElectionsRequest,
    /// Per-period overrides.
    #[serde(default)]
    pub overrides: Vec<PeriodOverride>,
    /// Withholdable obligations.
    #[serde(default)]
    pub deductions: Vec<DeductionItem>,
    /// Voluntary savings contributions.
    #[serde(default)]
    pub contributions: Vec<ContributionItem>,
    /// Employer-paid benefits.
    #[serde(default)]
    pub benefits: Vec<EmployerBenefitItem>,
    /// Paid leave balances to print.
    #[serde(default)]
    pub absence_plans: Vec<AbsencePlanItem>,
}

/// Worker information in a preview request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerRequest {
    /// Employee or contractor.
    pub worker_type: WorkerType,
    /// Hourly or salary.
    pub pay_type: PayType,
    /// Hourly rate (hourly pay only).
    #[serde(default)]
    pub rate: Option<Decimal>,
    /// Annual salary (salary pay only).
    #[serde(default)]
    pub annual_salary: Option<Decimal>,
}

/// Schedule information in a preview request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Weekly or biweekly.
    #[serde(default)]
    pub pay_frequency: Option<PayFrequency>,
    /// Weekday wages are paid on (e.g., "Fri").
    pub pay_day_of_week: Weekday,
    /// First day to cover (inclusive).
    pub start_date: NaiveDate,
    /// Last day to cover (inclusive).
    pub end_date: NaiveDate,
}

/// Jurisdiction information in a preview request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JurisdictionRequest {
    /// Two-letter state code.
    #[serde(default)]
    pub state: Option<String>,
    /// City name for local tax.
    #[serde(default)]
    pub city: Option<String>,
    /// Whether to withhold local tax.
    #[serde(default)]
    pub include_local_tax: bool,
}

/// Tax elections in a preview request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElectionsRequest {
    /// Federal filing status; omit for the flat-rate fallback.
    #[serde(default)]
    pub federal_filing_status: Option<FilingStatus>,
    /// State allowances claimed.
    #[serde(default)]
    pub state_allowance_count: u32,
}

impl From<JurisdictionRequest> for Jurisdiction {
    fn from(req: JurisdictionRequest) -> Self {
        Jurisdiction {
            state: req.state,
            city: req.city,
            include_local_tax: req.include_local_tax,
        }
    }
}

impl From<PreviewRequest> for PayrollRequest {
    fn from(req: PreviewRequest) -> Self {
        PayrollRequest {
            worker_type: req.worker.worker_type,
            pay_type: req.worker.pay_type,
            rate: req.worker.rate,
            annual_salary: req.worker.annual_salary,
            pay_frequency: req.schedule.pay_frequency,
            pay_day_of_week: req.schedule.pay_day_of_week,
            generation_start: req.schedule.start_date,
            generation_end: req.schedule.end_date,
            jurisdiction: req.jurisdiction.into(),
            federal_filing_status: req.elections.federal_filing_status,
            state_allowance_count: req.elections.state_allowance_count,
            overrides: req.overrides,
            deductions: req.deductions,
            contributions: req.contributions,
            benefits: req.benefits,
            absence_plans: req.absence_plans,
        }
    }
}
