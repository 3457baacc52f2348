//! In-memory tax tables shared by unit tests.

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

use crate::models::FilingStatus;

use super::types::{
    BracketSchedule, FederalSchedule, StateConfig, TableMetadata, TaxBracket, TaxTableConfig,
};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn schedule(pairs: &[(&str, &str)]) -> BracketSchedule {
    BracketSchedule::new(
        pairs
            .iter()
            .map(|(over, rate)| TaxBracket {
                over: dec(over),
                rate: dec(rate),
            })
            .collect(),
    )
}

/// Small, round-numbered tables so expected figures can be worked by hand.
///
/// - Federal single: 15,000 standard deduction, 10% to 10,000 then 20%.
/// - Federal married jointly: 30,000 standard deduction, 10% to 20,000 then 20%.
/// - State `AA`: allowances worth 1,000 each, 5% to 20,000 then 8%; city `Metro` at 1%.
/// - State `BB`: flat 4%, no allowances.
/// - State `NT`: no income tax.
pub(crate) fn sample_tables() -> TaxTableConfig {
    let mut federal = HashMap::new();
    federal.insert(
        FilingStatus::Single,
        FederalSchedule {
            standard_deduction: dec("15000"),
            brackets: schedule(&[("0", "0.10"), ("10000", "0.20")]),
        },
    );
    federal.insert(
        FilingStatus::MarriedJointly,
        FederalSchedule {
            standard_deduction: dec("30000"),
            brackets: schedule(&[("0", "0.10"), ("20000", "0.20")]),
        },
    );

    let mut states = HashMap::new();
    states.insert(
        "AA".to_string(),
        StateConfig {
            name: "Alpha".to_string(),
            has_income_tax: true,
            uses_allowances: true,
            allowance_value_per_year: dec("1000"),
            brackets: schedule(&[("0", "0.05"), ("20000", "0.08")]),
        },
    );
    states.insert(
        "BB".to_string(),
        StateConfig {
            name: "Bravo".to_string(),
            has_income_tax: true,
            uses_allowances: false,
            allowance_value_per_year: dec("1000"),
            brackets: schedule(&[("0", "0.04")]),
        },
    );
    states.insert(
        "NT".to_string(),
        StateConfig {
            name: "No Tax".to_string(),
            has_income_tax: false,
            uses_allowances: false,
            allowance_value_per_year: Decimal::ZERO,
            brackets: BracketSchedule::default(),
        },
    );

    let mut metro = HashMap::new();
    metro.insert("Metro".to_string(), dec("0.01"));
    let mut local = HashMap::new();
    local.insert("AA".to_string(), metro);

    TaxTableConfig::new(
        TableMetadata {
            name: "Unit test tables".to_string(),
            tax_year: 2025,
            source_url: "https://example.com".to_string(),
        },
        federal,
        states,
        local,
    )
}
