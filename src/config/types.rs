//! Configuration types for tax table lookups.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from the YAML tax table files, and the bracket arithmetic they carry.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::FilingStatus;

/// Metadata about a set of tax tables.
#[derive(Debug, Clone, Deserialize)]
pub struct TableMetadata {
    /// Human-readable name of the table set.
    pub name: String,
    /// The tax year the tables describe.
    pub tax_year: i32,
    /// Where the figures were taken from.
    pub source_url: String,
}

/// One marginal bracket: income above `over` is taxed at `rate`, up to the next bracket.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// Lower bound of the bracket (exclusive).
    pub over: Decimal,
    /// Marginal rate as a fraction (e.g., 0.22).
    pub rate: Decimal,
}

/// A progressive bracket schedule applied to annual income.
///
/// # Example
///
/// ```
/// use paystub_engine::config::{BracketSchedule, TaxBracket};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let schedule = BracketSchedule::new(vec![
///     TaxBracket { over: Decimal::ZERO, rate: Decimal::from_str("0.10").unwrap() },
///     TaxBracket { over: Decimal::from(10000), rate: Decimal::from_str("0.20").unwrap() },
/// ]);
///
/// // 10,000 at 10% plus 5,000 at 20%
/// assert_eq!(schedule.tax_for(Decimal::from(15000)), Decimal::from(2000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct BracketSchedule {
    brackets: Vec<TaxBracket>,
}

impl BracketSchedule {
    /// Creates a schedule, ordering the brackets by their lower bound.
    pub fn new(brackets: Vec<TaxBracket>) -> Self {
        let mut sorted = brackets;
        sorted.sort_by(|a, b| a.over.cmp(&b.over));
        Self { brackets: sorted }
    }

    /// Returns the brackets in ascending order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Computes the annual tax owed on `income`.
    ///
    /// Income at or below the first bracket's lower bound, and any negative
    /// income, owes nothing.
    pub fn tax_for(&self, income: Decimal) -> Decimal {
        let mut tax = Decimal::ZERO;
        for (i, bracket) in self.brackets.iter().enumerate() {
            if income <= bracket.over {
                break;
            }
            let ceiling = match self.brackets.get(i + 1) {
                Some(next) => next.over.min(income),
                None => income,
            };
            tax += (ceiling - bracket.over) * bracket.rate;
        }
        tax
    }
}

/// Federal schedule for a single filing status.
#[derive(Debug, Clone, Deserialize)]
pub struct FederalSchedule {
    /// Subtracted from annualized gross before bracketing.
    pub standard_deduction: Decimal,
    /// Annual brackets.
    pub brackets: BracketSchedule,
}

/// Federal configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct FederalConfig {
    /// Schedules keyed by filing status.
    pub filing_statuses: HashMap<FilingStatus, FederalSchedule>,
}

/// Income tax rules for one state.
#[derive(Debug, Clone, Deserialize)]
pub struct StateConfig {
    /// Display name of the state.
    pub name: String,
    /// False for states with no wage income tax.
    pub has_income_tax: bool,
    /// Whether allowances reduce taxable income.
    #[serde(default)]
    pub uses_allowances: bool,
    /// Annual income exempted per allowance.
    #[serde(default)]
    pub allowance_value_per_year: Decimal,
    /// Annual brackets; empty for states without income tax.
    #[serde(default)]
    pub brackets: BracketSchedule,
}

/// States configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct StatesConfig {
    /// Map of state code to its rules.
    pub states: HashMap<String, StateConfig>,
}

/// Local configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalConfig {
    /// Map of state code to a map of city name to flat rate.
    pub local: HashMap<String, HashMap<String, Decimal>>,
}

/// The complete tax table configuration loaded from YAML files.
///
/// State codes are stored upper-cased and city names lower-cased so lookups
/// are case-insensitive.
#[derive(Debug, Clone)]
pub struct TaxTableConfig {
    metadata: TableMetadata,
    federal: HashMap<FilingStatus, FederalSchedule>,
    states: HashMap<String, StateConfig>,
    local: HashMap<String, HashMap<String, Decimal>>,
}

impl TaxTableConfig {
    /// Creates a new TaxTableConfig from its component parts.
    pub fn new(
        metadata: TableMetadata,
        federal: HashMap<FilingStatus, FederalSchedule>,
        states: HashMap<String, StateConfig>,
        local: HashMap<String, HashMap<String, Decimal>>,
    ) -> Self {
        let federal = federal
            .into_iter()
            .map(|(status, schedule)| {
                let brackets = BracketSchedule::new(schedule.brackets.brackets);
                (
                    status,
                    FederalSchedule {
                        standard_deduction: schedule.standard_deduction,
                        brackets,
                    },
                )
            })
            .collect();

        let states = states
            .into_iter()
            .map(|(code, state)| {
                let brackets = BracketSchedule::new(state.brackets.brackets.clone());
                (normalize_state(&code), StateConfig { brackets, ..state })
            })
            .collect();

        let local = local
            .into_iter()
            .map(|(code, cities)| {
                let cities = cities
                    .into_iter()
                    .map(|(city, rate)| (normalize_city(&city), rate))
                    .collect();
                (normalize_state(&code), cities)
            })
            .collect();

        Self {
            metadata,
            federal,
            states,
            local,
        }
    }

    /// Returns the table metadata.
    pub fn metadata(&self) -> &TableMetadata {
        &self.metadata
    }

    /// Returns the federal schedule for a filing status.
    pub fn federal_schedule(&self, status: FilingStatus) -> Option<&FederalSchedule> {
        self.federal.get(&status)
    }

    /// Returns the rules for a state code, matched case-insensitively.
    pub fn state(&self, code: &str) -> Option<&StateConfig> {
        self.states.get(&normalize_state(code))
    }

    /// Returns the local rate for a city, matched case-insensitively.
    pub fn local_rate(&self, state_code: &str, city: &str) -> Option<Decimal> {
        self.local
            .get(&normalize_state(state_code))
            .and_then(|cities| cities.get(&normalize_city(city)))
            .copied()
    }
}

pub(crate) fn normalize_state(code: &str) -> String {
    code.trim().to_uppercase()
}

pub(crate) fn normalize_city(city: &str) -> String {
    city.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn three_bracket_schedule() -> BracketSchedule {
        // Deliberately out of order; the constructor sorts.
        BracketSchedule::new(vec![
            TaxBracket {
                over: dec("50000"),
                rate: dec("0.30"),
            },
            TaxBracket {
                over: dec("0"),
                rate: dec("0.10"),
            },
            TaxBracket {
                over: dec("20000"),
                rate: dec("0.20"),
            },
        ])
    }

    #[test]
    fn test_brackets_are_sorted() {
        let schedule = three_bracket_schedule();
        let bounds: Vec<Decimal> = schedule.brackets().iter().map(|b| b.over).collect();
        assert_eq!(bounds, vec![dec("0"), dec("20000"), dec("50000")]);
    }

    #[test]
    fn test_tax_within_first_bracket() {
        assert_eq!(three_bracket_schedule().tax_for(dec("15000")), dec("1500"));
    }

    #[test]
    fn test_tax_at_bracket_boundary() {
        assert_eq!(three_bracket_schedule().tax_for(dec("20000")), dec("2000"));
    }

    #[test]
    fn test_tax_spanning_all_brackets() {
        // 2,000 + 6,000 + 15,000
        assert_eq!(three_bracket_schedule().tax_for(dec("100000")), dec("23000"));
    }

    #[test]
    fn test_zero_and_negative_income_owe_nothing() {
        let schedule = three_bracket_schedule();
        assert_eq!(schedule.tax_for(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(schedule.tax_for(dec("-500")), Decimal::ZERO);
    }

    #[test]
    fn test_empty_schedule_owes_nothing() {
        assert_eq!(BracketSchedule::default().tax_for(dec("90000")), Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_schedule_from_yaml_list() {
        let yaml = r#"
- over: "0"
  rate: "0.05"
- over: "1000"
  rate: "0.07"
"#;
        let schedule: BracketSchedule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(schedule.brackets().len(), 2);
        assert_eq!(schedule.tax_for(dec("2000")), dec("120"));
    }

    #[test]
    fn test_lookups_are_case_insensitive() {
        let mut states = HashMap::new();
        states.insert(
            "ny".to_string(),
            StateConfig {
                name: "New York".to_string(),
                has_income_tax: true,
                uses_allowances: false,
                allowance_value_per_year: Decimal::ZERO,
                brackets: BracketSchedule::default(),
            },
        );
        let mut cities = HashMap::new();
        cities.insert("New York City".to_string(), dec("0.03876"));
        let mut local = HashMap::new();
        local.insert("NY".to_string(), cities);

        let config = TaxTableConfig::new(
            TableMetadata {
                name: "test".to_string(),
                tax_year: 2025,
                source_url: "https://example.com".to_string(),
            },
            HashMap::new(),
            states,
            local,
        );

        assert!(config.state("NY").is_some());
        assert!(config.state(" Ny ").is_some());
        assert_eq!(
            config.local_rate("ny", "new york city"),
            Some(dec("0.03876"))
        );
        assert_eq!(config.local_rate("NY", "Buffalo"), None);
    }
}
