//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax tables
//! from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::FilingStatus;

use super::tables::{StateTaxInfo, TaxTables};
use super::types::{FederalConfig, LocalConfig, StatesConfig, TableMetadata, TaxTableConfig};

/// Loads and provides access to tax tables.
///
/// The `ConfigLoader` reads YAML files from a directory and answers the
/// [`TaxTables`] lookups the tax engine needs.
///
/// # Directory Structure
///
/// ```text
/// config/us_2025/
/// ├── tables.yaml   # Table metadata
/// ├── federal.yaml  # Federal brackets per filing status
/// ├── states.yaml   # State income tax rules
/// └── local.yaml    # City rates per state
/// ```
///
/// # Example
///
/// ```no_run
/// use paystub_engine::config::{ConfigLoader, TaxTables};
///
/// let loader = ConfigLoader::load("./config/us_2025").unwrap();
/// println!("Loaded tables: {}", loader.metadata().name);
///
/// let rate = loader.local_tax_rate("PA", "Philadelphia");
/// println!("Philadelphia wage tax: {}", rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TaxTableConfig,
}

impl ConfigLoader {
    /// Loads tax tables from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or is missing a field (`ConfigParseError`)
    /// - `federal.yaml` lacks a schedule for any filing status (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<TableMetadata>(&path.join("tables.yaml"))?;
        let federal_path = path.join("federal.yaml");
        let federal = Self::load_yaml::<FederalConfig>(&federal_path)?;
        let states = Self::load_yaml::<StatesConfig>(&path.join("states.yaml"))?;
        let local = Self::load_yaml::<LocalConfig>(&path.join("local.yaml"))?;

        let config = TaxTableConfig::new(
            metadata,
            federal.filing_statuses,
            states.states,
            local.local,
        );
        Self::check_federal_coverage(&config, &federal_path)?;

        info!(
            tables = %config.metadata().name,
            tax_year = config.metadata().tax_year,
            path = %path.display(),
            "Loaded tax tables"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Fails if any filing status has no federal schedule.
    fn check_federal_coverage(config: &TaxTableConfig, federal_path: &Path) -> EngineResult<()> {
        match FilingStatus::ALL
            .into_iter()
            .find(|status| config.federal_schedule(*status).is_none())
        {
            Some(status) => Err(EngineError::ConfigParseError {
                path: federal_path.display().to_string(),
                message: format!("no schedule for filing status '{}'", status),
            }),
            None => Ok(()),
        }
    }

    /// Returns the underlying tax table configuration.
    pub fn config(&self) -> &TaxTableConfig {
        &self.config
    }

    /// Returns the table metadata.
    pub fn metadata(&self) -> &TableMetadata {
        self.config.metadata()
    }
}

impl From<TaxTableConfig> for ConfigLoader {
    fn from(config: TaxTableConfig) -> Self {
        Self { config }
    }
}

impl TaxTables for ConfigLoader {
    fn federal_bracket_tax(
        &self,
        annualized_gross: Decimal,
        filing_status: FilingStatus,
    ) -> Option<Decimal> {
        self.config
            .federal_bracket_tax(annualized_gross, filing_status)
    }

    fn state_tax_info(&self, state_code: &str) -> Option<StateTaxInfo<'_>> {
        self.config.state_tax_info(state_code)
    }

    fn local_tax_rate(&self, state_code: &str, city: &str) -> Decimal {
        self.config.local_tax_rate(state_code, city)
    }
}
