//! Tax table configuration and lookups for the pay stub engine.
//!
//! This module defines the [`TaxTables`] lookup interface the tax engine
//! consumes and a YAML-backed implementation of it.
//!
//! # Example
//!
//! ```no_run
//! use paystub_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/us_2025").unwrap();
//! println!("Loaded tables: {}", config.metadata().name);
//! ```

mod loader;
mod tables;
#[cfg(test)]
pub(crate) mod test_support;
mod types;

pub use loader::ConfigLoader;
pub use tables::{StateTaxInfo, TaxTables};
pub use types::{
    BracketSchedule, FederalConfig, FederalSchedule, LocalConfig, StateConfig, StatesConfig,
    TableMetadata, TaxBracket, TaxTableConfig,
};
