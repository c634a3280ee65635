//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading regime
//! metadata and per-jurisdiction rate tables from YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::RatePeriodTable;

use super::types::{RateTableFile, RegimeMetadata};

/// Loads and provides access to the regime configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides the rate period table for each configured jurisdiction.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/coia/
/// ├── regime.yaml     # Regime metadata
/// └── rates/
///     └── bc.yaml     # Rate periods for one jurisdiction
/// ```
///
/// # Example
///
/// ```no_run
/// use coi_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/coia").unwrap();
/// let table = loader.rate_table("BC").unwrap();
/// println!("{} periods for BC", table.periods().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: RegimeMetadata,
    tables: HashMap<String, RatePeriodTable>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/coia")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `regime.yaml` or the `rates` directory is missing
    /// - Any file contains invalid YAML
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let regime_path = path.join("regime.yaml");
        let metadata = Self::load_yaml::<RegimeMetadata>(&regime_path)?;

        let rates_dir = path.join("rates");
        let tables = Self::load_rate_tables(&rates_dir)?;

        Ok(Self { metadata, tables })
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

    /// Loads every rate file from the rates directory.
    fn load_rate_tables(rates_dir: &Path) -> EngineResult<HashMap<String, RatePeriodTable>> {
        let rates_dir_str = rates_dir.display().to_string();

        if !rates_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str,
        })?;

        let mut tables = HashMap::new();
        for entry in entries {
            let entry = entry.map_err(|e| EngineError::ConfigParseError {
                path: rates_dir.display().to_string(),
                message: e.to_string(),
            })?;
            let file_path = entry.path();

            if file_path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }

            let file = Self::load_yaml::<RateTableFile>(&file_path)?;
            let table = RatePeriodTable::from_specs(
                file.jurisdiction.clone(),
                file.periods,
                file.valid_until,
            );
            tables.insert(file.jurisdiction, table);
        }

        Ok(tables)
    }

    /// The regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        &self.metadata
    }

    /// The rate table for a jurisdiction code.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::JurisdictionNotFound`] when no rate file was
    /// loaded for the code.
    pub fn rate_table(&self, code: &str) -> EngineResult<&RatePeriodTable> {
        self.tables
            .get(code)
            .ok_or_else(|| EngineError::JurisdictionNotFound {
                code: code.to_string(),
            })
    }

    /// The configured jurisdiction codes, sorted ascending.
    pub fn jurisdictions(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    use crate::models::InterestMode;

    fn config_path() -> &'static str {
        "./config/coia"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.regime().name, "Court Order Interest");
        assert!(loader.regime().statute.contains("Court Order Interest Act"));
    }

    #[test]
    fn test_bc_table_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let table = loader.rate_table("BC").unwrap();

        assert_eq!(table.jurisdiction(), "BC");
        assert!(!table.is_empty());
    }

    #[test]
    fn test_bc_rates_for_2024() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let table = loader.rate_table("BC").unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(table.lookup_rate(date, InterestMode::Prejudgment), dec("5.45"));
        assert_eq!(table.lookup_rate(date, InterestMode::Postjudgment), dec("7.45"));
    }

    #[test]
    fn test_bc_end_dates_derived() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let table = loader.rate_table("BC").unwrap();

        // Semi-annual periods: each ends the day before the next begins
        let first = &table.periods()[0];
        let second = &table.periods()[1];
        assert_eq!(
            first.end_date.succ_opt().unwrap(),
            second.start_date
        );
    }

    #[test]
    fn test_unknown_jurisdiction_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.rate_table("YT") {
            Err(EngineError::JurisdictionNotFound { code }) => assert_eq!(code, "YT"),
            other => panic!("expected JurisdictionNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_jurisdictions_sorted() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let codes = loader.jurisdictions();

        assert!(codes.contains(&"BC"));
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("regime.yaml"));
            }
            other => panic!("expected ConfigNotFound, got {:?}", other),
        }
    }
}
