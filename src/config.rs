//! Configuration management
//!
//! Holds the form defaults (what the calculator starts with and resets to)
//! and the fuel preset prices. Trip inputs themselves are never written
//! back; the file only changes when the user asks for it via `config init`.
//!
//! Configuration files are stored in platform-specific directories:
//! - macOS: `~/Library/Application Support/fuelsplit/config.yaml`
//! - Linux: `~/.config/fuelsplit/config.yaml`
//! - Windows: `%APPDATA%\fuelsplit\config.yaml`

use crate::splitter::{FuelType, RoundingUnit};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Prices per litre for the fuel presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelPresets {
    pub petrol: f64,
    pub diesel: f64,
}

impl Default for FuelPresets {
    fn default() -> Self {
        FuelPresets {
            petrol: 107.4,
            diesel: 96.2,
        }
    }
}

impl FuelPresets {
    /// Returns the preset price for a fuel type, `None` for `Custom`
    pub fn price_for(&self, fuel_type: FuelType) -> Option<f64> {
        match fuel_type {
            FuelType::Petrol => Some(self.petrol),
            FuelType::Diesel => Some(self.diesel),
            FuelType::Custom => None,
        }
    }
}

/// Values the form starts with and returns to on reset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub distance_km: f64,
    pub mileage_km_per_litre: f64,
    pub people_count: u32,
    pub fuel_type: FuelType,
    /// Price used when `fuel_type` is `custom`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fuel_price: Option<f64>,
    pub include_owner: bool,
    pub rounding_unit: RoundingUnit,
}

impl Default for FormDefaults {
    fn default() -> Self {
        FormDefaults {
            distance_km: 120.0,
            mileage_km_per_litre: 40.0,
            people_count: 3,
            fuel_type: FuelType::Petrol,
            custom_fuel_price: None,
            include_owner: true,
            rounding_unit: RoundingUnit::One,
        }
    }
}

impl FormDefaults {
    /// Price the fuel field starts with
    ///
    /// Presets use their configured price. `Custom` uses
    /// `custom_fuel_price`, or 0 when none is set.
    pub fn initial_fuel_price(&self, presets: &FuelPresets) -> f64 {
        presets
            .price_for(self.fuel_type)
            .or(self.custom_fuel_price)
            .unwrap_or(0.0)
    }
}

/// Application configuration
///
/// Persisted as YAML in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: FormDefaults,
    #[serde(default)]
    pub presets: FuelPresets,
}

impl Config {
    /// Loads configuration from an explicit path
    ///
    /// A missing file yields the built-in defaults.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using built-in defaults");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;

        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Saves the configuration to an explicit path
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents = serde_yaml::to_string(self)?;
        fs::write(path, contents).with_context(|| format!("Failed to write config to {:?}", path))?;

        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Returns the platform-specific configuration file path
    ///
    /// Falls back to `~/.config/fuelsplit/config.yaml` if platform detection fails.
    ///
    /// # Errors
    /// Returns an error if the HOME environment variable is not set (fallback case only).
    pub fn config_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "fuelsplit") {
            Ok(proj_dirs.config_dir().join("config.yaml"))
        } else {
            let home = std::env::var("HOME").context("HOME not set")?;
            Ok(PathBuf::from(home).join(".config/fuelsplit/config.yaml"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/config.yaml");

        let mut config = Config::default();
        config.defaults.people_count = 5;
        config.defaults.rounding_unit = RoundingUnit::Ten;
        config.presets.diesel = 90.5;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "defaults:\n  distance_km: 300\n  fuel_type: diesel\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.defaults.distance_km, 300.0);
        assert_eq!(config.defaults.fuel_type, FuelType::Diesel);
        assert_eq!(config.defaults.people_count, 3);
        assert_eq!(config.presets, FuelPresets::default());
    }

    #[test]
    fn test_invalid_rounding_unit_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "defaults:\n  rounding_unit: 3\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_initial_fuel_price() {
        let presets = FuelPresets::default();
        let mut defaults = FormDefaults::default();
        assert_eq!(defaults.initial_fuel_price(&presets), 107.4);

        defaults.fuel_type = FuelType::Diesel;
        assert_eq!(defaults.initial_fuel_price(&presets), 96.2);

        defaults.fuel_type = FuelType::Custom;
        assert_eq!(defaults.initial_fuel_price(&presets), 0.0);

        defaults.custom_fuel_price = Some(88.0);
        assert_eq!(defaults.initial_fuel_price(&presets), 88.0);
    }
}
