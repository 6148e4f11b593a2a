//! Runtime settings.
//!
//! Every key has a default in the `SettingKey` table. Sources are layered
//! lowest to highest:
//! 1) table defaults
//! 2) config file (`riskboard.toml` in the working directory if present, or
//!    an explicit path, which must exist)
//! 3) environment, `RISKBOARD__<KEY>` (e.g. `RISKBOARD__IMPORT_MAX_ROWS=50`)
//!
//! Loaded values are validated before they are handed out.

use std::path::{Path, PathBuf};

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;
use thiserror::Error;

/// Config file looked up when no explicit path is given (extension optional).
pub const DEFAULT_SETTINGS_FILE: &str = "riskboard";

/// Environment prefix.
pub const ENV_PREFIX: &str = "RISKBOARD";

/// Upper bound for `residual_precision`.
pub const MAX_RESIDUAL_PRECISION: usize = 6;

// --- Parameter table ----------------------------------------------------

/// Every recognised setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    LogFilter,
    SeedSampleRisks,
    ImportMaxRows,
    ResidualPrecision,
    ImportPath,
}

/// Default for a setting. `Unset` keys stay absent unless a source sets them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingDefault {
    Text(&'static str),
    Flag(bool),
    Count(i64),
    Unset,
}

pub const ALL_SETTINGS: [SettingKey; 5] = [
    SettingKey::LogFilter,
    SettingKey::SeedSampleRisks,
    SettingKey::ImportMaxRows,
    SettingKey::ResidualPrecision,
    SettingKey::ImportPath,
];

pub fn setting_name(key: SettingKey) -> &'static str {
    match key {
        SettingKey::LogFilter => "log_filter",
        SettingKey::SeedSampleRisks => "seed_sample_risks",
        SettingKey::ImportMaxRows => "import_max_rows",
        SettingKey::ResidualPrecision => "residual_precision",
        SettingKey::ImportPath => "import_path",
    }
}

pub fn setting_default(key: SettingKey) -> SettingDefault {
    match key {
        SettingKey::LogFilter => SettingDefault::Text("info"),
        SettingKey::SeedSampleRisks => SettingDefault::Flag(true),
        SettingKey::ImportMaxRows => SettingDefault::Count(1000),
        SettingKey::ResidualPrecision => SettingDefault::Count(1),
        SettingKey::ImportPath => SettingDefault::Unset,
    }
}

pub fn setting_by_name(name: &str) -> Option<SettingKey> {
    ALL_SETTINGS
        .iter()
        .copied()
        .find(|key| setting_name(*key) == name)
}

// --- Errors -------------------------------------------------------------

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Load(#[from] ConfigError),
    #[error("invalid setting '{key}': {reason}")]
    Invalid { key: &'static str, reason: String },
}

// --- Settings -----------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Seed the register with the demo risks at startup.
    pub seed_sample_risks: bool,
    pub import_max_rows: usize,
    /// Decimal places when printing residual scores.
    pub residual_precision: usize,
    /// JSON row file imported at startup.
    #[serde(default)]
    pub import_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            seed_sample_risks: true,
            import_max_rows: 1000,
            residual_precision: 1,
            import_path: None,
        }
    }
}

impl Settings {
    /// Load from defaults, the config file, and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_with_env(path, None)
    }

    /// As `load`, with an explicit environment map in place of the process
    /// environment when `env` is `Some`.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, SettingsError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };

        let settings: Settings = with_defaults(Config::builder())?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        tracing::debug!(?settings, "settings loaded");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.log_filter.trim().is_empty() {
            return Err(invalid(SettingKey::LogFilter, "must not be empty"));
        }
        if self.import_max_rows == 0 {
            return Err(invalid(SettingKey::ImportMaxRows, "must be at least 1"));
        }
        if self.residual_precision > MAX_RESIDUAL_PRECISION {
            return Err(invalid(
                SettingKey::ResidualPrecision,
                format!("must be at most {MAX_RESIDUAL_PRECISION}"),
            ));
        }
        Ok(())
    }
}

fn with_defaults(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    for key in ALL_SETTINGS {
        let name = setting_name(key);
        builder = match setting_default(key) {
            SettingDefault::Text(value) => builder.set_default(name, value)?,
            SettingDefault::Flag(value) => builder.set_default(name, value)?,
            SettingDefault::Count(value) => builder.set_default(name, value)?,
            SettingDefault::Unset => builder,
        };
    }
    Ok(builder)
}

fn invalid(key: SettingKey, reason: impl Into<String>) -> SettingsError {
    SettingsError::Invalid {
        key: setting_name(key),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_setting_round_trips_by_name() {
        for key in ALL_SETTINGS {
            assert_eq!(setting_by_name(setting_name(key)), Some(key));
        }
    }

    #[test]
    fn table_defaults_match_default_settings() {
        let defaults = Settings::default();
        match setting_default(SettingKey::LogFilter) {
            SettingDefault::Text(value) => assert_eq!(value, defaults.log_filter),
            other => panic!("expected text default, got {other:?}"),
        }
        assert_eq!(
            setting_default(SettingKey::ImportMaxRows),
            SettingDefault::Count(defaults.import_max_rows as i64)
        );
        assert_eq!(
            setting_default(SettingKey::ResidualPrecision),
            SettingDefault::Count(defaults.residual_precision as i64)
        );
        assert_eq!(
            setting_default(SettingKey::SeedSampleRisks),
            SettingDefault::Flag(defaults.seed_sample_risks)
        );
        assert_eq!(setting_default(SettingKey::ImportPath), SettingDefault::Unset);
    }
}
