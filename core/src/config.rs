//! Simulation timings.
//!
//! Defaults reproduce the dashboard cadence: a 10% progress step every
//! 500 ms, a 2 s verification delay and a 3 s toast.
//!
//! The CLI layers an optional JSON file and then environment variables
//! (a `.env` file is honoured) on top of the defaults. The WASM frontend
//! uses the defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Interval between two upload progress ticks.
pub const DEFAULT_UPLOAD_TICK_MS: u64 = 500;

/// Progress added per tick, in percent.
pub const DEFAULT_UPLOAD_STEP: u8 = 10;

/// Delay before a verification reports success.
pub const DEFAULT_VERIFY_DELAY_MS: u64 = 2000;

/// How long a toast stays visible.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

pub const ENV_UPLOAD_TICK_MS: &str = "FILECHAIN_UPLOAD_TICK_MS";
pub const ENV_UPLOAD_STEP: &str = "FILECHAIN_UPLOAD_STEP";
pub const ENV_VERIFY_DELAY_MS: &str = "FILECHAIN_VERIFY_DELAY_MS";
pub const ENV_TOAST_DURATION_MS: &str = "FILECHAIN_TOAST_DURATION_MS";

/// Timings of the simulated flows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub upload_tick_ms: u64,
    pub upload_step: u8,
    pub verify_delay_ms: u64,
    pub toast_duration_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            upload_tick_ms: DEFAULT_UPLOAD_TICK_MS,
            upload_step: DEFAULT_UPLOAD_STEP,
            verify_delay_ms: DEFAULT_VERIFY_DELAY_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl SimulationConfig {
    pub fn upload_tick(&self) -> Duration {
        Duration::from_millis(self.upload_tick_ms)
    }

    pub fn verify_delay(&self) -> Duration {
        Duration::from_millis(self.verify_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Load a JSON file. Missing fields keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup.
    ///
    /// `lookup` is `std::env::var(..).ok()` in production; tests pass a map.
    pub fn with_overrides<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_var(&lookup, ENV_UPLOAD_TICK_MS)? {
            self.upload_tick_ms = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_UPLOAD_STEP)? {
            self.upload_step = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_VERIFY_DELAY_MS)? {
            self.verify_delay_ms = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_TOAST_DURATION_MS)? {
            self.toast_duration_ms = v;
        }
        self.validate()?;
        Ok(self)
    }

    /// Defaults, then `path` if given, then the process environment.
    #[cfg(feature = "cli")]
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        // A missing .env file is the normal case.
        if let Ok(env_path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", env_path.display());
        }

        let base = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        base.with_overrides(|var| std::env::var(var).ok())
    }

    /// Reject timings the state machines cannot run with.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(1..=100).contains(&self.upload_step) {
            return Err(ConfigError::InvalidValue {
                field: "upload_step",
                message: format!("must be between 1 and 100, got {}", self.upload_step),
            });
        }
        for (field, value) in [
            ("upload_tick_ms", self.upload_tick_ms),
            ("verify_delay_ms", self.verify_delay_ms),
            ("toast_duration_ms", self.toast_duration_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    message: "must be greater than 0".into(),
                });
            }
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, var: &str) -> ConfigResult<Option<T>>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv {
                var: var.to_string(),
                value: raw,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.upload_tick(), Duration::from_millis(500));
        assert_eq!(config.upload_step, 10);
        assert_eq!(config.verify_delay(), Duration::from_millis(2000));
        assert_eq!(config.toast_duration(), Duration::from_millis(3000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "upload_step": 25 }}"#).unwrap();

        let config = SimulationConfig::from_file(file.path()).unwrap();
        assert_eq!(config.upload_step, 25);
        assert_eq!(config.upload_tick_ms, DEFAULT_UPLOAD_TICK_MS);
    }

    #[test]
    fn test_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            SimulationConfig::from_file(file.path()),
            Err(ConfigError::JsonError(_))
        ));

        let missing = SimulationConfig::from_file("/definitely/not/here.json");
        assert!(matches!(missing, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_env_overrides_win() {
        let config = SimulationConfig::default()
            .with_overrides(env(&[(ENV_UPLOAD_TICK_MS, "100"), (ENV_TOAST_DURATION_MS, " 750 ")]))
            .unwrap();
        assert_eq!(config.upload_tick_ms, 100);
        assert_eq!(config.toast_duration_ms, 750);
        assert_eq!(config.verify_delay_ms, DEFAULT_VERIFY_DELAY_MS);
    }

    #[test]
    fn test_env_garbage_is_rejected() {
        let err = SimulationConfig::default()
            .with_overrides(env(&[(ENV_UPLOAD_STEP, "ten")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { ref var, .. } if var == ENV_UPLOAD_STEP));
    }

    #[test]
    fn test_validation_bounds() {
        let zero_step = SimulationConfig { upload_step: 0, ..Default::default() };
        assert!(zero_step.validate().is_err());

        let zero_tick = SimulationConfig { upload_tick_ms: 0, ..Default::default() };
        let err = zero_tick.validate().unwrap_err();
        assert!(err.to_string().contains("upload_tick_ms"));

        let full_step = SimulationConfig { upload_step: 100, ..Default::default() };
        assert!(full_step.validate().is_ok());
    }
}
