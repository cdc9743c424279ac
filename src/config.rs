//! Host configuration loaded from TOML.
//!
//! Every field has a default matching the classic demo (4 s window, 20 ms
//! ticks of 0.02 s, 1 Hz sampled at 8 Hz), so a config file only needs to
//! name what it changes:
//!
//! ```toml
//! window = 2.0
//!
//! [tick]
//! interval_ms = 40
//!
//! [initial]
//! signal_freq = 3.0
//! sampling_freq = 5.0
//! ```

use crate::error::{NyquistError, NyquistResult};
use crate::model::{DEFAULT_CURVE_STEP, DEFAULT_WINDOW};
use crate::{ParamRange, Parameters, SignalModel};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Animation tick settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickConfig {
    /// Wall-clock time between ticks in milliseconds
    pub interval_ms: u64,
    /// Model seconds the cursor advances per tick
    pub increment: f64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            interval_ms: 20,
            increment: 0.02,
        }
    }
}

impl TickConfig {
    /// Tick interval as a `Duration`.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Complete host configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Window length in seconds
    pub window: f64,
    /// Spacing of curve points in seconds
    pub curve_step: f64,
    /// Animation tick settings
    pub tick: TickConfig,
    /// Signal frequency slider
    pub signal_range: ParamRange,
    /// Sampling frequency slider
    pub sampling_range: ParamRange,
    /// Parameters on startup
    pub initial: Parameters,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            curve_step: DEFAULT_CURVE_STEP,
            tick: TickConfig::default(),
            signal_range: ParamRange::SIGNAL_FREQ,
            sampling_range: ParamRange::SAMPLING_FREQ,
            initial: Parameters::default(),
        }
    }
}

impl DemoConfig {
    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> NyquistResult<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> NyquistResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Loads a configuration file, falling back to defaults on any error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load configuration, using defaults: {}", e);
            Self::default()
        })
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> NyquistResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| NyquistError::InvalidConfig(format!("failed to serialize: {}", e)))
    }

    /// Writes the configuration to `path` as TOML.
    pub fn save(&self, path: impl AsRef<Path>) -> NyquistResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_toml_string()?)?;
        tracing::debug!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Checks every value is usable.
    ///
    /// Initial parameters outside their slider ranges are an error rather
    /// than being snapped silently; use [`DemoConfig::initial_parameters`]
    /// for the snapped values.
    pub fn validate(&self) -> NyquistResult<()> {
        let positive = [
            ("window", self.window),
            ("curve_step", self.curve_step),
            ("tick.increment", self.tick.increment),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(NyquistError::InvalidConfig(format!(
                    "{} must be greater than 0, got {}",
                    name, value
                )));
            }
        }
        if self.tick.interval_ms == 0 {
            return Err(NyquistError::InvalidConfig(
                "tick.interval_ms must be greater than 0".to_string(),
            ));
        }
        self.signal_range
            .validate("signal_range")
            .map_err(NyquistError::InvalidConfig)?;
        self.sampling_range
            .validate("sampling_range")
            .map_err(NyquistError::InvalidConfig)?;
        if self.signal_range.min <= 0.0 || self.sampling_range.min <= 0.0 {
            return Err(NyquistError::InvalidConfig(
                "frequency ranges must start above 0 Hz".to_string(),
            ));
        }
        if !self.signal_range.contains(self.initial.signal_freq) {
            return Err(NyquistError::InvalidConfig(format!(
                "initial.signal_freq {} is outside [{}, {}]",
                self.initial.signal_freq, self.signal_range.min, self.signal_range.max
            )));
        }
        if !self.sampling_range.contains(self.initial.sampling_freq) {
            return Err(NyquistError::InvalidConfig(format!(
                "initial.sampling_freq {} is outside [{}, {}]",
                self.initial.sampling_freq, self.sampling_range.min, self.sampling_range.max
            )));
        }
        Ok(())
    }

    /// Initial parameters snapped onto the slider grids.
    pub fn initial_parameters(&self) -> Parameters {
        let snapped = Parameters {
            signal_freq: self.signal_range.snap(self.initial.signal_freq),
            sampling_freq: self.sampling_range.snap(self.initial.sampling_freq),
            show_components: self.initial.show_components,
        };
        if snapped != self.initial {
            tracing::warn!(
                "Snapped initial parameters from {:?} to {:?}",
                self.initial,
                snapped
            );
        }
        snapped
    }

    /// Builds the signal model for this window and curve resolution.
    pub fn model(&self) -> NyquistResult<SignalModel> {
        SignalModel::new(self.window, self.curve_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DemoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick.interval(), Duration::from_millis(20));
        assert_eq!(config.initial_parameters(), Parameters::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DemoConfig::from_toml_str(
            r#"
            window = 2.0

            [initial]
            signal_freq = 3.0
            sampling_freq = 5.0
            "#,
        )
        .unwrap();
        assert_eq!(config.window, 2.0);
        assert_eq!(config.curve_step, DEFAULT_CURVE_STEP);
        assert_eq!(config.tick, TickConfig::default());
        assert_eq!(config.initial.signal_freq, 3.0);
        assert!(!config.initial.show_components);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(DemoConfig::from_toml_str("").unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_rejects_zero_window() {
        let err = DemoConfig::from_toml_str("window = 0.0").unwrap_err();
        assert!(matches!(err, NyquistError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_tick_interval() {
        let err = DemoConfig::from_toml_str("[tick]\ninterval_ms = 0").unwrap_err();
        assert!(matches!(err, NyquistError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_initial_outside_range() {
        let err = DemoConfig::from_toml_str("[initial]\nsampling_freq = 40.0").unwrap_err();
        assert!(err.to_string().contains("initial.sampling_freq"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = DemoConfig::from_toml_str("window = ").unwrap_err();
        assert!(matches!(err, NyquistError::Toml(_)));
    }

    #[test]
    fn test_initial_parameters_snap() {
        let config = DemoConfig {
            initial: Parameters::new(1.04, 7.8),
            ..DemoConfig::default()
        };
        let params = config.initial_parameters();
        assert_eq!(params.signal_freq, 1.0);
        assert_eq!(params.sampling_freq, 8.0);
    }

    #[test]
    fn test_toml_round_trip_of_custom_config() {
        let config = DemoConfig {
            window: 2.0,
            tick: TickConfig {
                interval_ms: 40,
                increment: 0.04,
            },
            ..DemoConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(DemoConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = DemoConfig::load("/nonexistent/nyquist.toml").unwrap_err();
        assert!(matches!(err, NyquistError::Io(_)));
        assert_eq!(
            DemoConfig::load_or_default("/nonexistent/nyquist.toml"),
            DemoConfig::default()
        );
    }

    #[test]
    fn test_model_uses_window() {
        let config = DemoConfig {
            window: 2.0,
            ..DemoConfig::default()
        };
        let model = config.model().unwrap();
        assert_eq!(model.continuous_curve(1.0).unwrap().len(), 100);
    }
}
