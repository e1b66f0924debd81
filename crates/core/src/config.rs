//! Game configuration and the configuration error type.
//!
//! A configuration is validated once, when an engine or session is built.
//! After that no engine operation can fail.

use std::env;
use std::fmt;

use crate::types::{
    DEFAULT_CHANCE_LIGHT_STARTS_ON, DEFAULT_COLS, DEFAULT_ROWS, MAX_DIMENSION,
};

pub const ENV_ROWS: &str = "LIGHTS_OUT_ROWS";
pub const ENV_COLS: &str = "LIGHTS_OUT_COLS";
pub const ENV_CHANCE: &str = "LIGHTS_OUT_CHANCE";
pub const ENV_SEED: &str = "LIGHTS_OUT_SEED";

/// Errors raised while building a game. This is the only failure mode of the core.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroRows,
    ZeroCols,
    DimensionTooLarge { rows: usize, cols: usize },
    /// Chance is NaN or outside `[0, 1]`.
    ChanceOutOfRange(f64),
    /// Explicit grid rows were empty or of differing lengths.
    RaggedGrid,
    /// An explicit grid does not match the configured dimensions.
    GridMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    InvalidValue { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroRows => write!(f, "rows must be at least 1"),
            ConfigError::ZeroCols => write!(f, "cols must be at least 1"),
            ConfigError::DimensionTooLarge { rows, cols } => write!(
                f,
                "board {}x{} exceeds the maximum of {}x{}",
                rows, cols, MAX_DIMENSION, MAX_DIMENSION
            ),
            ConfigError::ChanceOutOfRange(p) => {
                write!(f, "chance a light starts on must be within [0, 1], got {}", p)
            }
            ConfigError::RaggedGrid => write!(f, "grid rows must be non-empty and equally long"),
            ConfigError::GridMismatch { expected, found } => write!(
                f,
                "grid is {}x{} but the board is configured as {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value for {}: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Board configuration, fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub chance_light_starts_on: f64,
    /// Seed for the random source; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            chance_light_starts_on: DEFAULT_CHANCE_LIGHT_STARTS_ON,
            seed: None,
        }
    }
}

impl BoardConfig {
    pub fn new(rows: usize, cols: usize, chance_light_starts_on: f64) -> Self {
        Self {
            rows,
            cols,
            chance_light_starts_on,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check dimensions (at least 1) and probability.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dimensions(self.rows, self.cols)?;
        let p = self.chance_light_starts_on;
        if !(0.0..=1.0).contains(&p) {
            // NaN fails `contains` as well.
            return Err(ConfigError::ChanceOutOfRange(p));
        }
        Ok(())
    }

    /// Defaults overridden by `LIGHTS_OUT_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`BoardConfig::from_env`], reading variables through `lookup`.
    ///
    /// Blank values are treated as unset. The result is not validated.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(rows) = parse_var(&lookup, ENV_ROWS)? {
            config.rows = rows;
        }
        if let Some(cols) = parse_var(&lookup, ENV_COLS)? {
            config.cols = cols;
        }
        if let Some(chance) = parse_var(&lookup, ENV_CHANCE)? {
            config.chance_light_starts_on = chance;
        }
        if let Some(seed) = parse_var(&lookup, ENV_SEED)? {
            config.seed = Some(seed);
        }
        Ok(config)
    }
}

pub(crate) fn validate_dimensions(rows: usize, cols: usize) -> Result<(), ConfigError> {
    if rows == 0 {
        return Err(ConfigError::ZeroRows);
    }
    if cols == 0 {
        return Err(ConfigError::ZeroCols);
    }
    Ok(())
}

/// Sessions render the whole board, so they cap its size at [`MAX_DIMENSION`].
pub(crate) fn check_session_size(rows: usize, cols: usize) -> Result<(), ConfigError> {
    if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
        return Err(ConfigError::DimensionTooLarge { rows, cols });
    }
    Ok(())
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    let raw = match lookup(key) {
        Some(v) => v,
        None => return Ok(None),
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config_is_valid() {
        let config = BoardConfig::default();
        assert_eq!(config.rows, 5);
        assert_eq!(config.cols, 5);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            BoardConfig::new(0, 5, 0.5).validate(),
            Err(ConfigError::ZeroRows)
        );
        assert_eq!(
            BoardConfig::new(5, 0, 0.5).validate(),
            Err(ConfigError::ZeroCols)
        );
    }

    #[test]
    fn size_cap_applies_to_sessions_only() {
        assert!(BoardConfig::new(MAX_DIMENSION + 1, 1, 0.5).validate().is_ok());
        assert_eq!(
            check_session_size(MAX_DIMENSION + 1, 1),
            Err(ConfigError::DimensionTooLarge {
                rows: MAX_DIMENSION + 1,
                cols: 1
            })
        );
        assert!(check_session_size(MAX_DIMENSION, MAX_DIMENSION).is_ok());
    }

    #[test]
    fn rejects_chance_outside_unit_interval() {
        assert!(matches!(
            BoardConfig::new(3, 3, 1.5).validate(),
            Err(ConfigError::ChanceOutOfRange(_))
        ));
        assert!(matches!(
            BoardConfig::new(3, 3, -0.1).validate(),
            Err(ConfigError::ChanceOutOfRange(_))
        ));
        assert!(matches!(
            BoardConfig::new(3, 3, f64::NAN).validate(),
            Err(ConfigError::ChanceOutOfRange(_))
        ));
        assert!(BoardConfig::new(3, 3, 0.0).validate().is_ok());
        assert!(BoardConfig::new(3, 3, 1.0).validate().is_ok());
    }

    #[test]
    fn lookup_overrides_defaults() {
        let config = BoardConfig::from_lookup(lookup_from(&[
            (ENV_ROWS, "7"),
            (ENV_COLS, " 4 "),
            (ENV_CHANCE, "0.5"),
            (ENV_SEED, "99"),
        ]))
        .unwrap();
        assert_eq!(config.rows, 7);
        assert_eq!(config.cols, 4);
        assert_eq!(config.chance_light_starts_on, 0.5);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn blank_variables_are_ignored() {
        let config = BoardConfig::from_lookup(lookup_from(&[(ENV_ROWS, "  ")])).unwrap();
        assert_eq!(config.rows, DEFAULT_ROWS);
    }

    #[test]
    fn unparseable_variable_is_reported() {
        let err = BoardConfig::from_lookup(lookup_from(&[(ENV_COLS, "wide")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: ENV_COLS.to_string(),
                value: "wide".to_string()
            }
        );
        assert_eq!(err.to_string(), "invalid value for LIGHTS_OUT_COLS: \"wide\"");
    }
}
