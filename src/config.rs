use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub demo_mode: bool,
    pub surge_tick: Duration,
    pub surge_hold_probability: f64,
    pub surge_seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            demo_mode: true,
            surge_tick: Duration::from_millis(1000),
            surge_hold_probability: 0.3,
            surge_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let demo_mode = match env_map
            .get("DEMO_MODE")
            .map(|s| s.as_str())
            .unwrap_or("true")
        {
            "true" | "1" => true,
            "false" | "0" => false,
            other => {
                return Err(ConfigError::InvalidValue(
                    "DEMO_MODE".to_string(),
                    format!("must be true or false, got {}", other),
                ))
            }
        };

        let tick_ms = env_map
            .get("SURGE_TICK_MS")
            .map(|s| s.as_str())
            .unwrap_or("1000")
            .parse::<u64>()
            .ok()
            .filter(|ms| *ms > 0)
            .ok_or_else(|| {
                ConfigError::InvalidValue(
                    "SURGE_TICK_MS".to_string(),
                    "must be a positive integer".to_string(),
                )
            })?;

        let surge_hold_probability = env_map
            .get("SURGE_HOLD_PROBABILITY")
            .map(|s| s.as_str())
            .unwrap_or("0.3")
            .parse::<f64>()
            .ok()
            .filter(|p| (0.0..=1.0).contains(p))
            .ok_or_else(|| {
                ConfigError::InvalidValue(
                    "SURGE_HOLD_PROBABILITY".to_string(),
                    "must be a number between 0 and 1".to_string(),
                )
            })?;

        let surge_seed = env_map
            .get("SURGE_SEED")
            .map(|s| {
                s.parse::<u64>().map_err(|_| {
                    ConfigError::InvalidValue(
                        "SURGE_SEED".to_string(),
                        "must be a valid u64".to_string(),
                    )
                })
            })
            .transpose()?;

        Ok(Config {
            port,
            demo_mode,
            surge_tick: Duration::from_millis(tick_ms),
            surge_hold_probability,
            surge_seed,
        })
    }
}
