//! Runtime configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `FALLTRIS_SEED` | clock | piece sequence seed (u32) |
//! | `FALLTRIS_TICK_MS` | 16 | frame length, 1..=1000 |
//! | `FALLTRIS_LOG_PATH` | unset | write logs to this file (logging is off when unset) |
//! | `FALLTRIS_LOG` | `info` | `tracing` filter directive |

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};

use crate::types::TICK_MS;

pub const SEED_VAR: &str = "FALLTRIS_SEED";
pub const TICK_MS_VAR: &str = "FALLTRIS_TICK_MS";
pub const LOG_PATH_VAR: &str = "FALLTRIS_LOG_PATH";
pub const LOG_FILTER_VAR: &str = "FALLTRIS_LOG";

const MAX_TICK_MS: u32 = 1000;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub tick_ms: u32,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let value = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = match value(SEED_VAR) {
            Some(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("{SEED_VAR}={raw:?} is not a valid u32 seed"))?,
            None => clock_seed(),
        };

        let tick_ms = match value(TICK_MS_VAR) {
            Some(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("{TICK_MS_VAR}={raw:?} is not a number of milliseconds"))?,
            None => TICK_MS,
        };
        if tick_ms == 0 || tick_ms > MAX_TICK_MS {
            bail!("{TICK_MS_VAR} must be between 1 and {MAX_TICK_MS}, got {tick_ms}");
        }

        Ok(Self {
            seed,
            tick_ms,
            log_path: value(LOG_PATH_VAR),
            log_filter: value(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

/// Seed derived from the wall clock.
fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    (nanos ^ (nanos >> 32)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.tick_ms, 16);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn test_explicit_values() {
        let cfg = config(&[
            (SEED_VAR, "12345"),
            (TICK_MS_VAR, " 33 "),
            (LOG_PATH_VAR, "/tmp/falltris.log"),
            (LOG_FILTER_VAR, "falltris_core=debug"),
        ])
        .unwrap();
        assert_eq!(cfg.seed, 12345);
        assert_eq!(cfg.tick_ms, 33);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/falltris.log"));
        assert_eq!(cfg.log_filter, "falltris_core=debug");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let cfg = config(&[(TICK_MS_VAR, "  "), (LOG_PATH_VAR, "")]).unwrap();
        assert_eq!(cfg.tick_ms, 16);
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn test_bad_seed_is_an_error() {
        let err = config(&[(SEED_VAR, "-1")]).unwrap_err();
        assert!(format!("{err:#}").contains(SEED_VAR));
    }

    #[test]
    fn test_tick_range_is_checked() {
        assert!(config(&[(TICK_MS_VAR, "0")]).is_err());
        assert!(config(&[(TICK_MS_VAR, "1001")]).is_err());
        assert!(config(&[(TICK_MS_VAR, "fast")]).is_err());
        assert_eq!(config(&[(TICK_MS_VAR, "1000")]).unwrap().tick_ms, 1000);
    }
}
