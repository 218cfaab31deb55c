//! Hub configuration, read from the environment.

use core::str::FromStr;

pub const SEED_VAR: &str = "EMPLOYEE_HUB_SEED";
pub const NOTIFICATION_LIMIT_VAR: &str = "EMPLOYEE_HUB_NOTIFICATION_LIMIT";

const DEFAULT_NOTIFICATION_LIMIT: usize = 20;

/// What the directory holds when the hub starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedMode {
    /// The three sample employees.
    #[default]
    Sample,
    Empty,
}

impl FromStr for SeedMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sample" => Ok(SeedMode::Sample),
            "empty" => Ok(SeedMode::Empty),
            other => Err(format!("unknown seed mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
    pub seed: SeedMode,
    /// Maximum number of notifications kept in the hub history.
    pub notification_limit: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            seed: SeedMode::default(),
            notification_limit: DEFAULT_NOTIFICATION_LIMIT,
        }
    }
}

impl HubConfig {
    /// Read `EMPLOYEE_HUB_SEED` and `EMPLOYEE_HUB_NOTIFICATION_LIMIT`.
    ///
    /// Missing or malformed values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HubConfig::from_env`] but with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = match lookup(SEED_VAR) {
            None => defaults.seed,
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{SEED_VAR} ignored: {e}");
                defaults.seed
            }),
        };

        let notification_limit = match lookup(NOTIFICATION_LIMIT_VAR) {
            None => defaults.notification_limit,
            Some(raw) => raw.trim().parse::<usize>().unwrap_or_else(|e| {
                tracing::warn!("{NOTIFICATION_LIMIT_VAR}={raw:?} ignored: {e}");
                defaults.notification_limit
            }),
        };

        Self {
            seed,
            notification_limit,
        }
    }
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
    fn defaults_when_unset() {
        let cfg = HubConfig::from_lookup(lookup_from(&[]));
        assert_eq!(cfg, HubConfig::default());
        assert_eq!(cfg.seed, SeedMode::Sample);
        assert_eq!(cfg.notification_limit, 20);
    }

    #[test]
    fn reads_values() {
        let cfg = HubConfig::from_lookup(lookup_from(&[
            (SEED_VAR, " Empty "),
            (NOTIFICATION_LIMIT_VAR, "3"),
        ]));
        assert_eq!(cfg.seed, SeedMode::Empty);
        assert_eq!(cfg.notification_limit, 3);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let cfg = HubConfig::from_lookup(lookup_from(&[
            (SEED_VAR, "everything"),
            (NOTIFICATION_LIMIT_VAR, "-1"),
        ]));
        assert_eq!(cfg, HubConfig::default());
    }
}
