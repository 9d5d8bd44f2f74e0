use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,

    // Rate limiting, 0 disables the limiter
    pub rate_api_per_min: u32,

    /// Hours that make up one full paid day.
    pub standard_day_hours: f64,

    pub api_prefix: String,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let standard_day_hours: f64 = parse_var(&lookup, "STANDARD_DAY_HOURS", "8")?;
        if !standard_day_hours.is_finite() || standard_day_hours <= 0.0 {
            anyhow::bail!("STANDARD_DAY_HOURS must be a positive number");
        }

        Ok(Self {
            server_addr: var("SERVER_ADDR", "127.0.0.1:8001"),
            database_url: var("DATABASE_URL", "sqlite://wageflow.db?mode=rwc"),
            rate_api_per_min: parse_var(&lookup, "RATE_API_PER_MIN", "1000")?,
            standard_day_hours,
            api_prefix: var("API_PREFIX", "/api"),
            log_dir: var("LOG_DIR", "logs"),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: &str) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .unwrap_or_else(|| default.to_string())
        .parse()
        .with_context(|| format!("{key} is not a valid value"))
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
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.server_addr, "127.0.0.1:8001");
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.rate_api_per_min, 1000);
        assert_eq!(config.standard_day_hours, 8.0);
        assert_eq!(config.log_dir, "logs");
    }

    #[test]
    fn overrides_are_read() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_ADDR", "0.0.0.0:9000"),
            ("RATE_API_PER_MIN", "0"),
            ("STANDARD_DAY_HOURS", "9.5"),
        ]))
        .unwrap();
        assert_eq!(config.server_addr, "0.0.0.0:9000");
        assert_eq!(config.rate_api_per_min, 0);
        assert_eq!(config.standard_day_hours, 9.5);
    }

    #[test]
    fn bad_numbers_are_errors() {
        assert!(Config::from_lookup(lookup_from(&[("RATE_API_PER_MIN", "lots")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("STANDARD_DAY_HOURS", "0")])).is_err());
    }
}
