//! Server configuration

use chrono_tz::Tz;

use crate::BoxError;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Time zone in which business hours are interpreted
    pub business_timezone: Tz,
    /// Page size used when a request pages without naming a limit
    pub default_page_limit: u32,
    /// Largest `limit` a client may request
    pub max_page_limit: u32,
}

impl Config {
    pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BoxError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let business_timezone = match var("BUSINESS_TIMEZONE") {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|e| format!("BUSINESS_TIMEZONE is invalid: {e}"))?,
            None => Self::DEFAULT_TIMEZONE,
        };

        let max_page_limit = parse_or(var("MAX_PAGE_LIMIT"), "MAX_PAGE_LIMIT", 100)?;
        let default_page_limit = parse_or(
            var("DEFAULT_PAGE_LIMIT"),
            "DEFAULT_PAGE_LIMIT",
            shared::browse::DEFAULT_PAGE_SIZE,
        )?;
        if max_page_limit == 0 || default_page_limit == 0 || default_page_limit > max_page_limit {
            return Err(format!(
                "page limits must satisfy 0 < DEFAULT_PAGE_LIMIT ({default_page_limit}) <= MAX_PAGE_LIMIT ({max_page_limit})"
            )
            .into());
        }

        Ok(Self {
            database_url: var("DATABASE_URL").ok_or("DATABASE_URL must be set")?,
            http_port: parse_or(var("HTTP_PORT"), "HTTP_PORT", 8080)?,
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            business_timezone,
            default_page_limit,
            max_page_limit,
        })
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, name: &str, default: T) -> Result<T, BoxError> {
    match raw {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| format!("{name} is not a valid number: {v}").into()),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, BoxError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/resto")]).unwrap();
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.environment, "development");
        assert_eq!(config.business_timezone, chrono_tz::America::New_York);
        assert_eq!(config.default_page_limit, 9);
        assert_eq!(config.max_page_limit, 100);
    }

    #[test]
    fn test_database_url_required() {
        assert!(load(&[]).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("DATABASE_URL", "postgres://db/resto"),
            ("HTTP_PORT", "9000"),
            ("BUSINESS_TIMEZONE", "America/Los_Angeles"),
            ("DEFAULT_PAGE_LIMIT", "12"),
        ])
        .unwrap();
        assert_eq!(config.http_port, 9000);
        assert_eq!(config.business_timezone, chrono_tz::America::Los_Angeles);
        assert_eq!(config.default_page_limit, 12);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let base = ("DATABASE_URL", "postgres://db/resto");
        assert!(load(&[base, ("BUSINESS_TIMEZONE", "Mars/Olympus")]).is_err());
        assert!(load(&[base, ("HTTP_PORT", "eighty")]).is_err());
        assert!(load(&[base, ("DEFAULT_PAGE_LIMIT", "500")]).is_err());
    }
}
