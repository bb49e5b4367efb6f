use std::env;
use std::net::SocketAddr;

const DEFAULT_DATABASE_URL: &str = "database.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";

#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub cors_origins: CorsOrigins,
    pub seed_defaults: bool, // insert the default marketing content into empty tables
    pub sentry_dsn: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let database_url = non_empty("DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let bind_raw = non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.trim().parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let cors_origins = match non_empty("CORS_ORIGINS") {
            None => CorsOrigins::Any,
            Some(raw) => parse_origins(&raw),
        };

        let seed_defaults = match non_empty("SEED_DEFAULTS") {
            None => true,
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::Invalid {
                name: "SEED_DEFAULTS",
                value: raw,
            })?,
        };

        Ok(Self {
            database_url,
            bind_addr,
            cors_origins,
            seed_defaults,
            sentry_dsn: non_empty("SENTRY_DSN"),
        })
    }
}

fn parse_origins(raw: &str) -> CorsOrigins {
    let origins: Vec<String> = raw
        .split(',')
        .map(|o| o.trim().trim_end_matches('/').to_string())
        .filter(|o| !o.is_empty())
        .collect();

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        CorsOrigins::Any
    } else {
        CorsOrigins::List(origins)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, "database.db");
        assert_eq!(config.bind_addr, "127.0.0.1:3001".parse().unwrap());
        assert_eq!(config.cors_origins, CorsOrigins::Any);
        assert!(config.seed_defaults);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn cors_origin_list_is_trimmed() {
        let config = config_from(&[(
            "CORS_ORIGINS",
            "https://christophermerrick.co.uk/, http://localhost:8080",
        )])
        .unwrap();
        assert_eq!(
            config.cors_origins,
            CorsOrigins::List(vec![
                "https://christophermerrick.co.uk".to_string(),
                "http://localhost:8080".to_string(),
            ])
        );
    }

    #[test]
    fn wildcard_anywhere_means_any_origin() {
        let config = config_from(&[("CORS_ORIGINS", "https://a.example,*")]).unwrap();
        assert_eq!(config.cors_origins, CorsOrigins::Any);
    }

    #[test]
    fn bad_bind_addr_names_the_variable() {
        let err = config_from(&[("BIND_ADDR", "not-an-addr")]).unwrap_err();
        assert!(err.to_string().contains("BIND_ADDR"));
    }

    #[test]
    fn seed_flag_accepts_common_spellings() {
        assert!(!config_from(&[("SEED_DEFAULTS", "off")]).unwrap().seed_defaults);
        assert!(config_from(&[("SEED_DEFAULTS", "YES")]).unwrap().seed_defaults);
        assert!(config_from(&[("SEED_DEFAULTS", "maybe")]).is_err());
    }
}
