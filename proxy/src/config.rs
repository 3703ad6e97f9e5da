//! Proxy settings read from the environment.

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
/// Every backend path the client calls lives under one of these.
pub const DEFAULT_PREFIXES: &str = "/auth,/files";
pub const DEFAULT_MAX_BODY_BYTES: &str = "104857600";

#[derive(Debug, Clone, PartialEq)]
pub struct ProxyConfig {
    pub backend_url: String,
    pub prefixes: Vec<String>,
    pub max_body_bytes: usize,
}

impl ProxyConfig {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let backend_url: String = try_load(&lookup, "FILE_EXPLORER_BACKEND_URL", DEFAULT_BACKEND_URL);
        let prefixes: String = try_load(&lookup, "FILE_EXPLORER_PROXY_PREFIXES", DEFAULT_PREFIXES);
        Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            prefixes: parse_prefixes(&prefixes),
            max_body_bytes: try_load(&lookup, "FILE_EXPLORER_PROXY_MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
        }
    }
}

fn try_load<T: FromStr + Default>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default.parse().unwrap_or_default()
        }
    }
}

/// `"auth, /files/"` becomes `["/auth", "/files"]`.
fn parse_prefixes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|p| p.trim().trim_matches('/'))
        .filter(|p| !p.is_empty())
        .map(|p| format!("/{p}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> ProxyConfig {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ProxyConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]);
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.prefixes, vec!["/auth".to_string(), "/files".to_string()]);
        assert_eq!(config.max_body_bytes, 104_857_600);
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("FILE_EXPLORER_BACKEND_URL", "http://api:9000/"),
            ("FILE_EXPLORER_PROXY_PREFIXES", "auth, /api/ ,"),
            ("FILE_EXPLORER_PROXY_MAX_BODY_BYTES", "1024"),
        ]);
        assert_eq!(config.backend_url, "http://api:9000");
        assert_eq!(config.prefixes, vec!["/auth".to_string(), "/api".to_string()]);
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn invalid_number_falls_back() {
        let config = config_from(&[("FILE_EXPLORER_PROXY_MAX_BODY_BYTES", "lots")]);
        assert_eq!(config.max_body_bytes, 104_857_600);
    }
}
