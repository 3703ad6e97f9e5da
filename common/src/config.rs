//! Backend address configuration.

/// Backend address used when nothing is configured at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_string() }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    /// Resolves the configured address. An empty value (or `/`) means "same
    /// origin as the page", so requests go through the server-side proxy.
    pub fn resolve(configured: Option<&str>, page_origin: Option<String>) -> Self {
        match configured.map(str::trim) {
            None => Self::default(),
            Some("") | Some("/") => Self::new(page_origin.unwrap_or_default()),
            Some(url) => Self::new(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_uses_default_backend() {
        assert_eq!(ApiConfig::resolve(None, Some("http://app.local".into())).base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn empty_uses_page_origin() {
        let origin = Some("https://files.example.com".to_string());
        assert_eq!(ApiConfig::resolve(Some(""), origin.clone()).base_url, "https://files.example.com");
        assert_eq!(ApiConfig::resolve(Some("/"), origin).base_url, "https://files.example.com");
        assert_eq!(ApiConfig::resolve(Some(""), None).base_url, "");
    }

    #[test]
    fn explicit_value_is_trimmed() {
        assert_eq!(ApiConfig::resolve(Some("http://api:8000/"), None).base_url, "http://api:8000");
    }
}
