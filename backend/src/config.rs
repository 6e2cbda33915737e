//! Backend configuration read from the environment.

use std::{str::FromStr, time::Duration};

use anyhow::Context;
use common::{
    pagination::PageSize,
    search_const::{
        DEFAULT_CACHE_TTL_SECS, DEFAULT_MET_API_URL, DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_TIMEOUT_SECS,
        DEFAULT_SESSION_IDLE_SECS,
    },
    search_query::ImageFilter,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub met_api_url: String,
    pub request_timeout: Duration,
    pub cache_ttl: Duration,
    pub session_idle_timeout: Duration,
    pub default_page_size: PageSize,
    pub only_with_images: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            met_api_url: DEFAULT_MET_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            session_idle_timeout: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
            default_page_size: PageSize::default(),
            only_with_images: true,
        }
    }
}

impl BackendConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source; unset variables
    /// take their defaults, unparseable ones are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let met_api_url = lookup("MET_API_URL").unwrap_or(DEFAULT_MET_API_URL.to_string());
        let request_timeout_secs: u64 = parse_var(&lookup, "MET_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
        let cache_ttl_secs: u64 = parse_var(&lookup, "MET_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?;
        let session_idle_secs: u64 = parse_var(&lookup, "MET_SESSION_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS)?;
        let page_size: u64 = parse_var(&lookup, "MET_DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let default_page_size = PageSize::new(page_size).context("MET_DEFAULT_PAGE_SIZE")?;
        let only_with_images: bool = parse_var(&lookup, "MET_ONLY_WITH_IMAGES", true)?;

        if request_timeout_secs == 0 {
            anyhow::bail!("MET_REQUEST_TIMEOUT_SECS must be greater than zero");
        }
        if session_idle_secs == 0 {
            anyhow::bail!("MET_SESSION_IDLE_SECS must be greater than zero");
        }

        Ok(Self {
            met_api_url: met_api_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(request_timeout_secs),
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            session_idle_timeout: Duration::from_secs(session_idle_secs),
            default_page_size,
            only_with_images,
        })
    }

    pub fn default_image_filter(&self) -> ImageFilter {
        ImageFilter::from_only_with_images(self.only_with_images)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse::<T>().with_context(|| format!("invalid value for {name}: {raw:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn unset_variables_use_defaults() {
        let config = BackendConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, BackendConfig::default());
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.cache_ttl, Duration::from_secs(3600));
        assert_eq!(config.session_idle_timeout, Duration::from_secs(4 * 3600));
        assert_eq!(config.default_page_size.get(), 12);
        assert_eq!(config.default_image_filter(), ImageFilter::RequireImages);
    }

    #[test]
    fn variables_override_defaults() {
        let config = BackendConfig::from_lookup(lookup_from(&[
            ("MET_API_URL", "http://127.0.0.1:9000/v1/"),
            ("MET_REQUEST_TIMEOUT_SECS", "5"),
            ("MET_CACHE_TTL_SECS", "60"),
            ("MET_SESSION_IDLE_SECS", "900"),
            ("MET_DEFAULT_PAGE_SIZE", "18"),
            ("MET_ONLY_WITH_IMAGES", "false"),
        ]))
        .unwrap();
        assert_eq!(config.met_api_url, "http://127.0.0.1:9000/v1");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.session_idle_timeout, Duration::from_secs(900));
        assert_eq!(config.default_page_size.get(), 18);
        assert_eq!(config.default_image_filter(), ImageFilter::NoFilter);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(BackendConfig::from_lookup(lookup_from(&[("MET_DEFAULT_PAGE_SIZE", "10")])).is_err());
        assert!(BackendConfig::from_lookup(lookup_from(&[("MET_CACHE_TTL_SECS", "soon")])).is_err());
        assert!(BackendConfig::from_lookup(lookup_from(&[("MET_REQUEST_TIMEOUT_SECS", "0")])).is_err());
        assert!(BackendConfig::from_lookup(lookup_from(&[("MET_SESSION_IDLE_SECS", "0")])).is_err());
    }
}
