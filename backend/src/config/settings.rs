use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_DIST_DIR: &str = "../frontend/dist";
const DEFAULT_SITE_URL: &str = "https://responsibleaiok.org";
const DEFAULT_LEGACY_HOSTS: &str = "responsibleaiok.com,aistulsa.com";

/// Runtime settings, read once at startup.
#[derive(Clone, Debug)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    /// Trunk output directory holding `index.html` and the wasm bundle.
    pub dist_dir: PathBuf,
    /// Primary origin without a trailing slash.
    pub site_url: String,
    /// Lowercase host names that redirect to `site_url`.
    pub legacy_hosts: Vec<String>,
    pub sentry_dsn: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let raw_addr = var("RAIOK_BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = raw_addr
            .parse()
            .with_context(|| format!("RAIOK_BIND_ADDR is not a socket address: {}", raw_addr))?;

        let site_url = var("RAIOK_SITE_URL", DEFAULT_SITE_URL)
            .trim_end_matches('/')
            .to_string();
        if !site_url.starts_with("http://") && !site_url.starts_with("https://") {
            bail!("RAIOK_SITE_URL must be an http(s) URL, got {}", site_url);
        }

        let legacy_hosts = var("RAIOK_LEGACY_HOSTS", DEFAULT_LEGACY_HOSTS)
            .split(',')
            .map(|host| host.trim().to_ascii_lowercase())
            .filter(|host| !host.is_empty())
            .collect();

        let sentry_dsn = lookup("SENTRY_DSN").filter(|dsn| !dsn.trim().is_empty());

        Ok(Self {
            bind_addr,
            dist_dir: PathBuf::from(var("RAIOK_DIST_DIR", DEFAULT_DIST_DIR)),
            site_url,
            legacy_hosts,
            sentry_dsn,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let settings = settings(&[]).unwrap();
        assert_eq!(settings.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(settings.dist_dir, PathBuf::from("../frontend/dist"));
        assert_eq!(settings.site_url, "https://responsibleaiok.org");
        assert_eq!(settings.legacy_hosts, vec!["responsibleaiok.com", "aistulsa.com"]);
        assert!(settings.sentry_dsn.is_none());
    }

    #[test]
    fn values_are_normalised() {
        let settings = settings(&[
            ("RAIOK_SITE_URL", "https://example.org/"),
            ("RAIOK_LEGACY_HOSTS", " Old.Example.com , ,other.net"),
            ("SENTRY_DSN", "  "),
        ])
        .unwrap();
        assert_eq!(settings.site_url, "https://example.org");
        assert_eq!(settings.legacy_hosts, vec!["old.example.com", "other.net"]);
        assert!(settings.sentry_dsn.is_none());
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(settings(&[("RAIOK_BIND_ADDR", "localhost")]).is_err());
        assert!(settings(&[("RAIOK_SITE_URL", "responsibleaiok.org")]).is_err());
    }
}
